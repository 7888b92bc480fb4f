use super::{remove_where, ForEachBlock, Pass};
use crate::ast::{Node, NodeKind};
use crate::diag::Reporter;
use crate::traverse::traverse;

/// Removes `debugger` statements, which are development leftovers.
pub struct DebuggerElim;

impl Pass for DebuggerElim {
    fn name(&self) -> &'static str {
        "debugger-elim"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        let mut changed = false;
        traverse(
            program,
            &mut ForEachBlock(|block: &mut Vec<Node>| {
                remove_where(
                    block,
                    |stmt| matches!(stmt.kind, NodeKind::DebuggerStatement),
                    |removed| {
                        diags.fixed(removed.loc, "\"debugger\" statement, removed".to_string());
                        changed = true;
                    },
                );
            }),
        );
        changed
    }
}
