use super::{remove_where, ForEachBlock, Pass};
use crate::ast::{Node, NodeKind};
use crate::diag::Reporter;
use crate::traverse::traverse;

/// Removes `;` statements from every block.
pub struct EmptyStmtElim;

impl Pass for EmptyStmtElim {
    fn name(&self) -> &'static str {
        "empty-stmt-elim"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        let mut changed = false;
        traverse(
            program,
            &mut ForEachBlock(|block: &mut Vec<Node>| {
                remove_where(
                    block,
                    |stmt| matches!(stmt.kind, NodeKind::EmptyStatement),
                    |removed| {
                        diags.fixed(removed.loc, "Empty statement, removed".to_string());
                        changed = true;
                    },
                );
            }),
        );
        changed
    }
}
