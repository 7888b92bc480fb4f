use super::{ForEachFunctionBody, Pass};
use crate::ast::{Node, NodeKind};
use crate::diag::Reporter;
use crate::scan::{except, has_reference};
use crate::traverse::traverse;

/// Removes function declarations never referenced by the other statements of
/// their function-scoped block. The declaration's own subtree is excluded
/// from the reference check, so a recursive function with no outside callers
/// is still dead.
pub struct DeadFuncElim;

impl Pass for DeadFuncElim {
    fn name(&self) -> &'static str {
        "dead-func-elim"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        let mut changed = false;
        traverse(
            program,
            &mut ForEachFunctionBody(|block: &mut Vec<Node>| {
                let mut i = 0;
                while i < block.len() {
                    let name = match declared_func_name(&block[i]) {
                        Some(name) if !has_reference(name, except(block, i)) => name.to_string(),
                        _ => {
                            i += 1;
                            continue;
                        }
                    };
                    let removed = block.remove(i);
                    diags.fixed(
                        removed.loc,
                        format!("Unreferenced function {name}, removed"),
                    );
                    changed = true;
                }
            }),
        );
        changed
    }
}

fn declared_func_name(stmt: &Node) -> Option<&str> {
    let NodeKind::FunctionDeclaration { id: Some(id), .. } = &stmt.kind else {
        return None;
    };
    match &id.kind {
        NodeKind::Identifier { name } => Some(name),
        _ => None,
    }
}
