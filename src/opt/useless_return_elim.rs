use super::{ForEachFunctionBody, Pass};
use crate::ast::{Node, NodeKind};
use crate::diag::Reporter;
use crate::traverse::traverse;

/// Removes a trailing `return;` (or `return undefined;`) from a function
/// body; falling off the end yields undefined anyway.
pub struct UselessReturnElim;

impl Pass for UselessReturnElim {
    fn name(&self) -> &'static str {
        "useless-return-elim"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        let mut changed = false;
        traverse(
            program,
            &mut ForEachFunctionBody(|body: &mut Vec<Node>| {
                if body.last().is_some_and(is_useless_return) {
                    if let Some(removed) = body.pop() {
                        diags.fixed(removed.loc, "Useless return, removed".to_string());
                        changed = true;
                    }
                }
            }),
        );
        changed
    }
}

fn is_useless_return(stmt: &Node) -> bool {
    let NodeKind::ReturnStatement { argument } = &stmt.kind else {
        return false;
    };
    match argument {
        None => true,
        Some(arg) => matches!(&arg.kind, NodeKind::Identifier { name } if name == "undefined"),
    }
}
