use super::{ForEachFunctionBody, Pass};
use crate::ast::{DeclKind, Node, NodeKind};
use crate::diag::Reporter;
use crate::scan::{except, has_reference};
use crate::traverse::traverse;

/// Removes `var` declarators whose name is referenced neither by the other
/// statements of the function-scoped block nor by sibling declarators of the
/// same declaration. A declaration left with no declarators is removed
/// silently.
pub struct DeadVarElim;

impl Pass for DeadVarElim {
    fn name(&self) -> &'static str {
        "dead-var-elim"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        let mut changed = false;
        traverse(
            program,
            &mut ForEachFunctionBody(|block: &mut Vec<Node>| {
                let mut i = 0;
                while i < block.len() {
                    if !is_var_decl(&block[i]) {
                        i += 1;
                        continue;
                    }
                    let mut j = 0;
                    while j < declarators(&block[i]).len() {
                        let name = match declarator_name(&declarators(&block[i])[j]) {
                            Some(name) => name.to_string(),
                            None => {
                                j += 1;
                                continue;
                            }
                        };
                        // Sibling declarators stay visible to each other: an
                        // initializer referencing a co-declarator counts as a
                        // use of that name.
                        let referenced = has_reference(&name, except(block, i))
                            || has_reference(&name, except(declarators(&block[i]), j));
                        if referenced {
                            j += 1;
                            continue;
                        }
                        match remove_declarator(&mut block[i], j) {
                            Some(removed) => {
                                diags.fixed(
                                    removed.loc,
                                    format!("Unreferenced variable {name}, removed"),
                                );
                                changed = true;
                            }
                            None => j += 1,
                        }
                    }
                    if declarators(&block[i]).is_empty() {
                        block.remove(i);
                        changed = true;
                    } else {
                        i += 1;
                    }
                }
            }),
        );
        changed
    }
}

fn is_var_decl(stmt: &Node) -> bool {
    matches!(
        &stmt.kind,
        NodeKind::VariableDeclaration {
            kind: DeclKind::Var,
            ..
        }
    )
}

fn declarators(stmt: &Node) -> &[Node] {
    match &stmt.kind {
        NodeKind::VariableDeclaration { declarations, .. } => declarations,
        _ => &[],
    }
}

fn declarator_name(declarator: &Node) -> Option<&str> {
    let NodeKind::VariableDeclarator { id, .. } = &declarator.kind else {
        return None;
    };
    match &id.kind {
        NodeKind::Identifier { name } => Some(name),
        _ => None,
    }
}

fn remove_declarator(stmt: &mut Node, index: usize) -> Option<Node> {
    match &mut stmt.kind {
        NodeKind::VariableDeclaration { declarations, .. } if index < declarations.len() => {
            Some(declarations.remove(index))
        }
        _ => None,
    }
}
