use super::Pass;
use crate::ast::{Node, NodeKind};
use crate::diag::{location, Reporter};
use crate::scan::{except, scan};
use crate::traverse::{traverse, Flow, Visitor};

/// Report-only: finds declarations nested under a block's sibling statements
/// (variable declarators, function names, function parameters) that reuse a
/// name bound by a variable declaration of that block. Every occurrence is
/// reported, at the inner site, citing the outer declarator; the tree is
/// never mutated.
pub struct ShadowCheck;

struct FindShadows<'a> {
    diags: &'a mut Reporter,
}

impl Visitor for FindShadows<'_> {
    fn visit(&mut self, node: &mut Node) -> Flow {
        let Some(block) = node.block() else {
            return Flow::Continue;
        };
        let diags = &mut *self.diags;
        for i in 0..block.len() {
            let NodeKind::VariableDeclaration {
                declarations: outer,
                ..
            } = &block[i].kind
            else {
                continue;
            };
            for sibling in except(block, i) {
                scan(sibling, &mut |child| {
                    match &child.kind {
                        NodeKind::VariableDeclaration { declarations, .. } => {
                            for declarator in declarations {
                                if let NodeKind::VariableDeclarator { id, .. } = &declarator.kind {
                                    report_shadowing(diags, id, outer);
                                }
                            }
                        }
                        NodeKind::FunctionDeclaration { id, params, .. }
                        | NodeKind::FunctionExpression { id, params, .. } => {
                            for param in params {
                                report_shadowing(diags, param, outer);
                            }
                            if let Some(id) = id {
                                report_shadowing(diags, id, outer);
                            }
                        }
                        NodeKind::ArrowFunctionExpression { params, .. } => {
                            for param in params {
                                report_shadowing(diags, param, outer);
                            }
                        }
                        _ => {}
                    }
                    Flow::Continue
                });
            }
        }
        Flow::Continue
    }
}

fn report_shadowing(diags: &mut Reporter, inner: &Node, outer: &[Node]) {
    let NodeKind::Identifier { name } = &inner.kind else {
        return;
    };
    for outer_declarator in outer {
        let NodeKind::VariableDeclarator { id, .. } = &outer_declarator.kind else {
            continue;
        };
        if matches!(&id.kind, NodeKind::Identifier { name: outer_name } if outer_name == name) {
            diags.not_fixed(
                inner.loc,
                format!(
                    "Declaration of {name} is shadowing declaration at {}",
                    location(outer_declarator.loc)
                ),
            );
        }
    }
}

impl Pass for ShadowCheck {
    fn name(&self) -> &'static str {
        "shadow-check"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        traverse(program, &mut FindShadows { diags });
        false
    }
}
