use serde_json::Value;

use super::{remove_where, ForEachBlock, Pass};
use crate::ast::{Node, NodeKind};
use crate::diag::Reporter;
use crate::traverse::traverse;

/// Removes expression statements whose expression is pure: evaluating and
/// discarding them has no observable effect. The `"use strict"` directive is
/// a pure string literal with prologue semantics and is exempt.
pub struct UselessStmtElim;

impl Pass for UselessStmtElim {
    fn name(&self) -> &'static str {
        "useless-stmt-elim"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        let mut changed = false;
        traverse(
            program,
            &mut ForEachBlock(|block: &mut Vec<Node>| {
                remove_where(
                    block,
                    |stmt| useless_text(stmt).is_some(),
                    |removed| {
                        if let Some(text) = useless_text(&removed) {
                            diags.fixed(
                                removed.loc,
                                format!("Useless statement \"{text};\", removed"),
                            );
                            changed = true;
                        }
                    },
                );
            }),
        );
        changed
    }
}

fn useless_text(stmt: &Node) -> Option<String> {
    let NodeKind::ExpressionStatement { expression } = &stmt.kind else {
        return None;
    };
    if is_use_strict(expression) {
        return None;
    }
    expression.kind.pure_expr_text()
}

fn is_use_strict(expr: &Node) -> bool {
    matches!(
        &expr.kind,
        NodeKind::Literal {
            value: Value::String(text),
            ..
        } if text == "use strict"
    )
}
