use super::Pass;
use crate::ast::{Node, NodeKind, UnaryOp};
use crate::diag::Reporter;
use crate::traverse::{traverse, Visitor};

/// Rewrites `void <pure expr>` to a plain `undefined` reference; the operand
/// has no effect, so the whole expression is just `undefined`.
pub struct VoidSimplify;

struct ReplaceVoid<'a> {
    diags: &'a mut Reporter,
    changed: bool,
}

impl Visitor for ReplaceVoid<'_> {
    fn replace(&mut self, node: &Node) -> Option<Node> {
        let NodeKind::UnaryExpression {
            operator: UnaryOp::Void,
            argument,
            ..
        } = &node.kind
        else {
            return None;
        };
        let text = argument.kind.pure_expr_text()?;
        self.diags
            .fixed(node.loc, format!("Replaced \"void {text}\" with undefined"));
        self.changed = true;
        // A fresh identifier per site; the engine installs it without
        // descending into it.
        Some(Node::new(NodeKind::Identifier {
            name: "undefined".to_string(),
        }))
    }
}

impl Pass for VoidSimplify {
    fn name(&self) -> &'static str {
        "void-simplify"
    }

    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool {
        let mut visitor = ReplaceVoid {
            diags,
            changed: false,
        };
        traverse(program, &mut visitor);
        visitor.changed
    }
}
