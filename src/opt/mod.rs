pub mod dead_func_elim;
pub mod dead_var_elim;
pub mod debugger_elim;
pub mod empty_stmt_elim;
pub mod shadow_check;
pub mod useless_return_elim;
pub mod useless_stmt_elim;
pub mod void_simplify;

use crate::ast::Node;
use crate::diag::Reporter;
use crate::traverse::{Flow, Visitor};

use dead_func_elim::DeadFuncElim;
use dead_var_elim::DeadVarElim;
use debugger_elim::DebuggerElim;
use empty_stmt_elim::EmptyStmtElim;
use shadow_check::ShadowCheck;
use useless_return_elim::UselessReturnElim;
use useless_stmt_elim::UselessStmtElim;
use void_simplify::VoidSimplify;

/// Run the full pass list over `program` until a fixpoint.
pub fn optimize(program: &mut Node, diags: &mut Reporter) {
    let mut manager = PassManager::new();
    manager.run(program, diags);
}

pub trait Pass {
    #[allow(dead_code)]
    fn name(&self) -> &'static str;

    /// One full traversal of the tree. Returns whether the tree was mutated;
    /// report-only passes always return false.
    fn run(&mut self, program: &mut Node, diags: &mut Reporter) -> bool;
}

pub struct PassManager {
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    pub fn new() -> Self {
        Self {
            passes: vec![
                Box::new(EmptyStmtElim),
                Box::new(DebuggerElim),
                // Useless-statement removal runs before void simplification,
                // so a freshly substituted `undefined;` is only collected in
                // the following round.
                Box::new(UselessStmtElim),
                Box::new(VoidSimplify),
                Box::new(UselessReturnElim),
                Box::new(DeadFuncElim),
                Box::new(DeadVarElim),
                Box::new(ShadowCheck),
            ],
        }
    }

    /// Fixes interact (removing a statement can make a variable or function
    /// dead), so the whole ordered list repeats until a round changes
    /// nothing. The round bound guarantees termination; hitting it is a stop
    /// condition, not an error.
    pub fn run(&mut self, program: &mut Node, diags: &mut Reporter) {
        const MAX_ROUNDS: usize = 10;

        for _ in 0..MAX_ROUNDS {
            let mut changed = false;
            for pass in &mut self.passes {
                changed |= pass.run(program, diags);
            }
            if !changed {
                break;
            }
        }
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands every statement block (program body, compound statement body,
/// switch-case consequent) to `f`.
struct ForEachBlock<F>(F);

impl<F: FnMut(&mut Vec<Node>)> Visitor for ForEachBlock<F> {
    fn visit(&mut self, node: &mut Node) -> Flow {
        if let Some(block) = node.block_mut() {
            (self.0)(block);
        }
        Flow::Continue
    }
}

/// Hands every function body's statement block to `f`.
struct ForEachFunctionBody<F>(F);

impl<F: FnMut(&mut Vec<Node>)> Visitor for ForEachFunctionBody<F> {
    fn visit(&mut self, node: &mut Node) -> Flow {
        if let Some(body) = node.function_body_mut() {
            (self.0)(body);
        }
        Flow::Continue
    }
}

/// Compacting removal over one statement sequence. The index is re-tested
/// after each removal so the element shifted into it is not skipped, and the
/// survivors keep their relative order.
fn remove_where(
    block: &mut Vec<Node>,
    mut pred: impl FnMut(&Node) -> bool,
    mut on_removed: impl FnMut(Node),
) {
    let mut i = 0;
    while i < block.len() {
        if pred(&block[i]) {
            on_removed(block.remove(i));
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/t_opt.rs"]
mod tests;
