use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "line {} col {}", self.line, self.column)
    }
}

/// Source extent of a node, in the external parser's line/column convention.
/// Spans are carried for reporting only; no pass reads them for decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Renders an optional span the way diagnostic lines expect it.
pub fn location(span: Option<Span>) -> String {
    match span {
        Some(span) => span.to_string(),
        None => "<no location info>".to_string(),
    }
}

/// One optimizer event: what was found, where, and whether it was repaired.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub loc: Option<Span>,
    pub message: String,
    pub fixed: bool,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let prefix = if self.fixed { "fixed" } else { "NOT fixed" };
        write!(f, "{}: {}: {}", prefix, location(self.loc), self.message)
    }
}

/// Aggregate outcome of one run, escalating monotonically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FixState {
    #[default]
    NoOptimizations,
    AllFixed,
    SomeNotFixed,
}

impl Display for FixState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let summary = match self {
            FixState::NoOptimizations => "No optimizations performed",
            FixState::AllFixed => "All errors fixed",
            FixState::SomeNotFixed => "Some errors not fixed",
        };
        write!(f, "{summary}")
    }
}

/// Accumulator for diagnostics and the run outcome, owned by the caller of
/// the pipeline. `SomeNotFixed` is sticky: later autofixes do not undo it.
#[derive(Debug, Default)]
pub struct Reporter {
    diags: Vec<Diagnostic>,
    state: FixState,
    fixes: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed(&mut self, loc: Option<Span>, message: String) {
        self.diags.push(Diagnostic {
            loc,
            message,
            fixed: true,
        });
        self.fixes += 1;
        if self.state == FixState::NoOptimizations {
            self.state = FixState::AllFixed;
        }
    }

    pub fn not_fixed(&mut self, loc: Option<Span>, message: String) {
        self.diags.push(Diagnostic {
            loc,
            message,
            fixed: false,
        });
        self.state = FixState::SomeNotFixed;
    }

    pub fn state(&self) -> FixState {
        self.state
    }

    /// Total autofix count across the whole run, all rounds and files.
    pub fn fix_count(&self) -> usize {
        self.fixes
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diags
    }

    /// Drains collected diagnostics; the aggregate state and counters stay.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diags)
    }
}

#[cfg(test)]
#[path = "tests/t_diag.rs"]
mod tests;
