//! Rendering a [`Diagnostic`] against the source text that produced it.
//!
//! Format: one header line `FILE:LINE:COL: error: MESSAGE (at PHASE)`,
//! followed by the offending source line, followed by a caret underline
//! spanning the diagnostic's column range.

use colored::Colorize;
use corefn_common::Diagnostic;

pub struct Reporter {
    colored: bool,
}

impl Reporter {
    pub fn new(colored: bool) -> Self {
        Reporter { colored }
    }

    /// Render `diagnostic` against `source`, the full text it was raised
    /// against. `file` is the name shown in the header; callers pass
    /// `"<stdin>"` for REPL input.
    pub fn render(&self, file: &str, source: &str, diagnostic: &Diagnostic) -> String {
        let span = diagnostic.span;
        let tag = if self.colored {
            "error:".red().bold().to_string()
        } else {
            "error:".to_string()
        };
        let header = format!(
            "{}:{}:{}: {} {} (at {})",
            file, span.line, span.start_column, tag, diagnostic.message, diagnostic.phase
        );

        let line_text = source
            .lines()
            .nth(span.line.saturating_sub(1) as usize)
            .unwrap_or("");
        let pad = " ".repeat(span.start_column.saturating_sub(1) as usize);
        let carets = "^".repeat(span.len().max(1) as usize);
        let underline = format!("{pad}{carets}");

        format!("{header}\n{line_text}\n{underline}")
    }
}

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod tests;
