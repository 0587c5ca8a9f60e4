//! Diagnostics - the shared shape every phase's error funnels into.
//!
//! Each phase (lexer, parser, resolver, checker) defines its own closed
//! error taxonomy (see the phase crates), but every one of those errors
//! is turned into a [`Diagnostic`] before it reaches the driver. This
//! keeps rendering (file:line:col, source snippet, caret) in one place.

use crate::span::Span;
use std::fmt;

/// Which phase of the pipeline raised a diagnostic.
///
/// Mirrors the taxonomy in the pipeline overview: lexing, parsing, name
/// resolution, and type checking are the only phases that can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Tokenizing,
    Parsing,
    NameResolution,
    TypeChecking,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Tokenizing => "tokenizing",
            Phase::Parsing => "parsing",
            Phase::NameResolution => "name resolution",
            Phase::TypeChecking => "type checking",
        };
        f.write_str(s)
    }
}

/// A single fatal diagnostic, fully located within the source file.
///
/// The pipeline is fail-fast: the first diagnostic produced by any phase
/// aborts the compilation, so a compilation ever carries at most one of
/// these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub phase: Phase,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn new(phase: Phase, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            phase,
            span,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: error: {} (at {})",
            self.span.line, self.span.start_column, self.message, self.phase
        )
    }
}
