//! Pipeline driver: source text in, first [`Diagnostic`] (if any) out.
//!
//! Fail-fast across phases, matching the pipeline's own discipline: lexing
//! happens implicitly inside parsing (a [`LexError`] surfaces as
//! `ParseError::LexError`), then name resolution, then type checking. The
//! first phase to fail short-circuits the rest.

use std::path::Path;

use corefn_checker::check_program;
use corefn_common::{Diagnostic, Interner, Phase};
use corefn_parser::{parse_program, ParseError};
use corefn_resolver::resolve_program;

/// Compile one program and report success or its first diagnostic.
///
/// The `Interner` is intentionally not returned: every error's message is
/// rendered to a final `String` here, while the interner is still alive.
pub fn compile(source: &str) -> Result<(), Diagnostic> {
    let mut interner = Interner::new();

    let mut program = parse_program(source, &mut interner).map_err(parse_diagnostic)?;

    resolve_program(&mut program, &interner)
        .map_err(|e| Diagnostic::new(Phase::NameResolution, e.span(), e.message(&interner)))?;

    check_program(&program, &interner)
        .map_err(|e| Diagnostic::new(Phase::TypeChecking, e.span(), e.message(&interner)))?;

    Ok(())
}

/// Read `path` and compile its contents, pairing the result with the
/// source text so a caller can render a diagnostic against it.
///
/// Split out of `main` so the file-reading path is covered by tests that
/// don't need a subprocess — the teacher's own CLI crate tests its build
/// orchestration the same way, against real files under a `TempDir`
/// rather than by spawning the binary.
pub fn compile_file(path: &Path) -> std::io::Result<(String, Result<(), Diagnostic>)> {
    let source = std::fs::read_to_string(path)?;
    let result = compile(&source);
    Ok((source, result))
}

fn parse_diagnostic(err: ParseError) -> Diagnostic {
    let phase = match &err {
        ParseError::LexError(_) => Phase::Tokenizing,
        ParseError::UnexpectedToken { .. } | ParseError::UnexpectedEof { .. } => Phase::Parsing,
    };
    Diagnostic::new(phase, err.span(), err.to_string())
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
