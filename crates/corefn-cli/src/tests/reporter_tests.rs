use corefn_common::{Diagnostic, Phase, Span};

use super::Reporter;

#[test]
fn plain_mode_matches_the_specified_header_format() {
    let diagnostic = Diagnostic::new(
        Phase::NameResolution,
        Span::new(2, 10, 11),
        "unbound identifier `x`",
    );
    let reporter = Reporter::new(false);
    let output = reporter.render("program.cf", "decl a : isize\ndefn a = x", &diagnostic);

    let mut lines = output.lines();
    assert_eq!(
        lines.next().unwrap(),
        "program.cf:2:10: error: unbound identifier `x` (at name resolution)"
    );
}

#[test]
fn includes_the_offending_source_line() {
    let diagnostic = Diagnostic::new(
        Phase::NameResolution,
        Span::new(2, 10, 11),
        "unbound identifier `x`",
    );
    let reporter = Reporter::new(false);
    let output = reporter.render("program.cf", "decl a : isize\ndefn a = x", &diagnostic);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "defn a = x");
}

#[test]
fn underlines_the_diagnostics_column_span() {
    // "defn a = abc": `abc` occupies columns 10-12 (end_column exclusive).
    let diagnostic = Diagnostic::new(Phase::TypeChecking, Span::new(1, 10, 13), "type mismatch");
    let reporter = Reporter::new(false);
    let output = reporter.render("program.cf", "defn a = abc", &diagnostic);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[2], "         ^^^");
}

#[test]
fn reports_against_the_correct_multiline_source_line() {
    let diagnostic = Diagnostic::new(Phase::TypeChecking, Span::new(3, 1, 2), "type mismatch");
    let reporter = Reporter::new(false);
    let source = "decl a : isize\ndefn a = 1\ndecl b : isize\ndefn b = a";
    let output = reporter.render("program.cf", source, &diagnostic);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "decl b : isize");
}

#[test]
fn three_line_output_header_source_underline() {
    let diagnostic = Diagnostic::new(Phase::Tokenizing, Span::new(1, 1, 2), "unexpected character '#'");
    let reporter = Reporter::new(false);
    let output = reporter.render("<stdin>", "#", &diagnostic);
    assert_eq!(output.lines().count(), 3);
}
