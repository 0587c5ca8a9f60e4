use corefn_common::Interner;

use super::*;

fn tokens(source: &str) -> (Vec<Token>, Interner) {
    let mut interner = Interner::new();
    let mut out = Vec::new();
    {
        let mut lexer = Lexer::new(source, &mut interner);
        loop {
            let tok = lexer.next_token().expect("lex error");
            let done = tok.is_eof();
            out.push(tok);
            if done {
                break;
            }
        }
    }
    (out, interner)
}

#[test]
fn empty_input_yields_only_eof() {
    let (toks, _) = tokens("");
    assert_eq!(toks.len(), 1);
    assert!(toks[0].is_eof());
}

#[test]
fn integer_literal() {
    let (toks, _) = tokens("42");
    assert_eq!(toks[0].kind, TokenKind::Integer(42));
    assert_eq!(toks[0].span, Span::new(1, 1, 3));
}

#[test]
fn identifier_is_interned() {
    let (toks, interner) = tokens("foo bar foo");
    let TokenKind::Identifier(a) = toks[0].kind else {
        panic!("expected identifier")
    };
    let TokenKind::Identifier(b) = toks[1].kind else {
        panic!("expected identifier")
    };
    let TokenKind::Identifier(c) = toks[2].kind else {
        panic!("expected identifier")
    };
    assert_ne!(a, b);
    assert_eq!(a, c);
    assert_eq!(interner.resolve(a), "foo");
}

#[test]
fn keywords_are_not_identifiers() {
    let (toks, _) = tokens("let in defn decl type");
    assert_eq!(toks[0].kind, TokenKind::Let);
    assert_eq!(toks[1].kind, TokenKind::In);
    assert_eq!(toks[2].kind, TokenKind::Defn);
    assert_eq!(toks[3].kind, TokenKind::Decl);
    assert_eq!(toks[4].kind, TokenKind::Type);
}

#[test]
fn keyword_prefix_is_still_an_identifier() {
    let (toks, interner) = tokens("letter");
    let TokenKind::Identifier(id) = toks[0].kind else {
        panic!("expected identifier")
    };
    assert_eq!(interner.resolve(id), "letter");
}

#[test]
fn punctuation_tokens() {
    let (toks, _) = tokens("(){}+*=\\:;.");
    let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::Equals,
            TokenKind::Backslash,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn minus_vs_arrow() {
    let (toks, _) = tokens("- ->");
    assert_eq!(toks[0].kind, TokenKind::Minus);
    assert_eq!(toks[1].kind, TokenKind::Arrow);
}

#[test]
fn newline_advances_line_and_resets_column() {
    let (toks, _) = tokens("a\nb");
    assert_eq!(toks[0].span.line, 1);
    assert_eq!(toks[1].span.line, 2);
    assert_eq!(toks[1].span.start_column, 1);
}

#[test]
fn unknown_token_start_is_reported_with_precise_span() {
    let mut interner = Interner::new();
    let mut lexer = Lexer::new("a # b", &mut interner);
    let _ = lexer.next_token().unwrap(); // a
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.ch, '#');
    assert_eq!(err.span, Span::new(1, 3, 4));
}

#[test]
fn tokens_are_produced_in_source_order() {
    let (toks, _) = tokens("1 + 2 * 3");
    let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer(1),
            TokenKind::Plus,
            TokenKind::Integer(2),
            TokenKind::Star,
            TokenKind::Integer(3),
            TokenKind::Eof,
        ]
    );
}
