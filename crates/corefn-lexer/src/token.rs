//! Token kinds produced by the lexer.

use corefn_common::{InternId, Span};

/// A lexical token, tagged by kind and carrying the span it was scanned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// True for the sentinel that terminates the token stream.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Integer(u64),
    Identifier(InternId),

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Plus,
    Star,
    Equals,
    Backslash,
    Colon,
    Semicolon,
    Dot,
    Minus,
    Arrow,

    // Keywords
    Let,
    In,
    Defn,
    Decl,
    Type,

    /// Done sentinel: no more tokens remain.
    Eof,
}

impl TokenKind {
    /// Look up the keyword a lexeme spells, if any.
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        Some(match lexeme {
            "let" => TokenKind::Let,
            "in" => TokenKind::In,
            "defn" => TokenKind::Defn,
            "decl" => TokenKind::Decl,
            "type" => TokenKind::Type,
            _ => return None,
        })
    }

    /// A short human name used in `UnexpectedToken` messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Integer(n) => format!("integer `{n}`"),
            TokenKind::Identifier(_) => "identifier".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::LBrace => "`{`".to_string(),
            TokenKind::RBrace => "`}`".to_string(),
            TokenKind::Plus => "`+`".to_string(),
            TokenKind::Star => "`*`".to_string(),
            TokenKind::Equals => "`=`".to_string(),
            TokenKind::Backslash => "`\\`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::Semicolon => "`;`".to_string(),
            TokenKind::Dot => "`.`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
            TokenKind::Arrow => "`->`".to_string(),
            TokenKind::Let => "`let`".to_string(),
            TokenKind::In => "`in`".to_string(),
            TokenKind::Defn => "`defn`".to_string(),
            TokenKind::Decl => "`decl`".to_string(),
            TokenKind::Type => "`type`".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }

    /// Whether this token can start a primary expression or type.
    pub fn starts_primary(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer(_)
                | TokenKind::Identifier(_)
                | TokenKind::LParen
                | TokenKind::LBrace
        )
    }
}
