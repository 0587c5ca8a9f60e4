//! A single-pass Pratt parser: tokens to a declaration list.
//!
//! The parser consumes tokens via one-token lookahead and is, like the
//! lexer it drives, not restartable. Precedence and associativity for the
//! three operator families (binary `+`/`*`, juxtaposition application,
//! `.` projection) are reconciled by nesting recursive-descent levels in
//! increasing-precedence order, with a small Pratt loop at the binary
//! level.

use corefn_common::{InternId, Interner, Span};
use corefn_lexer::{LexError, Lexer, Token, TokenKind};
use smallvec::SmallVec;

use crate::ast::{BinaryOp, Decl, Expr, ExprId, ExprKind, Program, TypeExprId, TypeExprKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken { found: TokenKind, span: Span },
    UnexpectedEof { span: Span },
    LexError(LexError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken { found, .. } => {
                write!(f, "unexpected token {}", found.describe())
            }
            ParseError::UnexpectedEof { .. } => write!(f, "unexpected end of input"),
            ParseError::LexError(e) => write!(f, "{e}"),
        }
    }
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => *span,
            ParseError::UnexpectedEof { span } => *span,
            ParseError::LexError(e) => e.span,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::LexError(e)
    }
}

/// Binding power of each infix binary operator. Lower binds looser.
fn binary_precedence(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Plus => Some(1),
        TokenKind::Star => Some(2),
        _ => None,
    }
}

fn binary_op(kind: TokenKind) -> BinaryOp {
    match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Star => BinaryOp::Mul,
        _ => unreachable!("binary_op called on a non-operator token"),
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    program: Program,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, interner: &'a mut Interner) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source, interner);
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            program: Program::new(),
        })
    }

    fn bump(&mut self) -> Result<Token, ParseError> {
        let prev = self.current;
        self.current = self.lexer.next_token()?;
        Ok(prev)
    }

    fn expect(&mut self, want: TokenKind) -> Result<Span, ParseError> {
        if self.current.kind == want {
            let span = self.current.span;
            self.bump()?;
            Ok(span)
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParseError {
        if self.current.kind == TokenKind::Eof {
            ParseError::UnexpectedEof {
                span: self.current.span,
            }
        } else {
            ParseError::UnexpectedToken {
                found: self.current.kind,
                span: self.current.span,
            }
        }
    }

    fn expect_identifier(&mut self) -> Result<(InternId, Span), ParseError> {
        match self.current.kind {
            TokenKind::Identifier(name) => {
                let span = self.current.span;
                self.bump()?;
                Ok((name, span))
            }
            _ => Err(self.unexpected()),
        }
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    /// Consume tokens until the done sentinel, returning the declaration
    /// list.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        loop {
            if self.current.kind == TokenKind::Eof {
                break;
            }
            let decl = self.parse_decl()?;
            self.program.decls.push(decl);
        }
        Ok(self.program)
    }

    fn parse_decl(&mut self) -> Result<Decl, ParseError> {
        match self.current.kind {
            TokenKind::Defn => {
                self.bump()?;
                let (name, name_span) = self.expect_identifier()?;
                self.expect(TokenKind::Equals)?;
                let value = self.parse_expr()?;
                Ok(Decl::Bind {
                    name,
                    value,
                    name_span,
                })
            }
            TokenKind::Decl => {
                self.bump()?;
                let (name, name_span) = self.expect_identifier()?;
                self.expect(TokenKind::Colon)?;
                let type_expr = self.parse_type_expr()?;
                Ok(Decl::Decl {
                    name,
                    type_expr,
                    name_span,
                })
            }
            TokenKind::Type => {
                self.bump()?;
                let (name, name_span) = self.expect_identifier()?;
                self.expect(TokenKind::Equals)?;
                let type_expr = self.parse_type_expr()?;
                Ok(Decl::TypeAlias {
                    name,
                    type_expr,
                    name_span,
                })
            }
            _ => Err(self.unexpected()),
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    /// Entry point used by interactive callers that want a single
    /// expression rather than a whole program.
    pub fn parse_expression(mut self) -> Result<(Program, ExprId), ParseError> {
        let id = self.parse_expr()?;
        Ok((self.program, id))
    }

    fn node(&self, id: ExprId) -> &Expr {
        self.program.exprs.get(id)
    }

    fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        match self.current.kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::Backslash => self.parse_lambda(),
            _ => self.parse_binary(0),
        }
    }

    fn parse_let(&mut self) -> Result<ExprId, ParseError> {
        let let_tok = self.bump()?; // `let`
        let (var, _) = self.expect_identifier()?;
        self.expect(TokenKind::Equals)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::In)?;
        let body = self.parse_expr()?;
        let span = let_tok.span.merge(self.node(body).span);
        Ok(self.program.exprs.alloc(
            ExprKind::Let {
                var,
                value,
                body,
            },
            span,
        ))
    }

    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let backslash_tok = self.bump()?; // `\`
        let (param, _) = self.expect_identifier()?;
        let body = self.parse_expr()?;
        let span = backslash_tok.span.merge(self.node(body).span);
        Ok(self
            .program
            .exprs
            .alloc(ExprKind::Lambda { param, body }, span))
    }

    /// A Pratt loop over left-associative `+` (prec 1) and `*` (prec 2).
    fn parse_binary(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        let mut lhs = self.parse_application()?;
        loop {
            let Some(prec) = binary_precedence(self.current.kind) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            let op_tok = self.bump()?;
            let op = binary_op(op_tok.kind);
            // Left-associative: the recursive call only accepts operators
            // that bind strictly tighter than this one.
            let rhs = self.parse_binary(prec + 1)?;
            let span = self.node(lhs).span.merge(self.node(rhs).span);
            lhs = self
                .program
                .exprs
                .alloc(ExprKind::Binary { lhs, op, rhs }, span);
        }
        Ok(lhs)
    }

    /// Juxtaposition application, left-associative, binding tighter than
    /// any binary operator.
    fn parse_application(&mut self) -> Result<ExprId, ParseError> {
        let mut function = self.parse_projection()?;
        while self.current.kind.starts_primary() {
            let argument = self.parse_projection()?;
            let span = self.node(function).span.merge(self.node(argument).span);
            function = self.program.exprs.alloc(
                ExprKind::Application {
                    function,
                    argument,
                },
                span,
            );
        }
        Ok(function)
    }

    /// Field projection `e.f`, left-associative, binding tighter than
    /// application.
    fn parse_projection(&mut self) -> Result<ExprId, ParseError> {
        let mut record = self.parse_primary()?;
        while self.current.kind == TokenKind::Dot {
            self.bump()?;
            let (field, field_span) = self.expect_identifier()?;
            let span = self.node(record).span.merge(field_span);
            record = self
                .program
                .exprs
                .alloc(ExprKind::Projection { record, field }, span);
        }
        Ok(record)
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        match self.current.kind {
            TokenKind::Integer(n) => {
                let tok = self.bump()?;
                Ok(self.program.exprs.alloc(ExprKind::Integer(n), tok.span))
            }
            TokenKind::Identifier(name) => {
                let tok = self.bump()?;
                Ok(self.program.exprs.alloc(
                    ExprKind::Identifier {
                        name,
                        bound: crate::ast::Bound::Undetermined,
                    },
                    tok.span,
                ))
            }
            TokenKind::LParen => {
                self.bump()?;
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::LBrace => self.parse_product_literal(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_product_literal(&mut self) -> Result<ExprId, ParseError> {
        let open = self.expect(TokenKind::LBrace)?;
        let mut fields: SmallVec<[(InternId, ExprId); 4]> = SmallVec::new();
        if self.current.kind != TokenKind::RBrace {
            loop {
                let (name, _) = self.expect_identifier()?;
                self.expect(TokenKind::Equals)?;
                let value = self.parse_expr()?;
                fields.push((name, value));
                if self.current.kind == TokenKind::Semicolon {
                    self.bump()?;
                    continue;
                }
                break;
            }
        }
        let close = self.expect(TokenKind::RBrace)?;
        let span = open.merge(close);
        Ok(self.program.exprs.alloc(ExprKind::Product { fields }, span))
    }

    // ------------------------------------------------------------------
    // Type expressions
    // ------------------------------------------------------------------

    fn type_node(&self, id: TypeExprId) -> &crate::ast::TypeExpr {
        self.program.type_exprs.get(id)
    }

    fn parse_type_expr(&mut self) -> Result<TypeExprId, ParseError> {
        let from = self.parse_type_primary()?;
        if self.current.kind == TokenKind::Arrow {
            self.bump()?;
            // Right-associative: recurse into the full arrow grammar, not
            // just another primary.
            let to = self.parse_type_expr()?;
            let span = self.type_node(from).span.merge(self.type_node(to).span);
            Ok(self
                .program
                .type_exprs
                .alloc(TypeExprKind::Arrow { from, to }, span))
        } else {
            Ok(from)
        }
    }

    fn parse_type_primary(&mut self) -> Result<TypeExprId, ParseError> {
        match self.current.kind {
            TokenKind::Identifier(name) => {
                let tok = self.bump()?;
                Ok(self.program.type_exprs.alloc(
                    TypeExprKind::Identifier {
                        name,
                        bound: crate::ast::Bound::Undetermined,
                    },
                    tok.span,
                ))
            }
            TokenKind::LParen => {
                self.bump()?;
                let inner = self.parse_type_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::LBrace => self.parse_product_type(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_product_type(&mut self) -> Result<TypeExprId, ParseError> {
        let open = self.expect(TokenKind::LBrace)?;
        let mut fields: SmallVec<[(InternId, TypeExprId); 4]> = SmallVec::new();
        if self.current.kind != TokenKind::RBrace {
            loop {
                let (name, _) = self.expect_identifier()?;
                self.expect(TokenKind::Colon)?;
                let ty = self.parse_type_expr()?;
                fields.push((name, ty));
                if self.current.kind == TokenKind::Semicolon {
                    self.bump()?;
                    continue;
                }
                break;
            }
        }
        let close = self.expect(TokenKind::RBrace)?;
        let span = open.merge(close);
        Ok(self
            .program
            .type_exprs
            .alloc(TypeExprKind::Product { fields }, span))
    }
}

/// Parse a full program from source text.
pub fn parse_program(source: &str, interner: &mut Interner) -> Result<Program, ParseError> {
    let parser = Parser::new(source, interner)?;
    parser.parse_program()
}

/// Parse a single expression from source text (interactive use).
pub fn parse_expression(
    source: &str,
    interner: &mut Interner,
) -> Result<(Program, ExprId), ParseError> {
    let parser = Parser::new(source, interner)?;
    parser.parse_expression()
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
