//! Parser for the corefn front end: token stream to declaration list.

pub mod ast;
pub mod parser;

pub use ast::{
    BinaryOp, Bound, Decl, Expr, ExprArena, ExprId, ExprKind, Program, TypeExpr, TypeExprArena,
    TypeExprId, TypeExprKind,
};
pub use parser::{parse_expression, parse_program, ParseError, Parser};
