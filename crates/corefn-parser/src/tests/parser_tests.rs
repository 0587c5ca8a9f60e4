use corefn_common::Interner;

use super::*;
use crate::ast::{BinaryOp, Bound, Decl, ExprKind, Program, TypeExprKind};

/// Render an expression as a fully-parenthesized S-expression so tests can
/// assert on shape without hand-walking the arena every time.
fn render(program: &Program, id: ExprId, interner: &Interner) -> String {
    match &program.exprs.get(id).kind {
        ExprKind::Integer(n) => n.to_string(),
        ExprKind::Identifier { name, .. } => interner.resolve(*name).to_string(),
        ExprKind::Binary { lhs, op, rhs } => {
            let op = match op {
                BinaryOp::Add => "+",
                BinaryOp::Mul => "*",
            };
            format!(
                "({} {op} {})",
                render(program, *lhs, interner),
                render(program, *rhs, interner)
            )
        }
        ExprKind::Let { var, value, body } => format!(
            "(let {} = {} in {})",
            interner.resolve(*var),
            render(program, *value, interner),
            render(program, *body, interner)
        ),
        ExprKind::Lambda { param, body } => format!(
            "(\\{} {})",
            interner.resolve(*param),
            render(program, *body, interner)
        ),
        ExprKind::Application { function, argument } => format!(
            "({} {})",
            render(program, *function, interner),
            render(program, *argument, interner)
        ),
        ExprKind::Product { fields } => {
            let parts: Vec<String> = fields
                .iter()
                .map(|(name, value)| {
                    format!(
                        "{}={}",
                        interner.resolve(*name),
                        render(program, *value, interner)
                    )
                })
                .collect();
            format!("{{{}}}", parts.join(";"))
        }
        ExprKind::Projection { record, field } => format!(
            "{}.{}",
            render(program, *record, interner),
            interner.resolve(*field)
        ),
    }
}

fn render_type(program: &Program, id: TypeExprId, interner: &Interner) -> String {
    match &program.type_exprs.get(id).kind {
        TypeExprKind::Identifier { name, .. } => interner.resolve(*name).to_string(),
        TypeExprKind::Arrow { from, to } => format!(
            "({}->{})",
            render_type(program, *from, interner),
            render_type(program, *to, interner)
        ),
        TypeExprKind::Product { fields } => {
            let parts: Vec<String> = fields
                .iter()
                .map(|(name, ty)| {
                    format!(
                        "{}:{}",
                        interner.resolve(*name),
                        render_type(program, *ty, interner)
                    )
                })
                .collect();
            format!("{{{}}}", parts.join(";"))
        }
    }
}

fn parse_expr_str(source: &str) -> (Program, ExprId, Interner) {
    let mut interner = Interner::new();
    let (program, id) = parse_expression(source, &mut interner).expect("parse error");
    (program, id, interner)
}

#[test]
fn addition_and_multiplication_respect_precedence() {
    let (program, id, interner) = parse_expr_str("1 + 2 * 3");
    assert_eq!(render(&program, id, &interner), "(1 + (2 * 3))");
}

#[test]
fn same_precedence_operators_are_left_associative() {
    let (program, id, interner) = parse_expr_str("1 + 2 + 3");
    assert_eq!(render(&program, id, &interner), "((1 + 2) + 3)");

    let (program, id, interner) = parse_expr_str("1 * 2 * 3");
    assert_eq!(render(&program, id, &interner), "((1 * 2) * 3)");
}

#[test]
fn parens_override_precedence() {
    let (program, id, interner) = parse_expr_str("(1 + 2) * 3");
    assert_eq!(render(&program, id, &interner), "((1 + 2) * 3)");
}

#[test]
fn application_binds_tighter_than_binary_operators() {
    let (program, id, interner) = parse_expr_str("f x + g y");
    assert_eq!(render(&program, id, &interner), "((f x) + (g y))");
}

#[test]
fn application_is_left_associative() {
    let (program, id, interner) = parse_expr_str("f x y");
    assert_eq!(render(&program, id, &interner), "((f x) y)");
}

#[test]
fn projection_binds_tighter_than_application() {
    let (program, id, interner) = parse_expr_str("f r.a");
    assert_eq!(render(&program, id, &interner), "(f r.a)");
}

#[test]
fn projection_is_left_associative() {
    let (program, id, interner) = parse_expr_str("r.a.b");
    assert_eq!(render(&program, id, &interner), "r.a.b");
}

#[test]
fn let_binding_parses_value_and_body() {
    let (program, id, interner) = parse_expr_str("let x = 1 in x + 1");
    assert_eq!(render(&program, id, &interner), "(let x = 1 in (x + 1))");
}

#[test]
fn lambda_body_extends_as_far_right_as_possible() {
    let (program, id, interner) = parse_expr_str("\\x x + 1");
    assert_eq!(render(&program, id, &interner), "(\\x (x + 1))");
}

#[test]
fn empty_product_literal() {
    let (program, id, interner) = parse_expr_str("{}");
    assert_eq!(render(&program, id, &interner), "{}");
}

#[test]
fn product_literal_with_fields() {
    let (program, id, interner) = parse_expr_str("{x = 1; y = 2}");
    assert_eq!(render(&program, id, &interner), "{x=1;y=2}");
}

#[test]
fn product_literal_rejects_trailing_semicolon() {
    let mut interner = Interner::new();
    let err = parse_expression("{x = 1;}", &mut interner).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn product_literal_allows_duplicate_field_names_at_parse_time() {
    // Rejecting duplicates is the resolver/checker's job, not the parser's.
    let (program, id, interner) = parse_expr_str("{x = 1; x = 2}");
    assert_eq!(render(&program, id, &interner), "{x=1;x=2}");
}

// `parse_expression` only parses value expressions; exercise type-expression
// grammar via a `decl` declaration instead.
#[test]
fn decl_type_arrow_is_right_associative() {
    let mut interner = Interner::new();
    let program = parse_program("decl f : a -> b -> c", &mut interner).expect("parse error");
    let Decl::Decl { type_expr, .. } = &program.decls[0] else {
        panic!("expected a decl");
    };
    assert_eq!(render_type(&program, *type_expr, &interner), "(a->(b->c))");
}

#[test]
fn decl_product_type_uses_colon() {
    let mut interner = Interner::new();
    let program = parse_program("decl f : {x: a; y: b}", &mut interner).expect("parse error");
    let Decl::Decl { type_expr, .. } = &program.decls[0] else {
        panic!("expected a decl");
    };
    assert_eq!(render_type(&program, *type_expr, &interner), "{x:a;y:b}");
}

#[test]
fn defn_decl_and_type_declarations_parse() {
    let mut interner = Interner::new();
    let program = parse_program(
        "decl one : a\ndefn one = 1\ntype a = {x: a}",
        &mut interner,
    )
    .expect("parse error");
    assert_eq!(program.decls.len(), 3);
    assert!(matches!(program.decls[0], Decl::Decl { .. }));
    assert!(matches!(program.decls[1], Decl::Bind { .. }));
    assert!(matches!(program.decls[2], Decl::TypeAlias { .. }));
}

#[test]
fn bind_without_value_is_unexpected_eof() {
    let mut interner = Interner::new();
    let err = parse_program("defn x =", &mut interner).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn unknown_top_level_token_is_unexpected_token() {
    let mut interner = Interner::new();
    let err = parse_program("42", &mut interner).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn lexer_errors_surface_through_the_parser() {
    let mut interner = Interner::new();
    let err = parse_program("defn x = 1 # 2", &mut interner).unwrap_err();
    assert!(matches!(err, ParseError::LexError(_)));
}

#[test]
fn bound_starts_undetermined() {
    let (program, id, _interner) = parse_expr_str("x");
    let ExprKind::Identifier { bound, .. } = &program.exprs.get(id).kind else {
        panic!("expected identifier");
    };
    assert_eq!(*bound, Bound::Undetermined);
}
