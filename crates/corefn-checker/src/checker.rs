//! Bidirectional type checking over the resolved program.
//!
//! Two mutually recursive judgements, `infer` and `check`, plus a separate
//! `eval` pass that turns the syntactic [`corefn_parser::TypeExpr`] into
//! the semantic [`Type`]. A `locals: Vec<Type>` stack mirrors the
//! resolver's `Vec<InternId>` stack position-for-position, so a
//! `Bound::Local(i)` means the same thing in both phases.

use corefn_common::{InternId, Interner, Span};
use corefn_parser::{Bound, Decl, ExprId, ExprKind, Program, TypeExprId, TypeExprKind};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::Type;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeCheckError {
    Mismatch {
        expected: Type,
        found: Type,
        span: Span,
    },
    ExpectedFunction {
        found: Type,
        span: Span,
    },
    ExpectedProduct {
        found: Type,
        span: Span,
    },
    NoSuchField {
        name: InternId,
        span: Span,
    },
    /// A lambda appeared where only `infer` was available; lambdas are
    /// only checkable against a known `Arrow`.
    CannotInferLambda {
        span: Span,
    },
    /// A `defn` with no matching `decl`. The reference implementation
    /// dereferences a missing key here; this front end reports it.
    MissingSignature {
        name: InternId,
        span: Span,
    },
    /// A type alias that (transitively) refers to itself.
    CyclicTypeAlias {
        name: InternId,
        span: Span,
    },
    /// The same field name appears twice in one product literal or
    /// product type.
    DuplicateField {
        name: InternId,
        span: Span,
    },
    /// A type-position identifier resolved to a local binding. Type-level
    /// binders don't exist in this language's grammar, so the resolver
    /// never actually produces this; kept as a reported diagnostic rather
    /// than an assertion, per the fail-with-a-diagnostic discipline the
    /// rest of the pipeline follows.
    UnsupportedLocalTypeVariable {
        span: Span,
    },
}

impl TypeCheckError {
    pub fn span(&self) -> Span {
        match self {
            TypeCheckError::Mismatch { span, .. }
            | TypeCheckError::ExpectedFunction { span, .. }
            | TypeCheckError::ExpectedProduct { span, .. }
            | TypeCheckError::NoSuchField { span, .. }
            | TypeCheckError::CannotInferLambda { span }
            | TypeCheckError::MissingSignature { span, .. }
            | TypeCheckError::CyclicTypeAlias { span, .. }
            | TypeCheckError::DuplicateField { span, .. }
            | TypeCheckError::UnsupportedLocalTypeVariable { span } => *span,
        }
    }

    /// A human-readable message. Takes the interner explicitly since the
    /// types and names involved only mean something relative to it.
    pub fn message(&self, interner: &Interner) -> String {
        match self {
            TypeCheckError::Mismatch { expected, found, .. } => format!(
                "type mismatch: expected `{}`, found `{}`",
                expected.render(interner),
                found.render(interner)
            ),
            TypeCheckError::ExpectedFunction { found, .. } => format!(
                "expected a function type, found `{}`",
                found.render(interner)
            ),
            TypeCheckError::ExpectedProduct { found, .. } => format!(
                "expected a record type, found `{}`",
                found.render(interner)
            ),
            TypeCheckError::NoSuchField { name, .. } => {
                format!("no field named `{}`", interner.resolve(*name))
            }
            TypeCheckError::CannotInferLambda { .. } => {
                "cannot infer the type of a lambda here; it needs an expected type".to_string()
            }
            TypeCheckError::MissingSignature { name, .. } => format!(
                "`{}` has no matching `decl` signature",
                interner.resolve(*name)
            ),
            TypeCheckError::CyclicTypeAlias { name, .. } => {
                format!("type alias `{}` refers to itself", interner.resolve(*name))
            }
            TypeCheckError::DuplicateField { name, .. } => {
                format!("duplicate field `{}`", interner.resolve(*name))
            }
            TypeCheckError::UnsupportedLocalTypeVariable { .. } => {
                "local type variables are not supported".to_string()
            }
        }
    }
}

/// The pre-sweep over declarations: a value-level signature map (from
/// `decl`) and a type-alias map (from `type`). `defn` contributes nothing
/// here — a binding's type comes from its matching `decl`, not from
/// itself.
#[derive(Debug, Default)]
pub struct GlobalSigs {
    pub value_globals: FxHashMap<InternId, TypeExprId>,
    pub type_globals: FxHashMap<InternId, TypeExprId>,
}

fn collect_signatures(program: &Program) -> GlobalSigs {
    let mut value_globals = FxHashMap::default();
    let mut type_globals = FxHashMap::default();
    for decl in &program.decls {
        match decl {
            Decl::Bind { .. } => {}
            Decl::Decl { name, type_expr, .. } => {
                value_globals.insert(*name, *type_expr);
            }
            Decl::TypeAlias { name, type_expr, .. } => {
                type_globals.insert(*name, *type_expr);
            }
        }
    }
    GlobalSigs {
        value_globals,
        type_globals,
    }
}

/// Evaluate a type expression to its semantic `Type`, detecting alias
/// cycles along the way. `in_progress` holds the alias names currently
/// being expanded on this call's chain.
fn eval(
    id: TypeExprId,
    program: &Program,
    globals: &GlobalSigs,
    interner: &Interner,
    in_progress: &mut FxHashSet<InternId>,
) -> Result<Type, TypeCheckError> {
    let node = program.type_exprs.get(id);
    match &node.kind {
        TypeExprKind::Identifier { bound, .. } => {
            let Bound::Global(name) = *bound else {
                return Err(TypeCheckError::UnsupportedLocalTypeVariable { span: node.span });
            };
            if interner.resolve(name) == "isize" {
                return Ok(Type::Isize);
            }
            if !in_progress.insert(name) {
                return Err(TypeCheckError::CyclicTypeAlias {
                    name,
                    span: node.span,
                });
            }
            let aliased = *globals
                .type_globals
                .get(&name)
                .expect("resolver guarantees every type global name has a definition");
            let result = eval(aliased, program, globals, interner, in_progress);
            in_progress.remove(&name);
            result
        }
        TypeExprKind::Arrow { from, to } => {
            let from_ty = eval(*from, program, globals, interner, in_progress)?;
            let to_ty = eval(*to, program, globals, interner, in_progress)?;
            Ok(Type::arrow(from_ty, to_ty))
        }
        TypeExprKind::Product { fields } => {
            let mut seen = FxHashSet::default();
            let mut out = Vec::with_capacity(fields.len());
            for (name, field_ty) in fields {
                if !seen.insert(*name) {
                    return Err(TypeCheckError::DuplicateField {
                        name: *name,
                        span: node.span,
                    });
                }
                out.push((*name, eval(*field_ty, program, globals, interner, in_progress)?));
            }
            Ok(Type::Product(out))
        }
    }
}

struct Checker<'p> {
    program: &'p Program,
    globals: &'p GlobalSigs,
    interner: &'p Interner,
    locals: Vec<Type>,
}

impl<'p> Checker<'p> {
    fn eval_type(&self, id: TypeExprId) -> Result<Type, TypeCheckError> {
        let mut in_progress = FxHashSet::default();
        eval(id, self.program, self.globals, self.interner, &mut in_progress)
    }

    fn infer(&mut self, id: ExprId) -> Result<Type, TypeCheckError> {
        let node = self.program.exprs.get(id);
        let span = node.span;
        match node.kind.clone() {
            ExprKind::Integer(_) => Ok(Type::Isize),
            ExprKind::Identifier { bound, .. } => match bound {
                Bound::Local(i) => {
                    let idx = self.locals.len() - 1 - i as usize;
                    Ok(self.locals[idx].clone())
                }
                Bound::Global(name) => {
                    let sig = *self
                        .globals
                        .value_globals
                        .get(&name)
                        .ok_or(TypeCheckError::MissingSignature { name, span })?;
                    self.eval_type(sig)
                }
                Bound::Undetermined => {
                    unreachable!("Undetermined identifiers cannot survive resolution")
                }
            },
            ExprKind::Binary { lhs, rhs, .. } => {
                self.check(lhs, &Type::Isize)?;
                self.check(rhs, &Type::Isize)?;
                Ok(Type::Isize)
            }
            ExprKind::Let { value, body, .. } => {
                let t_v = self.infer(value)?;
                self.locals.push(t_v);
                let t_b = self.infer(body);
                self.locals.pop();
                t_b
            }
            ExprKind::Lambda { .. } => Err(TypeCheckError::CannotInferLambda { span }),
            ExprKind::Application { function, argument } => {
                let t_f = self.infer(function)?;
                let Some((from, to)) = t_f.as_arrow() else {
                    return Err(TypeCheckError::ExpectedFunction {
                        found: t_f.clone(),
                        span,
                    });
                };
                let (from, to) = (from.clone(), to.clone());
                self.check(argument, &from)?;
                Ok(to)
            }
            ExprKind::Product { fields } => {
                let mut seen = FxHashSet::default();
                let mut out = Vec::with_capacity(fields.len());
                for (name, value) in fields {
                    if !seen.insert(name) {
                        return Err(TypeCheckError::DuplicateField { name, span });
                    }
                    out.push((name, self.infer(value)?));
                }
                Ok(Type::Product(out))
            }
            ExprKind::Projection { record, field } => {
                let t = self.infer(record)?;
                let Some(fields) = t.as_product() else {
                    return Err(TypeCheckError::ExpectedProduct {
                        found: t.clone(),
                        span,
                    });
                };
                fields
                    .iter()
                    .find(|(name, _)| *name == field)
                    .map(|(_, ty)| ty.clone())
                    .ok_or(TypeCheckError::NoSuchField { name: field, span })
            }
        }
    }

    fn check(&mut self, id: ExprId, expected: &Type) -> Result<(), TypeCheckError> {
        let node = self.program.exprs.get(id);
        let span = node.span;
        match node.kind.clone() {
            ExprKind::Lambda { body, .. } => {
                let Some((from, to)) = expected.as_arrow() else {
                    return Err(TypeCheckError::ExpectedFunction {
                        found: expected.clone(),
                        span,
                    });
                };
                let (from, to) = (from.clone(), to.clone());
                self.locals.push(from);
                let result = self.check(body, &to);
                self.locals.pop();
                result
            }
            _ => {
                let t = self.infer(id)?;
                if &t != expected {
                    return Err(TypeCheckError::Mismatch {
                        expected: expected.clone(),
                        found: t,
                        span,
                    });
                }
                Ok(())
            }
        }
    }
}

/// Type-check every declaration in `program`, in source order.
pub fn check_program(program: &Program, interner: &Interner) -> Result<(), TypeCheckError> {
    let globals = collect_signatures(program);

    for decl in &program.decls {
        match decl {
            Decl::Bind {
                name,
                value,
                name_span,
            } => {
                let sig = *globals.value_globals.get(name).ok_or(
                    TypeCheckError::MissingSignature {
                        name: *name,
                        span: *name_span,
                    },
                )?;
                let mut checker = Checker {
                    program,
                    globals: &globals,
                    interner,
                    locals: Vec::new(),
                };
                let expected = checker.eval_type(sig)?;
                checker.check(*value, &expected)?;
            }
            Decl::Decl { type_expr, .. } | Decl::TypeAlias { type_expr, .. } => {
                let checker = Checker {
                    program,
                    globals: &globals,
                    interner,
                    locals: Vec::new(),
                };
                checker.eval_type(*type_expr)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/checker_tests.rs"]
mod tests;
