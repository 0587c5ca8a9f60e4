//! Two-sweep name resolution.
//!
//! Sweep one collects every top-level name into a value or type namespace
//! (flat; no fixed point needed, since a `defn` may call another `defn`
//! declared later in the file). Sweep two walks each declaration's body
//! with an empty local stack, writing `Bound::Local`/`Bound::Global` onto
//! every identifier it visits.

use corefn_common::{InternId, Interner, Span};
use corefn_parser::{Bound, Decl, ExprId, ExprKind, Program, TypeExprId, TypeExprKind};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveError {
    UnboundIdentifier {
        name: InternId,
        span: Span,
    },
    /// A name was bound twice in the same role (two `defn`s, two `decl`s,
    /// or two `type`s for the same name). A `decl` and a `defn` sharing a
    /// name is the expected signature/implementation pairing, not this.
    DuplicateBinding {
        name: InternId,
        first: Span,
        second: Span,
    },
}

impl ResolveError {
    pub fn span(&self) -> Span {
        match self {
            ResolveError::UnboundIdentifier { span, .. } => *span,
            ResolveError::DuplicateBinding { second, .. } => *second,
        }
    }

    /// A human-readable message naming the faulting identifier. Takes the
    /// interner explicitly rather than implementing `Display`, since an
    /// `InternId` is meaningless without the table it came from.
    pub fn message(&self, interner: &Interner) -> String {
        match self {
            ResolveError::UnboundIdentifier { name, .. } => {
                format!("unbound identifier `{}`", interner.resolve(*name))
            }
            ResolveError::DuplicateBinding { name, .. } => {
                format!("`{}` is declared more than once", interner.resolve(*name))
            }
        }
    }
}

/// The two independent namespaces of top-level names, collected by sweep 1.
#[derive(Debug, Default)]
pub struct GlobalNames {
    values: FxHashSet<InternId>,
    types: FxHashSet<InternId>,
}

impl GlobalNames {
    pub fn contains_value(&self, name: InternId) -> bool {
        self.values.contains(&name)
    }

    pub fn contains_type(&self, name: InternId) -> bool {
        self.types.contains(&name)
    }
}

fn insert_unique(
    seen: &mut FxHashMap<InternId, Span>,
    name: InternId,
    span: Span,
) -> Result<(), ResolveError> {
    if let Some(&first) = seen.get(&name) {
        return Err(ResolveError::DuplicateBinding {
            name,
            first,
            second: span,
        });
    }
    seen.insert(name, span);
    Ok(())
}

fn sweep_one(program: &Program, interner: &Interner) -> Result<GlobalNames, ResolveError> {
    let mut binds: FxHashMap<InternId, Span> = FxHashMap::default();
    let mut decls: FxHashMap<InternId, Span> = FxHashMap::default();
    let mut aliases: FxHashMap<InternId, Span> = FxHashMap::default();

    for decl in &program.decls {
        match decl {
            Decl::Bind { name, name_span, .. } => insert_unique(&mut binds, *name, *name_span)?,
            Decl::Decl { name, name_span, .. } => insert_unique(&mut decls, *name, *name_span)?,
            Decl::TypeAlias { name, name_span, .. } => {
                insert_unique(&mut aliases, *name, *name_span)?
            }
        }
    }

    let mut values: FxHashSet<InternId> = binds.keys().copied().collect();
    values.extend(decls.keys().copied());
    let mut types: FxHashSet<InternId> = aliases.keys().copied().collect();
    // `isize` is the language's sole scalar type, spelled as an ordinary
    // identifier rather than a keyword (see the checker's `eval`, which
    // gives it direct builtin meaning instead of an alias lookup). Seed it
    // into the type namespace so it resolves without a `type isize = ...`
    // declaration that no program ever writes.
    if let Some(isize_id) = interner.get("isize") {
        types.insert(isize_id);
    }

    Ok(GlobalNames { values, types })
}

struct Walker<'p> {
    program: &'p mut Program,
    globals: &'p GlobalNames,
    locals: Vec<InternId>,
}

impl<'p> Walker<'p> {
    fn lookup_value(&self, name: InternId, span: Span) -> Result<Bound, ResolveError> {
        if let Some(depth) = self.locals.iter().rev().position(|n| *n == name) {
            return Ok(Bound::Local(depth as u32));
        }
        if self.globals.contains_value(name) {
            return Ok(Bound::Global(name));
        }
        Err(ResolveError::UnboundIdentifier { name, span })
    }

    fn lookup_type(&self, name: InternId, span: Span) -> Result<Bound, ResolveError> {
        if self.globals.contains_type(name) {
            Ok(Bound::Global(name))
        } else {
            Err(ResolveError::UnboundIdentifier { name, span })
        }
    }

    fn resolve_expr(&mut self, id: ExprId) -> Result<(), ResolveError> {
        let kind = self.program.exprs.get(id).kind.clone();
        match kind {
            ExprKind::Integer(_) => {}
            ExprKind::Identifier { name, .. } => {
                let span = self.program.exprs.get(id).span;
                let bound = self.lookup_value(name, span)?;
                self.program.exprs.get_mut(id).kind = ExprKind::Identifier { name, bound };
            }
            ExprKind::Binary { lhs, rhs, .. } => {
                self.resolve_expr(lhs)?;
                self.resolve_expr(rhs)?;
            }
            ExprKind::Let { var, value, body } => {
                self.resolve_expr(value)?;
                self.locals.push(var);
                self.resolve_expr(body)?;
                self.locals.pop();
            }
            ExprKind::Lambda { param, body } => {
                self.locals.push(param);
                self.resolve_expr(body)?;
                self.locals.pop();
            }
            ExprKind::Application { function, argument } => {
                self.resolve_expr(function)?;
                self.resolve_expr(argument)?;
            }
            ExprKind::Product { fields } => {
                for (_, value) in fields {
                    self.resolve_expr(value)?;
                }
            }
            ExprKind::Projection { record, .. } => {
                self.resolve_expr(record)?;
            }
        }
        Ok(())
    }

    fn resolve_type(&mut self, id: TypeExprId) -> Result<(), ResolveError> {
        let kind = self.program.type_exprs.get(id).kind.clone();
        match kind {
            TypeExprKind::Identifier { name, .. } => {
                let span = self.program.type_exprs.get(id).span;
                let bound = self.lookup_type(name, span)?;
                self.program.type_exprs.get_mut(id).kind = TypeExprKind::Identifier { name, bound };
            }
            TypeExprKind::Arrow { from, to } => {
                self.resolve_type(from)?;
                self.resolve_type(to)?;
            }
            TypeExprKind::Product { fields } => {
                for (_, ty) in fields {
                    self.resolve_type(ty)?;
                }
            }
        }
        Ok(())
    }
}

/// Resolve every identifier in `program` in place.
///
/// On success every `Identifier.bound` reachable from a declaration is
/// `Local` or `Global`; none remain `Undetermined`.
pub fn resolve_program(program: &mut Program, interner: &Interner) -> Result<(), ResolveError> {
    let globals = sweep_one(program, interner)?;

    for i in 0..program.decls.len() {
        let decl = program.decls[i].clone();
        let mut walker = Walker {
            program,
            globals: &globals,
            locals: Vec::new(),
        };
        match decl {
            Decl::Bind { value, .. } => walker.resolve_expr(value)?,
            Decl::Decl { type_expr, .. } => walker.resolve_type(type_expr)?,
            Decl::TypeAlias { type_expr, .. } => walker.resolve_type(type_expr)?,
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
