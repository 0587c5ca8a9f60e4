//! `Type`: the semantic, post-evaluation type algebra.
//!
//! Unlike [`corefn_parser::TypeExpr`], a `Type` carries no source span and
//! no alias indirection — `eval` has already resolved every alias. A
//! `Type` owns its own sub-types rather than referencing an arena, since
//! nothing recursive can survive alias-cycle rejection.

use corefn_common::{InternId, Interner};

#[derive(Clone, Debug)]
pub enum Type {
    /// The single built-in scalar.
    Isize,
    Arrow(Box<Type>, Box<Type>),
    /// Field order is preserved from the source but ignored by `eq` —
    /// record equality is structural and unordered.
    Product(Vec<(InternId, Type)>),
}

impl Type {
    pub fn arrow(from: Type, to: Type) -> Type {
        Type::Arrow(Box::new(from), Box::new(to))
    }

    pub fn as_arrow(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Arrow(from, to) => Some((from, to)),
            _ => None,
        }
    }

    pub fn as_product(&self) -> Option<&[(InternId, Type)]> {
        match self {
            Type::Product(fields) => Some(fields),
            _ => None,
        }
    }

    /// Render for diagnostics. Needs the interner to spell field/type
    /// names, so this isn't a `Display` impl.
    pub fn render(&self, interner: &Interner) -> String {
        match self {
            Type::Isize => "isize".to_string(),
            Type::Arrow(from, to) => {
                format!("{} -> {}", from.render(interner), to.render(interner))
            }
            Type::Product(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(name, ty)| format!("{}: {}", interner.resolve(*name), ty.render(interner)))
                    .collect();
                format!("{{ {} }}", parts.join("; "))
            }
        }
    }
}

/// Structural equality: unordered on product field names. Duplicate field
/// names are rejected earlier (when a product is built), so the naive
/// "every left field has a match on the right" check here never needs to
/// worry about ambiguous pairings in practice.
impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::Isize, Type::Isize) => true,
            (Type::Arrow(a1, b1), Type::Arrow(a2, b2)) => a1 == a2 && b1 == b2,
            (Type::Product(f1), Type::Product(f2)) => {
                f1.len() == f2.len()
                    && f1.iter().all(|(name, ty)| {
                        f2.iter().any(|(name2, ty2)| name == name2 && ty == ty2)
                    })
            }
            _ => false,
        }
    }
}

impl Eq for Type {}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
