//! AST types: expression trees, type-expression trees, and declarations.
//!
//! Trees are owned by an arena per tree kind ([`ExprArena`], [`TypeExprArena`])
//! and referenced by index ([`ExprId`], [`TypeExprId`]). This keeps every
//! tree an acyclic, flat, cheaply-copyable structure — a node never holds a
//! child directly, only the index to look it up in its arena.

use corefn_common::{InternId, Span};
use smallvec::SmallVec;

/// How an identifier has been bound, post-resolution.
///
/// Freshly parsed identifiers start `Undetermined`; the resolver writes
/// this field exactly once, to either a de Bruijn local index or a global
/// name. After resolution, `Undetermined` must not remain on any reachable
/// node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Undetermined,
    /// De Bruijn index into the enclosing `let`/`\` stack, 0 = innermost.
    Local(u32),
    /// Name of a top-level declaration, in whichever namespace (value or
    /// type) this identifier was resolved against.
    Global(InternId),
}

/// Index of an [`Expr`] node inside an [`ExprArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

/// Index of a [`TypeExpr`] node inside a [`TypeExprArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeExprId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Mul,
}

/// An expression-tree node, plus the span of the token that gives it its
/// identity (the "signifying span" — an operator, keyword, or literal).
#[derive(Clone, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum ExprKind {
    Integer(u64),
    Identifier {
        name: InternId,
        bound: Bound,
    },
    Binary {
        lhs: ExprId,
        op: BinaryOp,
        rhs: ExprId,
    },
    Let {
        var: InternId,
        value: ExprId,
        body: ExprId,
    },
    Lambda {
        param: InternId,
        body: ExprId,
    },
    Application {
        function: ExprId,
        argument: ExprId,
    },
    Product {
        fields: SmallVec<[(InternId, ExprId); 4]>,
    },
    Projection {
        record: ExprId,
        field: InternId,
    },
}

/// A type-expression-tree node, with its signifying span.
#[derive(Clone, Debug)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum TypeExprKind {
    Identifier {
        name: InternId,
        bound: Bound,
    },
    Arrow {
        from: TypeExprId,
        to: TypeExprId,
    },
    Product {
        fields: SmallVec<[(InternId, TypeExprId); 4]>,
    },
}

/// One top-level declaration. `name_span` is the span of the declared
/// name, used when a declaration-level diagnostic (e.g. a missing
/// signature) has no more specific span to point at.
#[derive(Clone, Debug)]
pub enum Decl {
    Bind {
        name: InternId,
        value: ExprId,
        name_span: Span,
    },
    Decl {
        name: InternId,
        type_expr: TypeExprId,
        name_span: Span,
    },
    TypeAlias {
        name: InternId,
        type_expr: TypeExprId,
        name_span: Span,
    },
}

impl Decl {
    pub fn name(&self) -> InternId {
        match self {
            Decl::Bind { name, .. } => *name,
            Decl::Decl { name, .. } => *name,
            Decl::TypeAlias { name, .. } => *name,
        }
    }

    pub fn name_span(&self) -> Span {
        match self {
            Decl::Bind { name_span, .. } => *name_span,
            Decl::Decl { name_span, .. } => *name_span,
            Decl::TypeAlias { name_span, .. } => *name_span,
        }
    }
}

/// Owner of every expression node allocated while parsing a program.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    nodes: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId(self.nodes.len() as u32);
        self.nodes.push(Expr { kind, span });
        id
    }

    pub fn get(&self, id: ExprId) -> &Expr {
        &self.nodes[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Owner of every type-expression node allocated while parsing a program.
#[derive(Clone, Debug, Default)]
pub struct TypeExprArena {
    nodes: Vec<TypeExpr>,
}

impl TypeExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: TypeExprKind, span: Span) -> TypeExprId {
        let id = TypeExprId(self.nodes.len() as u32);
        self.nodes.push(TypeExpr { kind, span });
        id
    }

    pub fn get(&self, id: TypeExprId) -> &TypeExpr {
        &self.nodes[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: TypeExprId) -> &mut TypeExpr {
        &mut self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The parsed program: a declaration list plus the arenas that own every
/// expression and type-expression tree those declarations reference.
///
/// Declaration order is preserved (it's the order they appeared in
/// source) but is semantically irrelevant — resolution and checking both
/// collect all global names before looking at any declaration's body.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
    pub exprs: ExprArena,
    pub type_exprs: TypeExprArena,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }
}
