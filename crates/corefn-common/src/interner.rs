//! String interning for identifiers.
//!
//! Every name in the source — a binding name, a field name, a type name —
//! is interned exactly once. The interner is an injective map from strings
//! to small integers: two [`InternId`]s compare equal iff the strings they
//! came from compare equal.

use rustc_hash::FxHashMap;

/// An opaque index into an [`Interner`]'s string table.
///
/// Cheap to copy, compare, and hash — downstream phases pass `InternId`
/// around instead of cloning strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InternId(u32);

impl InternId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A process-wide (per-compilation) injective string table.
///
/// Interning the same string twice returns the same [`InternId`]; the
/// interner owns every string it has ever seen and outlives the
/// compilation it serves.
#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<Box<str>, InternId>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s`, returning its existing id if already known.
    pub fn intern(&mut self, s: &str) -> InternId {
        if let Some(&id) = self.map.get(s) {
            return id;
        }
        let id = InternId(self.strings.len() as u32);
        let boxed: Box<str> = s.into();
        self.strings.push(boxed.clone());
        self.map.insert(boxed, id);
        id
    }

    /// Look up the string behind an [`InternId`].
    ///
    /// Panics if `id` was not produced by this interner — `InternId`s are
    /// never valid across compilations.
    pub fn resolve(&self, id: InternId) -> &str {
        &self.strings[id.index()]
    }

    /// Look up the id for `s` without interning it.
    pub fn get(&self, s: &str) -> Option<InternId> {
        self.map.get(s).copied()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
