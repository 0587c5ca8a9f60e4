//! Common types shared across the corefn compiler front end.
//!
//! This crate provides the foundations every other corefn crate builds on:
//! - Source spans (`Span`, `Spanned`)
//! - String interning (`InternId`, `Interner`)
//! - Diagnostics (`Diagnostic`, `Phase`)

pub mod diagnostics;
pub mod interner;
pub mod span;

pub use diagnostics::{Diagnostic, Phase};
pub use interner::{InternId, Interner};
pub use span::{Span, Spanned};
