//! Bidirectional type checker for the corefn front end.

pub mod checker;
pub mod types;

pub use checker::{check_program, GlobalSigs, TypeCheckError};
pub use types::Type;
