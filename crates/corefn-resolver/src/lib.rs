//! Name resolver for the corefn front end: annotates every identifier with
//! a [`corefn_parser::Bound`].

pub mod resolver;

pub use resolver::{resolve_program, GlobalNames, ResolveError};
