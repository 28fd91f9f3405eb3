//! Substitution module

pub mod context;
pub mod types;

pub use context::LaunchContext;
pub use types::{resolve_substitutions, Substitution};
