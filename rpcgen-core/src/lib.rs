//! Core utilities for rpcgen.
//!
//! This crate provides the identifier casing helpers, the acronym-aware
//! [`Naming`] normalizer shared by every backend, and the rules for writing
//! generated files to disk.

mod file;
mod naming;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Naming
pub use naming::{DEFAULT_ACRONYMS, Naming};
// String utilities
pub use utils::{capitalize, to_pascal_case, to_snake_case, words};
