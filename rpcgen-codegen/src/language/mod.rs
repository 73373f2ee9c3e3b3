//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`Backend`] - The generation contract every backend implements
//! - [`TypeMapper`] - Trait for mapping schema types to language types
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod traits;

pub use naming::{Case, NamingConvention};
pub use traits::{Backend, Position, TypeMapper};
