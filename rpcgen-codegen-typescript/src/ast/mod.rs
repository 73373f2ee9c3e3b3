//! TypeScript AST builders for generating interfaces, functions and imports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod imports;
mod interface;

pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
