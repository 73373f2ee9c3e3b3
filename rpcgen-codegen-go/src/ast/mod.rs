//! Go AST builders for generating files, structs and functions.
//!
//! These provide a high-level API for constructing Go syntax,
//! which can then be rendered via CodeBuilder.

mod file;
mod funcs;
mod structs;

pub use file::{GoFile, Imports};
pub use funcs::Func;
pub use structs::{Field, Struct};
