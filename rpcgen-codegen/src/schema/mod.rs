//! Schema queries shared by every backend.
//!
//! - [`Resolver`] - Resolves `$ref`s to the types they name
//! - [`describe`] - Field attribute and enum sentences for doc comments
//! - [`checks`] - The validation rules a backend emits for a set of fields

pub mod checks;
pub mod describe;
mod resolve;

pub use checks::{Check, DefaultValue, REQUIRED_MESSAGE, Zero, checks, one_of_message};
pub use resolve::{Resolver, check_references, dangling_references};
