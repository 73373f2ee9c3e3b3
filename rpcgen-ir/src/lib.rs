//! Intermediate representation for rpcgen.
//!
//! This crate defines the in-memory form of an RPC schema: the shared named
//! types, the methods with their inputs and outputs, and the groups used for
//! documentation. Every backend reads the same IR.
//!
//! # Architecture
//!
//! ```text
//! schema.json → rpcgen-schema (load + validate) → rpcgen-ir → backends
//! ```
//!
//! The IR is built once per run and never mutated after loading, so it can be
//! shared by reference across concurrently running backends.

mod field;
mod method;
mod schema;

pub use field::{Field, FieldType, Items, Kind, TypeRef};
pub use method::{Example, Method, MethodExample};
pub use schema::{GoOptions, Group, Schema, Type};
