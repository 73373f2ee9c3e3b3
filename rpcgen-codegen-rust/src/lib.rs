//! Rust backends for rpcgen: serde types with optional validation, a
//! `Service` trait with a dispatcher over `rpcgen_runtime`, and a `reqwest`
//! client.

mod client;
mod naming;
mod rust_file;
mod server;
mod type_mapper;
mod types;
mod validate;

pub mod ast;

pub use client::RustClient;
pub use naming::RUST_NAMING;
pub use rust_file::{RustFile, Uses};
pub use server::{DEFAULT_TYPES_PATH, RustServer};
pub use type_mapper::RustTypeMapper;
pub use types::RustTypes;
