//! Go backends for rpcgen: struct types with optional validation, an HTTP
//! server router and an HTTP client.

mod client;
mod naming;
mod server;
mod type_mapper;
mod types;
mod validate;

pub mod ast;

pub use client::GoClient;
pub use naming::{GO_NAMING, package_qualifier};
pub use server::GoServer;
pub use type_mapper::GoTypeMapper;
pub use types::GoTypes;

/// Import path of the runtime package generated code links against.
pub const DEFAULT_RUNTIME: &str = "github.com/apex/rpc";
