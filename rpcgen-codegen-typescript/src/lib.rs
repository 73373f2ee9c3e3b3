//! TypeScript backends for rpcgen.
//!
//! - [`TsTypes`] writes `types.ts` with an exported interface per schema
//!   type and per method input and output.
//! - [`TsClient`] writes `client.ts`, a `fetch`-based client class with one
//!   async method per schema method.
//!
//! ```ignore
//! use rpcgen_codegen::language::Backend;
//! use rpcgen_codegen_typescript::{TsClient, TsTypes};
//!
//! let schema = rpcgen_schema::load("schema.json")?;
//! let types = TsTypes::new().generate(&schema)?;
//! let client = TsClient::new("./types").generate(&schema)?;
//! ```

mod client;
mod code_file;
mod naming;
mod type_mapper;
mod types;

pub mod ast;

pub use client::TsClient;
pub use code_file::{CodeFile, RawCode};
pub use naming::{TYPESCRIPT_NAMING, property_key};
pub use type_mapper::TypeScriptTypeMapper;
pub use types::TsTypes;
