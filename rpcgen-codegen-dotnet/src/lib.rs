//! C# backend for rpcgen.
//!
//! [`DotnetClient`] writes a single `<Class>.cs` holding a model class per
//! schema type and per method input and output, a `<Class>Exception` and an
//! `HttpClient` based client with one async method per schema method.
//! Models are serialized with Newtonsoft.Json.
//!
//! ```ignore
//! use rpcgen_codegen::language::Backend;
//! use rpcgen_codegen_dotnet::DotnetClient;
//!
//! let schema = rpcgen_schema::load("schema.json")?;
//! let files = DotnetClient::new("Todo").generate(&schema)?;
//! ```

mod client;
mod naming;
mod type_mapper;

pub mod ast;

pub use client::DotnetClient;
pub use naming::DOTNET_NAMING;
pub use type_mapper::DotnetTypeMapper;
