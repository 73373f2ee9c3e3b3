//! Shared code generation machinery for rpcgen backends.
//!
//! This crate provides:
//!
//! - [`builder`] - Indentation-aware code builders and renderable fragments
//! - [`language`] - The [`Backend`](language::Backend) contract, type mapping
//!   and per-language naming conventions
//! - [`schema`] - Reference resolution, field descriptions and validation checks
//! - [`generation`] - Running several backends over one schema concurrently
//! - [`pipeline`] - Lints run over a schema before generation
//! - [`testing`] - Fixtures and assertions for backend tests (feature `testing`)

pub mod builder;
pub mod error;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod schema;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{GenerateError, Result};
