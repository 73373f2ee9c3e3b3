//! Validation pipeline run before any backend.
//!
//! This module provides a [`Pipeline`] orchestrator that runs phases over a
//! loaded schema. The pipeline provides:
//!
//! - Explicit phase boundaries
//! - Unified diagnostics collection
//! - A [`CompilationContext`] handed to the backends afterwards
//!
//! # Example
//!
//! ```ignore
//! use rpcgen_codegen::pipeline::{Pipeline, Severity};
//! use rpcgen_codegen::testing::todo_schema;
//!
//! let ctx = Pipeline::new().run(todo_schema()).unwrap();
//!
//! for diag in &ctx.diagnostics {
//!     if matches!(diag.severity, Severity::Warning) {
//!         eprintln!("warning: {}", diag.message);
//!     }
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use phases::{GroupPolicy, Lint, LintInfo, ValidatePhase};
pub use runner::Pipeline;
