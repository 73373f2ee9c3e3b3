//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the schema and collects diagnostics

mod validate;

pub use validate::{
    DanglingReferenceLint, DuplicateMethodLint, DuplicatePropertyLint, EmptyDescriptionLint,
    FieldShapeLint, GroupPolicy, Lint, LintInfo, UnknownGroupLint, ValidatePhase,
};
