//! Lint for empty descriptions.

use rpcgen_ir::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about methods and types missing descriptions.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about methods and types without a description"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for method in &schema.methods {
            if method.description.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("method '{}' has no description", method.name),
                    )
                    .at(format!("methods.{}", method.name)),
                );
            }
        }

        for ty in schema.types.values() {
            if ty.description.is_empty() {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("type '{}' has no description", ty.name))
                        .at(format!("types.{}", ty.name)),
                );
            }
        }
    }
}
