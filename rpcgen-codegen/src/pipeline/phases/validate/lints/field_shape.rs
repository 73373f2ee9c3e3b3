//! Lint for fields whose declaration contradicts their kind.

use rpcgen_ir::{Kind, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on enums on non-string fields and arrays without items.
pub struct FieldShapeLint;

impl Lint for FieldShapeLint {
    fn name(&self) -> &'static str {
        "field-shape"
    }

    fn description(&self) -> &'static str {
        "Check enum and items declarations against the field kind"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for (location, field) in schema.fields() {
            if !field.enum_values.is_empty() && !field.ty.is_kind(Kind::String) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("field '{}' declares an enum but is not a string", field.name),
                    )
                    .at(location.clone()),
                );
            }
            if field.is_array() && field.items.is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("array field '{}' does not declare its items", field.name),
                    )
                    .at(location),
                );
            }
        }
    }
}
