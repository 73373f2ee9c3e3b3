//! Lint for duplicate field names within one owner.

use std::collections::HashSet;

use rpcgen_ir::{Field, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on repeated property, input or output names.
pub struct DuplicatePropertyLint;

impl Lint for DuplicatePropertyLint {
    fn name(&self) -> &'static str {
        "duplicate-property"
    }

    fn description(&self) -> &'static str {
        "Detect fields sharing a name within a type, input or output"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for ty in schema.types.values() {
            check_fields(&format!("types.{}", ty.name), &ty.properties, diagnostics);
        }
        for method in &schema.methods {
            let owner = format!("methods.{}", method.name);
            check_fields(&format!("{}.inputs", owner), &method.inputs, diagnostics);
            check_fields(&format!("{}.outputs", owner), &method.outputs, diagnostics);
        }
    }
}

fn check_fields(owner: &str, fields: &[Field], diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("duplicate field '{}' in {}", field.name, owner),
                )
                .at(format!("{}.{}", owner, field.name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::todo_schema;

    #[test]
    fn test_unique_fields() {
        let mut diagnostics = Vec::new();
        DuplicatePropertyLint.check(&todo_schema(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_property() {
        let mut schema = todo_schema();
        if let Some(item) = schema.types.get_mut("item") {
            let copy = item.properties[0].clone();
            item.properties.push(copy);
        }

        let mut diagnostics = Vec::new();
        DuplicatePropertyLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("types.item.created_at")
        );
    }

    #[test]
    fn test_same_name_in_input_and_output_is_fine() {
        let mut schema = todo_schema();
        let input = schema.methods[2].inputs[0].clone();
        schema.methods[2].outputs.push(input);

        let mut diagnostics = Vec::new();
        DuplicatePropertyLint.check(&schema, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
