//! Lint for references to undeclared types.

use rpcgen_ir::Schema;

use super::super::Lint;
use crate::{pipeline::Diagnostic, schema::dangling_references};

/// Lint that errors on every `$ref` naming a type the schema does not declare.
pub struct DanglingReferenceLint;

impl Lint for DanglingReferenceLint {
    fn name(&self) -> &'static str {
        "dangling-reference"
    }

    fn description(&self) -> &'static str {
        "Check that every type reference resolves"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for (location, reference) in dangling_references(schema) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("reference to undefined type \"{}\"", reference),
                )
                .at(location),
            );
        }
    }
}
