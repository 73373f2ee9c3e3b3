//! Lint for duplicate method names.

use std::collections::HashSet;

use rpcgen_ir::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on methods sharing a name, since the name is the wire path.
pub struct DuplicateMethodLint;

impl Lint for DuplicateMethodLint {
    fn name(&self) -> &'static str {
        "duplicate-method"
    }

    fn description(&self) -> &'static str {
        "Detect methods sharing a name"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();

        for method in &schema.methods {
            if !seen.insert(method.name.as_str()) {
                diagnostics.push(
                    Diagnostic::error("validate", format!("duplicate method '{}'", method.name))
                        .at(format!("methods.{}", method.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::todo_schema;

    #[test]
    fn test_no_duplicates() {
        let mut diagnostics = Vec::new();
        DuplicateMethodLint.check(&todo_schema(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_reported_once_per_extra() {
        let mut schema = todo_schema();
        let copy = schema.methods[0].clone();
        schema.methods.push(copy);

        let mut diagnostics = Vec::new();
        DuplicateMethodLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("add_item"));
        assert!(diagnostics[0].severity.is_error());
    }
}
