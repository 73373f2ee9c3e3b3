//! Concurrent multi-backend generation.

use std::thread;

use rpcgen_core::File;
use rpcgen_ir::Schema;

use crate::{
    error::{GenerateError, Result},
    language::Backend,
};

/// Files produced by one backend.
#[derive(Debug)]
pub struct BackendOutput {
    pub backend: &'static str,
    pub files: Vec<File>,
}

/// Run every backend over the same schema, each on its own thread.
///
/// Outputs are returned in the order the backends were given. If any backend
/// fails, the first failure in that order is returned and no output is.
pub fn generate_all(schema: &Schema, backends: &[&dyn Backend]) -> Result<Vec<BackendOutput>> {
    let results: Vec<Result<BackendOutput>> = thread::scope(|scope| {
        let handles: Vec<_> = backends
            .iter()
            .map(|backend| {
                let handle = scope.spawn(move || {
                    tracing::debug!(backend = backend.name(), "generating");
                    backend.generate(schema)
                });
                (backend.name(), handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(name, handle)| {
                let files = handle
                    .join()
                    .map_err(|_| GenerateError::BackendPanicked { backend: name })??;
                tracing::debug!(backend = name, files = files.len(), "generated");
                Ok(BackendOutput {
                    backend: name,
                    files,
                })
            })
            .collect()
    });

    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use rpcgen_ir::{Field, FieldType, TypeRef};

    use super::*;
    use crate::testing::todo_schema;

    struct Listing(&'static str);

    impl Backend for Listing {
        fn name(&self) -> &'static str {
            self.0
        }

        fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
            let names: Vec<&str> = schema.methods.iter().map(|m| m.name.as_str()).collect();
            Ok(vec![File::new(
                format!("{}.txt", self.0),
                names.join("\n"),
            )])
        }
    }

    struct Failing;

    impl Backend for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn emit(&self, _schema: &Schema) -> Result<Vec<File>> {
            Err(GenerateError::MissingItems {
                field: "items".to_string(),
            })
        }
    }

    #[test]
    fn test_outputs_in_backend_order() {
        let schema = todo_schema();
        let outputs = generate_all(&schema, &[&Listing("b"), &Listing("a")]).unwrap();

        let names: Vec<_> = outputs.iter().map(|o| o.backend).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(
            outputs[0].files[0].content(),
            "add_item\nget_items\nremove_item"
        );
    }

    #[test]
    fn test_concurrent_output_matches_sequential() {
        let schema = todo_schema();
        let sequential = Listing("a").generate(&schema).unwrap();
        let outputs = generate_all(&schema, &[&Listing("a"), &Listing("a")]).unwrap();

        for output in outputs {
            assert_eq!(output.files, sequential);
        }
    }

    #[test]
    fn test_any_failure_fails_the_run() {
        let schema = todo_schema();
        let result = generate_all(&schema, &[&Listing("a"), &Failing]);
        assert!(matches!(result, Err(GenerateError::MissingItems { .. })));
    }

    #[test]
    fn test_dangling_reference_produces_no_output() {
        let mut schema = todo_schema();
        schema.methods[0].outputs.push(Field::new(
            "ghost",
            FieldType::Reference(TypeRef::to_type("Ghost")),
        ));

        let result = generate_all(&schema, &[&Listing("a")]);
        assert!(matches!(
            result,
            Err(GenerateError::UnresolvedReference { .. })
        ));
    }
}
