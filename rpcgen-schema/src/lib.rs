//! RPC schema loading and validation.
//!
//! Loading runs in a fixed order and every failure is fatal:
//!
//! 1. read the document
//! 2. parse it as JSON
//! 3. validate it against the embedded meta-schema, collecting every violation
//! 4. decode it into the [`rpcgen_ir::Schema`] IR
//! 5. name each type after its map key and sort everything canonically
//!
//! ```ignore
//! let schema = rpcgen_schema::load("schema.json")?;
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod validator;

use std::path::Path;

pub use error::{Error, Result, SourceContext};
use rpcgen_ir::Schema;
use serde_json::Value;
pub use validator::{JsonSchemaValidator, META_SCHEMA, StructuralValidator};

/// Loads schema documents through a structural validator.
pub struct Loader {
    validator: Box<dyn StructuralValidator>,
}

impl Loader {
    /// Create a loader validating against the embedded meta-schema.
    pub fn new() -> Result<Self> {
        Ok(Self::with_validator(JsonSchemaValidator::meta()?))
    }

    /// Create a loader using a custom structural validator.
    pub fn with_validator(validator: impl StructuralValidator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
        }
    }

    /// Load a schema from a file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Schema> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        self.load_str(&content, &path.display().to_string())
    }

    /// Load a schema from a string, using `filename` in diagnostics.
    pub fn load_str(&self, content: &str, filename: &str) -> Result<Schema> {
        let ctx = SourceContext::new(content, filename);

        let document: Value = serde_json::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let violations = self.validator.validate(&document);
        if !violations.is_empty() {
            tracing::debug!(filename, count = violations.len(), "schema failed validation");
            return Err(ctx.structural_error(violations));
        }

        let mut schema: Schema =
            serde_json::from_str(content).map_err(|e| ctx.decode_error(e))?;
        schema.canonicalize();

        tracing::debug!(
            filename,
            methods = schema.methods.len(),
            types = schema.types.len(),
            groups = schema.groups.len(),
            "loaded schema"
        );
        Ok(schema)
    }
}

/// Load a schema file, validating against the embedded meta-schema.
pub fn load(path: impl AsRef<Path>) -> Result<Schema> {
    Loader::new()?.load(path)
}

/// Load a schema from a string (uses "schema.json" as the filename).
pub fn load_str(content: &str) -> Result<Schema> {
    load_str_with_filename(content, "schema.json")
}

/// Load a schema from a string with a custom filename for error reporting.
pub fn load_str_with_filename(content: &str, filename: &str) -> Result<Schema> {
    Loader::new()?.load_str(content, filename)
}
