//! Structural validation against the embedded meta-schema.

use serde_json::Value;

use crate::{Error, Result};

/// The meta-schema every RPC schema document must satisfy.
pub const META_SCHEMA: &str = include_str!("schema.json");

/// Checks a raw document against a structural schema.
///
/// Returns every violation at once; an empty list means the document is valid.
pub trait StructuralValidator: Send + Sync {
    fn validate(&self, document: &Value) -> Vec<String>;
}

/// [`StructuralValidator`] backed by a compiled JSON Schema.
pub struct JsonSchemaValidator {
    validator: jsonschema::Validator,
}

impl JsonSchemaValidator {
    /// Compile the embedded [`META_SCHEMA`].
    pub fn meta() -> Result<Self> {
        let schema: Value = serde_json::from_str(META_SCHEMA).map_err(|e| {
            Box::new(Error::MetaSchema {
                message: e.to_string(),
            })
        })?;
        Self::from_schema(&schema)
    }

    /// Compile an arbitrary JSON Schema.
    pub fn from_schema(schema: &Value) -> Result<Self> {
        let validator = jsonschema::validator_for(schema).map_err(|e| {
            Box::new(Error::MetaSchema {
                message: e.to_string(),
            })
        })?;
        Ok(Self { validator })
    }
}

impl StructuralValidator for JsonSchemaValidator {
    fn validate(&self, document: &Value) -> Vec<String> {
        self.validator
            .iter_errors(document)
            .map(|err| {
                let path = err.instance_path.to_string();
                let path = if path.is_empty() { "(root)" } else { &path };
                format!("{}: {}", path, err)
            })
            .collect()
    }
}
