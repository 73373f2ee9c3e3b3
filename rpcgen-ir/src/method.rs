//! Methods and examples.

use serde::Deserialize;
use serde_json::Value;

use crate::Field;

/// A remote procedure.
///
/// The name is the wire path segment and is unique across the schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub inputs: Vec<Field>,
    #[serde(default)]
    pub outputs: Vec<Field>,
    #[serde(default)]
    pub examples: Vec<MethodExample>,
}

impl Method {
    /// Zero inputs means the request carries no body.
    pub fn has_inputs(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Zero outputs means the response carries no body.
    pub fn has_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }

    /// Fields of the request followed by the fields of the response.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.inputs.iter().chain(self.outputs.iter())
    }
}

/// A documented call of a method.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodExample {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default)]
    pub output: Option<Value>,
}

/// A documented value of a type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: Value,
}
