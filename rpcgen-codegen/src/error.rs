//! Errors raised while generating code from a schema.

use rpcgen_ir::Kind;

/// Result type for backend generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// A schema construct a backend cannot turn into source.
///
/// Every variant aborts the whole run; no partial output is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// A `$ref` names a type that is not declared in the schema.
    #[error("reference to undefined type \"{reference}\"{}", at(.location))]
    UnresolvedReference {
        reference: String,
        location: Option<String>,
    },

    /// The backend has no mapping for a primitive kind.
    #[error("{backend}: no type mapping for kind \"{kind}\"")]
    UnmappedKind { backend: &'static str, kind: Kind },

    /// An array field without an `items` declaration.
    #[error("array field {field} does not declare its items")]
    MissingItems { field: String },

    /// A default value whose JSON shape does not match the field kind.
    #[error("default value of {field} is not a valid {kind}")]
    InvalidDefault { field: String, kind: String },

    /// A backend thread panicked during concurrent generation.
    #[error("backend {backend} panicked")]
    BackendPanicked { backend: &'static str },
}

impl GenerateError {
    /// Attach a dotted schema location to an unresolved reference.
    pub fn at(self, location: impl Into<String>) -> Self {
        match self {
            Self::UnresolvedReference { reference, .. } => Self::UnresolvedReference {
                reference,
                location: Some(location.into()),
            },
            other => other,
        }
    }
}

fn at(location: &Option<String>) -> String {
    location
        .as_deref()
        .map(|loc| format!(" (at {})", loc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_display() {
        let err = GenerateError::UnresolvedReference {
            reference: "#/types/Ghost".to_string(),
            location: None,
        };
        assert_eq!(err.to_string(), "reference to undefined type \"#/types/Ghost\"");

        let err = err.at("types.item.ghost");
        assert_eq!(
            err.to_string(),
            "reference to undefined type \"#/types/Ghost\" (at types.item.ghost)"
        );
    }

    #[test]
    fn test_unmapped_kind_display() {
        let err = GenerateError::UnmappedKind {
            backend: "go-types",
            kind: Kind::Timestamp,
        };
        assert_eq!(err.to_string(), "go-types: no type mapping for kind \"timestamp\"");
    }
}
