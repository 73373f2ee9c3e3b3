//! Field validation implemented by generated input types.

/// A field that failed validation, displayed as `"<field> <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Annotate a failure inside the `index`th element of an array field.
    pub fn at_element(self, index: usize) -> Self {
        Self {
            field: format!("element {}: {}", index, self.field),
            message: self.message,
        }
    }
}

/// Implemented by generated types that declare defaults or field rules.
///
/// [`crate::read_validated_request`] calls [`Validate::apply_defaults`] and
/// then [`Validate::validate`] on every decoded input.
pub trait Validate {
    /// Replace unset fields with their declared defaults.
    fn apply_defaults(&mut self) {}

    /// Check field rules, returning the first failure.
    fn validate(&self) -> Result<(), ValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ValidationError::new("status", "must be one of: \"open\"");
        assert_eq!(err.to_string(), "status must be one of: \"open\"");
    }

    #[test]
    fn test_at_element() {
        let err = ValidationError::new("text", "is required").at_element(2);
        assert_eq!(err.to_string(), "element 2: text is required");
    }
}
