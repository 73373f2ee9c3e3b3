//! Errors answered to clients.

use http::StatusCode;

use crate::ValidationError;

/// An error answered as a `{"type", "message"}` JSON body.
///
/// Errors that carry no status or type of their own become
/// [`Error::internal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub status: StatusCode,
    /// Machine-readable type, e.g. `bad_request`.
    pub kind: String,
    pub message: String,
}

impl Error {
    pub fn new(status: StatusCode, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// A malformed request: `400`, `bad_request`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    /// A request that failed validation: `400`, `invalid`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid", message)
    }

    /// Anything else: `500`, `internal`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::invalid(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let err = Error::bad_request("Invalid method");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, "bad_request");
        assert_eq!(err.to_string(), "Invalid method");

        assert_eq!(Error::invalid("x").kind, "invalid");
        assert_eq!(
            Error::internal("boom").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_validation_error() {
        let err = Error::from(ValidationError::new("text", "is required"));
        assert_eq!(err, Error::invalid("text is required"));
    }
}
