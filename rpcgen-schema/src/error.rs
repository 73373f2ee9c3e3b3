use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the document text and filename so errors can point at the
/// offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of the byte the JSON parser stopped at.
    fn span_of(&self, err: &serde_json::Error) -> Option<SourceSpan> {
        if err.line() == 0 {
            return None;
        }
        let offset = SourceOffset::from_location(&self.src, err.line(), err.column());
        Some(SourceSpan::new(offset, 1))
    }

    /// Create a parse error from a JSON syntax error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: self.span_of(&source),
            source,
        })
    }

    /// Create a structural error listing every meta-schema violation.
    pub fn structural_error(&self, violations: Vec<String>) -> Box<Error> {
        Box::new(Error::Structural {
            src: self.named_source(),
            violations,
        })
    }

    /// Create a decode error from a typed deserialization failure.
    pub fn decode_error(&self, source: serde_json::Error) -> Box<Error> {
        Box::new(Error::Decode {
            src: self.named_source(),
            span: self.span_of(&source),
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(rpcgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(code(rpcgen::parse_error), help("the schema must be a JSON document"))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", format_violations(.violations))]
    #[diagnostic(
        code(rpcgen::validation_error),
        help("the schema does not match the expected structure; fix every listed violation")
    )]
    Structural {
        #[source_code]
        src: NamedSource<String>,
        violations: Vec<String>,
    },

    #[error("failed to decode schema")]
    #[diagnostic(code(rpcgen::decode_error))]
    Decode {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid meta-schema: {message}")]
    #[diagnostic(code(rpcgen::meta_schema))]
    MetaSchema { message: String },
}

impl Error {
    /// The meta-schema violations, if this is a structural error.
    pub fn violations(&self) -> &[String] {
        match self {
            Error::Structural { violations, .. } => violations,
            _ => &[],
        }
    }
}

fn format_violations(violations: &[String]) -> String {
    let mut out = String::from("validation failed:");
    for violation in violations {
        out.push_str("\n  - ");
        out.push_str(violation);
    }
    out
}
