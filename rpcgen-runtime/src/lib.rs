//! Runtime protocol for servers generated by rpcgen.
//!
//! Generated dispatchers work on [`http::Request<Bytes>`] and answer with
//! [`http::Response<String>`], so any HTTP server can host them:
//!
//! - `GET /_health` answers `OK` or `Health check failed`.
//! - `POST /<method>` decodes a JSON object, calls the service and answers
//!   with pretty JSON, or `204 No Content` for methods without outputs.
//! - Failures answer with a `{"type", "message"}` JSON body.
//!
//! [`http::Request<Bytes>`]: http::Request
//! [`http::Response<String>`]: http::Response

mod context;
mod error;
mod request;
mod response;
mod route;
mod validate;

pub use context::RequestContext;
pub use error::Error;
pub use request::{read_request, read_validated_request};
pub use response::{respond, respond_empty, write_empty, write_error, write_health, write_response};
pub use route::{HEALTH_PATH, Route, route};
pub use validate::{Validate, ValidationError};

/// The only request body type accepted.
pub const JSON_CONTENT_TYPE: &str = "application/json";
