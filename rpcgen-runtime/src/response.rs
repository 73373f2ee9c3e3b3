//! Response writing.

use http::{Response, StatusCode, header::CONTENT_TYPE};
use serde::Serialize;

use crate::{Error, JSON_CONTENT_TYPE};

#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    message: &'a str,
}

fn json(status: StatusCode, body: String) -> Response<String> {
    let mut res = Response::new(body);
    *res.status_mut() = status;
    res.headers_mut()
        .insert(CONTENT_TYPE, http::HeaderValue::from_static(JSON_CONTENT_TYPE));
    res
}

/// `200` with `value` as pretty JSON.
///
/// A value that cannot be serialized is answered as an internal error.
pub fn write_response<T: Serialize>(value: &T) -> Response<String> {
    match serde_json::to_string_pretty(value) {
        Ok(body) => json(StatusCode::OK, body + "\n"),
        Err(err) => {
            tracing::error!(%err, "failed to serialize response");
            write_error(&Error::internal("Failed to serialize response"))
        }
    }
}

/// `204 No Content`.
pub fn write_empty() -> Response<String> {
    let mut res = Response::new(String::new());
    *res.status_mut() = StatusCode::NO_CONTENT;
    res
}

/// The error's status with a pretty `{"type", "message"}` JSON body.
pub fn write_error(err: &Error) -> Response<String> {
    let body = ErrorBody {
        kind: &err.kind,
        message: &err.message,
    };
    // Two string fields always serialize.
    let body = serde_json::to_string_pretty(&body).unwrap_or_default();
    json(err.status, body + "\n")
}

/// `200 OK`, or `500 Health check failed` when the health check failed.
pub fn write_health<E: std::fmt::Display>(health: Result<(), E>) -> Response<String> {
    let (status, body) = match health {
        Ok(()) => (StatusCode::OK, "OK\n"),
        Err(err) => {
            tracing::warn!(%err, "health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Health check failed\n")
        }
    };
    let mut res = Response::new(body.to_string());
    *res.status_mut() = status;
    res.headers_mut().insert(
        CONTENT_TYPE,
        http::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    res
}

/// Answer a method call with an output.
pub fn respond<T: Serialize>(result: Result<T, Error>) -> Response<String> {
    match result {
        Ok(value) => write_response(&value),
        Err(err) => write_error(&err),
    }
}

/// Answer a method call without an output.
pub fn respond_empty(result: Result<(), Error>) -> Response<String> {
    match result {
        Ok(()) => write_empty(),
        Err(err) => write_error(&err),
    }
}
