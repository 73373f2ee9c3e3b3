//! Request body decoding.

use bytes::Bytes;
use http::{Request, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, JSON_CONTENT_TYPE, Validate};

const UNSUPPORTED_CONTENT_TYPE: &str = "Unsupported request Content-Type, must be application/json";
const MALFORMED_BODY: &str = "Failed to parse malformed request body, must be a valid JSON object";

/// Decode a JSON object body into `T`.
///
/// The `Content-Type` must be exactly `application/json`. A body that is not
/// valid JSON, is not an object, or does not fit `T` is a bad request.
pub fn read_request<T: DeserializeOwned>(req: &Request<Bytes>) -> Result<T, Error> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type != Some(JSON_CONTENT_TYPE) {
        return Err(Error::bad_request(UNSUPPORTED_CONTENT_TYPE));
    }

    let value: Value = serde_json::from_slice(req.body()).map_err(|err| {
        tracing::debug!(%err, "malformed request body");
        Error::bad_request(MALFORMED_BODY)
    })?;
    if !value.is_object() {
        return Err(Error::bad_request(MALFORMED_BODY));
    }
    serde_json::from_value(value).map_err(|err| {
        tracing::debug!(%err, "request body does not match the input type");
        Error::bad_request(MALFORMED_BODY)
    })
}

/// [`read_request`], then apply defaults and validate.
///
/// A validation failure is an `invalid` error whose message is the first
/// failing field rule.
pub fn read_validated_request<T>(req: &Request<Bytes>) -> Result<T, Error>
where
    T: DeserializeOwned + Validate,
{
    let mut value: T = read_request(req)?;
    value.apply_defaults();
    value.validate()?;
    Ok(value)
}
