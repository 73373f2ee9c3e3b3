//! Per-request data handed to service methods.

use http::{HeaderMap, Method, Request};

/// The request a service method is answering.
///
/// Every request gets its own context; nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn new<B>(req: &Request<B>) -> Self {
        Self {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            headers: req.headers().clone(),
        }
    }

    /// The bearer token of the `Authorization` header, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(http::header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_request() {
        let req = Request::post("/add_item")
            .header("Authorization", "Bearer secret")
            .body(())
            .unwrap();
        let ctx = RequestContext::new(&req);

        assert_eq!(ctx.method, Method::POST);
        assert_eq!(ctx.path, "/add_item");
        assert_eq!(ctx.bearer_token(), Some("secret"));
    }

    #[test]
    fn test_missing_token() {
        let req = Request::post("/").body(()).unwrap();
        assert_eq!(RequestContext::new(&req).bearer_token(), None);
    }
}
