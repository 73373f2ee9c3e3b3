//! Request routing: which endpoint a request addresses.

use http::{Method, Request};

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/_health";

/// What a request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /_health`.
    Health,
    /// Any other `GET`, or a method other than `GET` and `POST`.
    Invalid,
    /// `POST /<method>`, holding the method name.
    Call(String),
}

/// Route a request by its HTTP method and path.
pub fn route<B>(req: &Request<B>) -> Route {
    let path = req.uri().path();
    match *req.method() {
        Method::GET if path == HEALTH_PATH => Route::Health,
        Method::POST => Route::Call(path.trim_start_matches('/').to_string()),
        _ => Route::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, path: &str) -> Request<()> {
        Request::builder().method(method).uri(path).body(()).unwrap()
    }

    #[test]
    fn test_routes() {
        assert_eq!(route(&request(Method::GET, "/_health")), Route::Health);
        assert_eq!(route(&request(Method::GET, "/add_item")), Route::Invalid);
        assert_eq!(route(&request(Method::PUT, "/add_item")), Route::Invalid);
        assert_eq!(
            route(&request(Method::POST, "/add_item")),
            Route::Call("add_item".to_string())
        );
    }

    #[test]
    fn test_post_health_is_a_call() {
        assert_eq!(
            route(&request(Method::POST, "/_health")),
            Route::Call("_health".to_string())
        );
    }
}
