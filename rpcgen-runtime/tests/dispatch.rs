//! A small dispatcher over the runtime, driven end to end.

use std::{future::Future, sync::Mutex};

use bytes::Bytes;
use http::{Request, Response, StatusCode, header::CONTENT_TYPE};
use rpcgen_runtime::{
    Error, RequestContext, Route, Validate, ValidationError, read_validated_request, respond,
    respond_empty, route, write_error, write_health,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct AddItemInput {
    item: String,
}

impl Validate for AddItemInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.item.is_empty() {
            return Err(ValidationError::new("item", "is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct GetItemsOutput {
    items: Vec<String>,
}

trait Service: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<(), Error>> + Send {
        async { Ok(()) }
    }

    fn add_item(
        &self,
        ctx: &RequestContext,
        input: AddItemInput,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn get_items(
        &self,
        ctx: &RequestContext,
    ) -> impl Future<Output = Result<GetItemsOutput, Error>> + Send;
}

async fn dispatch<S: Service>(service: &S, req: Request<Bytes>) -> Response<String> {
    let name = match route(&req) {
        Route::Health => return write_health(service.health().await),
        Route::Invalid => return write_error(&Error::bad_request("Invalid method")),
        Route::Call(name) => name,
    };
    let ctx = RequestContext::new(&req);

    match name.as_str() {
        "add_item" => {
            let input: AddItemInput = match read_validated_request(&req) {
                Ok(input) => input,
                Err(err) => return write_error(&err),
            };
            respond_empty(service.add_item(&ctx, input).await)
        }
        "get_items" => respond(service.get_items(&ctx).await),
        _ => write_error(&Error::bad_request("Invalid method")),
    }
}

#[derive(Default)]
struct Todo {
    items: Mutex<Vec<String>>,
    healthy: bool,
}

impl Service for Todo {
    async fn health(&self) -> Result<(), Error> {
        if self.healthy {
            Ok(())
        } else {
            Err(Error::internal("database unavailable"))
        }
    }

    async fn add_item(&self, ctx: &RequestContext, input: AddItemInput) -> Result<(), Error> {
        if ctx.bearer_token() == Some("readonly") {
            return Err(Error::new(StatusCode::FORBIDDEN, "forbidden", "Read-only token"));
        }
        self.items
            .lock()
            .map_err(|_| Error::internal("poisoned"))?
            .push(input.item);
        Ok(())
    }

    async fn get_items(&self, _ctx: &RequestContext) -> Result<GetItemsOutput, Error> {
        tokio::task::yield_now().await;
        let items = self
            .items
            .lock()
            .map_err(|_| Error::internal("poisoned"))?
            .clone();
        Ok(GetItemsOutput { items })
    }
}

fn healthy() -> Todo {
    Todo {
        healthy: true,
        ..Todo::default()
    }
}

fn post(path: &str, body: &'static str) -> Request<Bytes> {
    Request::post(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

fn get(path: &str) -> Request<Bytes> {
    Request::get(path).body(Bytes::new()).unwrap()
}

#[tokio::test]
async fn test_add_item_answers_no_content() {
    let service = healthy();
    let res = dispatch(&service, post("/add_item", r#"{ "item": "Buy milk" }"#)).await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.body(), "");
    assert_eq!(*service.items.lock().unwrap(), ["Buy milk"]);
}

#[tokio::test]
async fn test_malformed_body_never_reaches_the_service() {
    let service = healthy();
    let res = dispatch(&service, post("/add_item", r#"{ "item": "#)).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body(),
        "{\n  \"type\": \"bad_request\",\n  \"message\": \"Failed to parse malformed request body, must be a valid JSON object\"\n}\n"
    );
    assert!(service.items.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_failure() {
    let service = healthy();
    let res = dispatch(&service, post("/add_item", "{}")).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.body().contains("\"type\": \"invalid\""));
    assert!(res.body().contains("\"message\": \"item is required\""));
}

#[tokio::test]
async fn test_output_is_pretty_json() {
    let service = healthy();
    dispatch(&service, post("/add_item", r#"{ "item": "a" }"#)).await;
    let res = dispatch(&service, post("/get_items", "")).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(res.body(), "{\n  \"items\": [\n    \"a\"\n  ]\n}\n");
}

#[tokio::test]
async fn test_health() {
    let res = dispatch(&healthy(), get("/_health")).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.body(), "OK\n");

    let res = dispatch(&Todo::default(), get("/_health")).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body(), "Health check failed\n");
}

#[tokio::test]
async fn test_invalid_methods() {
    let service = healthy();
    for req in [get("/add_item"), post("/nope", "{}")] {
        let res = dispatch(&service, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.body().contains("\"message\": \"Invalid method\""));
    }
}

#[tokio::test]
async fn test_service_errors_keep_their_status() {
    let service = healthy();
    let req = Request::post("/add_item")
        .header(CONTENT_TYPE, "application/json")
        .header("Authorization", "Bearer readonly")
        .body(Bytes::from_static(br#"{ "item": "x" }"#))
        .unwrap();
    let res = dispatch(&service, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert!(res.body().contains("\"type\": \"forbidden\""));
}
