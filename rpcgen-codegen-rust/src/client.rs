//! `reqwest` client with one async method per schema method.

use rpcgen_codegen::{Result, language::Backend};
use rpcgen_core::File;
use rpcgen_ir::{Method, Schema};

use crate::{
    ast::{Field, Fn, Impl, Param, Struct},
    naming::RUST_NAMING,
    rust_file::{RustFile, Uses},
    server::DEFAULT_TYPES_PATH,
};

/// Error type returned by every client method.
const CLIENT_ERROR: &str = r#"/// ClientError is an error returned by the client.
#[derive(Debug)]
pub enum ClientError {
    /// The server answered with a status of 300 or above.
    Status {
        status: u16,
        kind: Option<String>,
        message: String,
    },
    /// The request could not be sent or the response could not be read.
    Transport(reqwest::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Status {
                kind: Some(kind),
                message,
                ..
            } => write!(f, "{}: {}", kind, message),
            ClientError::Status { status, .. } => write!(f, "request failed with status {}", status),
            ClientError::Transport(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            ClientError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    message: String,
}"#;

/// Body of the private `send` helper: POSTs to `url/method` and turns
/// error statuses into `ClientError`.
const SEND_BODY: &str = r#"let mut req = self.http.post(format!("{}/{}", self.url, method));
if let Some(body) = body {
    req = req.json(body);
}
if let Some(token) = &self.auth_token {
    req = req.bearer_auth(token);
}

let res = req.send().await?;
let status = res.status().as_u16();
if status < 300 {
    return Ok(res);
}

let is_json = res
    .headers()
    .get(reqwest::header::CONTENT_TYPE)
    .is_some_and(|v| v == "application/json");
let body = if is_json {
    res.json::<ErrorBody>().await.ok()
} else {
    None
};
Err(ClientError::Status {
    status,
    kind: body.as_ref().and_then(|b| b.kind.clone()),
    message: body.map(|b| b.message).unwrap_or_default(),
})"#;

/// Generates `client.rs`: a `Client` for the API, built on `reqwest`.
///
/// Methods without inputs send a bodyless POST.
#[derive(Debug, Clone)]
pub struct RustClient {
    types_path: String,
}

impl Default for RustClient {
    fn default() -> Self {
        Self {
            types_path: DEFAULT_TYPES_PATH.to_string(),
        }
    }
}

impl RustClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module path the `{Method}Input` and `{Method}Output` types live in.
    pub fn types_path(mut self, path: impl Into<String>) -> Self {
        self.types_path = path.into();
        self
    }

    /// Render the file content.
    pub fn render(&self, schema: &Schema) -> String {
        let mut uses = Uses::new();
        uses.add("std", "fmt")
            .add_all("serde", ["Deserialize", "Serialize"])
            .add_all(self.types_path.as_str(), type_names(schema));

        let client = Struct::new("Client")
            .doc(format!("Client is the {} API client.", schema.name))
            .derive("Debug")
            .derive("Clone")
            .field(Field::new("url", "String").private())
            .field(Field::new("auth_token", "Option<String>").private())
            .field(Field::new("http", "reqwest::Client").private());

        let mut imp = Impl::new("Client")
            .method(
                Fn::new("new")
                    .doc("Create a client for the API served at `url`.")
                    .param(Param::new("url", "impl Into<String>"))
                    .returns("Self")
                    .body(
                        "Self {\n    url: url.into(),\n    auth_token: None,\n    http: reqwest::Client::new(),\n}",
                    ),
            )
            .method(
                Fn::new("with_auth_token")
                    .doc("Send `token` as a bearer token with every request.")
                    .param(Param::new("mut self", ""))
                    .param(Param::new("token", "impl Into<String>"))
                    .returns("Self")
                    .body("self.auth_token = Some(token.into());\nself"),
            )
            .method(
                Fn::new("with_http_client")
                    .doc("Use `http` for making requests instead of a default client.")
                    .param(Param::new("mut self", ""))
                    .param(Param::new("http", "reqwest::Client"))
                    .returns("Self")
                    .body("self.http = http;\nself"),
            );

        for method in &schema.methods {
            imp = imp.method(method_fn(method));
        }
        imp = imp.method(
            Fn::new("send")
                .private()
                .async_()
                .generics("B: Serialize + ?Sized")
                .param(Param::self_ref())
                .param(Param::new("method", "&str"))
                .param(Param::new("body", "Option<&B>"))
                .returns("Result<reqwest::Response, ClientError>")
                .body(SEND_BODY),
        );

        RustFile::new()
            .uses(uses)
            .raw(CLIENT_ERROR)
            .add(&client)
            .add(&imp)
            .render()
    }
}

impl Backend for RustClient {
    fn name(&self) -> &'static str {
        "rust-client"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new("client.rs", self.render(schema))])
    }
}

fn method_fn(method: &Method) -> Fn {
    let name = RUST_NAMING.method_name(&method.name);
    let mut f = Fn::new(&name).async_().param(Param::self_ref());
    if !method.description.is_empty() {
        f = f.doc(format!("{} {}", name, method.description));
    }

    let send = if method.has_inputs() {
        f = f.param(Param::new(
            "input",
            format!("&{}", RUST_NAMING.input_type(&method.name)),
        ));
        format!("self.send({:?}, Some(input)).await?", method.name)
    } else {
        format!("self.send::<()>({:?}, None).await?", method.name)
    };

    if method.has_outputs() {
        f.returns(format!(
            "Result<{}, ClientError>",
            RUST_NAMING.output_type(&method.name)
        ))
        .body_line(format!("let res = {};", send))
        .body_line("Ok(res.json().await?)")
    } else {
        f.returns("Result<(), ClientError>")
            .body_line(format!("{};", send))
            .body_line("Ok(())")
    }
}

fn type_names(schema: &Schema) -> Vec<String> {
    let mut names = Vec::new();
    for method in &schema.methods {
        if method.has_inputs() {
            names.push(RUST_NAMING.input_type(&method.name));
        }
        if method.has_outputs() {
            names.push(RUST_NAMING.output_type(&method.name));
        }
    }
    names
}
