//! `Service` trait, request dispatcher and implementer stub.

use rpcgen_codegen::{Result, builder::CodeFragment, language::Backend};
use rpcgen_core::File;
use rpcgen_ir::{Method, Schema};

use crate::{
    ast::{Fn, Impl, Param, Struct, Trait},
    naming::RUST_NAMING,
    rust_file::{RustFile, Uses},
};

/// Default module path of the generated types, relative to the server module.
pub const DEFAULT_TYPES_PATH: &str = "super::types";

/// Generates `server.rs`, holding the `Service` trait and an async
/// `dispatch` function built on `rpcgen_runtime`, and `service_impl.rs`, a
/// stub implementation written only when missing.
#[derive(Debug, Clone)]
pub struct RustServer {
    types_path: String,
    validate: bool,
    tracing: bool,
}

impl Default for RustServer {
    fn default() -> Self {
        Self {
            types_path: DEFAULT_TYPES_PATH.to_string(),
            validate: false,
            tracing: false,
        }
    }
}

impl RustServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module path the `{Method}Input` and `{Method}Output` types live in.
    pub fn types_path(mut self, path: impl Into<String>) -> Self {
        self.types_path = path.into();
        self
    }

    /// Apply defaults and validate inputs before calling the service. The
    /// input types must implement `rpcgen_runtime::Validate`.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Run each call inside a `tracing` span carrying the method name and
    /// the input fields.
    pub fn tracing(mut self, tracing: bool) -> Self {
        self.tracing = tracing;
        self
    }

    /// Render `server.rs`.
    pub fn render(&self, schema: &Schema) -> String {
        let mut uses = Uses::new();
        uses.add("std::future", "Future")
            .add_all("http", ["Request", "Response"])
            .add("bytes", "Bytes")
            .add_all(
                "rpcgen_runtime",
                ["Error", "Route", "route", "write_error", "write_health"],
            );
        if !schema.methods.is_empty() {
            uses.add("rpcgen_runtime", "RequestContext");
        }
        if self.tracing && !schema.methods.is_empty() {
            uses.add("tracing", "Instrument");
        }
        for method in &schema.methods {
            if method.has_inputs() {
                uses.add("rpcgen_runtime", self.reader());
            }
            if method.has_outputs() {
                uses.add("rpcgen_runtime", "respond");
            } else {
                uses.add("rpcgen_runtime", "respond_empty");
            }
        }
        uses.add_all(self.types_path.as_str(), type_names(schema));

        RustFile::new()
            .uses(uses)
            .add(&service_trait(schema))
            .add(&self.dispatch(schema))
            .render()
    }

    /// Render the `service_impl.rs` stub.
    pub fn render_stub(&self, schema: &Schema) -> String {
        let mut uses = Uses::new();
        if !schema.methods.is_empty() {
            uses.add_all("rpcgen_runtime", ["Error", "RequestContext"]);
        }
        uses.add("super::server", "Service");
        uses.add_all(self.types_path.as_str(), type_names(schema));

        let mut imp = Impl::new("ServiceImpl").for_trait("Service");
        for method in &schema.methods {
            let name = RUST_NAMING.method_name(&method.name);
            let f = signature(method, "_ctx", "_input")
                .async_()
                .returns(format!("Result<{}, Error>", output(method)))
                .body_line(format!(
                    "Err(Error::internal({:?}))",
                    format!("{} is not implemented", name)
                ));
            imp = imp.method(f.private());
        }

        RustFile::new()
            .editable()
            .uses(uses)
            .add(
                &Struct::new("ServiceImpl")
                    .doc(format!("ServiceImpl implements the {} API.", schema.name))
                    .derive("Debug")
                    .derive("Clone")
                    .derive("Default"),
            )
            .add(&imp)
            .render()
    }

    fn reader(&self) -> &'static str {
        if self.validate {
            "read_validated_request"
        } else {
            "read_request"
        }
    }

    fn dispatch(&self, schema: &Schema) -> Fn {
        let f = Fn::new("dispatch")
            .doc("Dispatch routes a request to the service method named by its path.")
            .async_()
            .generics("S: Service")
            .param(Param::new("service", "&S"))
            .param(Param::new("req", "Request<Bytes>"))
            .returns("Response<String>");

        if schema.methods.is_empty() {
            return f.fragments([CodeFragment::block(
                "match route(&req) {",
                vec![
                    CodeFragment::line("Route::Health => write_health(service.health().await),"),
                    CodeFragment::line("_ => write_error(&Error::bad_request(\"Invalid method\")),"),
                ],
                "}",
            )]);
        }

        let mut arms = Vec::new();
        for method in &schema.methods {
            arms.push(self.arm(method));
        }
        arms.push(CodeFragment::line(
            "_ => write_error(&Error::bad_request(\"Invalid method\")),",
        ));

        f.fragments([
            CodeFragment::block(
                "let name = match route(&req) {",
                vec![
                    CodeFragment::line(
                        "Route::Health => return write_health(service.health().await),",
                    ),
                    CodeFragment::line(
                        "Route::Invalid => return write_error(&Error::bad_request(\"Invalid method\")),",
                    ),
                    CodeFragment::line("Route::Call(name) => name,"),
                ],
                "};",
            ),
            CodeFragment::line("let ctx = RequestContext::new(&req);"),
            CodeFragment::Blank,
            CodeFragment::block("match name.as_str() {", arms, "}"),
        ])
    }

    fn arm(&self, method: &Method) -> CodeFragment {
        let name = RUST_NAMING.method_name(&method.name);
        let mut body = Vec::new();

        let args = if method.has_inputs() {
            body.push(CodeFragment::block(
                format!(
                    "let input: {} = match {}(&req) {{",
                    RUST_NAMING.input_type(&method.name),
                    self.reader()
                ),
                vec![
                    CodeFragment::line("Ok(input) => input,"),
                    CodeFragment::line("Err(err) => return write_error(&err),"),
                ],
                "};",
            ));
            "&ctx, input"
        } else {
            "&ctx"
        };

        let mut call = format!("service.{}({})", name, args);
        if self.tracing {
            body.push(CodeFragment::line(format!(
                "let span = tracing::info_span!({});",
                span_fields(method)
            )));
            call.push_str(".instrument(span)");
        }

        let respond = if method.has_outputs() {
            "respond"
        } else {
            "respond_empty"
        };
        body.push(CodeFragment::line(format!("{}({}.await)", respond, call)));

        CodeFragment::block(format!("{:?} => {{", method.name), body, "}")
    }
}

impl Backend for RustServer {
    fn name(&self) -> &'static str {
        "rust-server"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![
            File::new("server.rs", self.render(schema)),
            File::new("service_impl.rs", self.render_stub(schema)).if_missing(),
        ])
    }
}

fn service_trait(schema: &Schema) -> Trait {
    let mut doc = format!("Service implements the {} API.", schema.name);
    if !schema.description.is_empty() {
        doc = format!("{}\n\n{}", doc, schema.description);
    }

    let mut service = Trait::new("Service").doc(doc).bounds("Send + Sync").item(
        Fn::new("health")
            .doc("Health reports whether the service can take requests.")
            .param(Param::self_ref())
            .returns("impl Future<Output = Result<(), Error>> + Send")
            .body_line("async { Ok(()) }"),
    );

    for method in &schema.methods {
        let name = RUST_NAMING.method_name(&method.name);
        let mut f = signature(method, "ctx", "input")
            .returns(format!(
                "impl Future<Output = Result<{}, Error>> + Send",
                output(method)
            ))
            .declaration();
        if !method.description.is_empty() {
            f = f.doc(format!("{} {}", name, method.description));
        }
        service = service.item(f);
    }
    service
}

/// The method's name and parameters, shared by the trait and the stub.
fn signature(method: &Method, ctx: &str, input: &str) -> Fn {
    let mut f = Fn::new(RUST_NAMING.method_name(&method.name))
        .param(Param::self_ref())
        .param(Param::new(ctx, "&RequestContext"));
    if method.has_inputs() {
        f = f.param(Param::new(input, RUST_NAMING.input_type(&method.name)));
    }
    f
}

fn output(method: &Method) -> String {
    if method.has_outputs() {
        RUST_NAMING.output_type(&method.name)
    } else {
        "()".to_string()
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

/// `"rpc", method = "add_item", "item" = ?input.item`
fn span_fields(method: &Method) -> String {
    let mut fields = vec![
        "\"rpc\"".to_string(),
        format!("method = {:?}", method.name),
    ];
    for input in &method.inputs {
        fields.push(format!(
            "{:?} = ?input.{}",
            input.name,
            RUST_NAMING.field_name(&input.name)
        ));
    }
    fields.join(", ")
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::testing::{schema_from_str, todo_schema};

    use super::*;

    #[test]
    fn test_trait_methods() {
        let code = RustServer::new().render(&todo_schema());
        assert!(code.contains("pub trait Service: Send + Sync {\n"));
        assert!(code.contains(
            "    /// add_item adds an item to the list.\n    fn add_item(&self, ctx: &RequestContext, input: AddItemInput) -> impl Future<Output = Result<(), Error>> + Send;\n"
        ));
        assert!(code.contains(
            "    fn get_items(&self, ctx: &RequestContext) -> impl Future<Output = Result<GetItemsOutput, Error>> + Send;\n"
        ));
    }

    #[test]
    fn test_dispatch_arms() {
        let code = RustServer::new().validate(true).render(&todo_schema());
        assert!(code.contains(
            "        \"add_item\" => {\n            let input: AddItemInput = match read_validated_request(&req) {\n"
        ));
        assert!(code.contains("            respond_empty(service.add_item(&ctx, input).await)\n"));
        assert!(code.contains("            respond(service.get_items(&ctx).await)\n"));
        assert!(!code.contains("tracing"));
    }

    #[test]
    fn test_tracing_span() {
        let code = RustServer::new().tracing(true).render(&todo_schema());
        assert!(code.contains("use tracing::Instrument;\n"));
        assert!(code.contains(
            "let span = tracing::info_span!(\"rpc\", method = \"remove_item\", \"id\" = ?input.id);"
        ));
        assert!(code.contains("respond(service.remove_item(&ctx, input).instrument(span).await)"));
    }

    #[test]
    fn test_no_methods() {
        let schema = schema_from_str(
            r#"{ "name": "empty", "version": "1", "description": "", "groups": [], "methods": [], "types": {} }"#,
        );
        let code = RustServer::new().render(&schema);
        assert!(code.contains("Route::Health => write_health(service.health().await),"));
        assert!(!code.contains("RequestContext"));
        assert!(!code.contains("super::types"));
    }

    #[test]
    fn test_stub_is_written_once() {
        let files = RustServer::new().generate(&todo_schema()).unwrap();
        assert_eq!(files[0].path().to_str(), Some("server.rs"));
        assert_eq!(files[1].path().to_str(), Some("service_impl.rs"));
        assert_eq!(files[1].overwrite(), rpcgen_core::Overwrite::IfMissing);

        let stub = files[1].content();
        assert!(!stub.contains("DO NOT EDIT"));
        assert!(stub.contains(
            "    async fn get_items(&self, _ctx: &RequestContext) -> Result<GetItemsOutput, Error> {\n        Err(Error::internal(\"get_items is not implemented\"))\n    }\n"
        ));
    }
}
