//! Go HTTP server: a `ServeHTTP` router plus one wrapper per method.
//!
//! The implementer defines the `Server` type and one exported method per
//! schema method; the generated code decodes, validates and dispatches.

use rpcgen_codegen::{Result, builder::CodeFragment, language::Backend};
use rpcgen_core::File;
use rpcgen_ir::{Method, Schema};
use serde_json::Value;

use crate::{
    DEFAULT_RUNTIME,
    ast::{Func, GoFile, Imports},
    naming::{GO_NAMING, package_qualifier},
};

const LOG_IMPORT: &str = "github.com/apex/log";

/// Generates `server.go`.
#[derive(Debug, Clone)]
pub struct GoServer {
    package: String,
    types_package: Option<String>,
    tracing: bool,
    runtime: String,
}

impl GoServer {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            types_package: None,
            tracing: false,
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }

    /// Import path of the package holding the generated types, when they
    /// live outside the server package.
    pub fn types_package(mut self, import_path: impl Into<String>) -> Self {
        self.types_package = Some(import_path.into());
        self
    }

    /// Attach a logger carrying the method name and input fields to each call.
    pub fn tracing(mut self, tracing: bool) -> Self {
        self.tracing = tracing;
        self
    }

    pub fn runtime(mut self, import_path: impl Into<String>) -> Self {
        self.runtime = import_path.into();
        self
    }

    pub fn render(&self, schema: &Schema) -> String {
        let has_methods = !schema.methods.is_empty();
        let mut imports = Imports::new();
        imports
            .add_if(has_methods, "context")
            .add("net/http")
            .add(self.runtime.as_str())
            .add_if(self.tracing && has_methods, LOG_IMPORT);
        if let Some(types) = &self.types_package {
            imports.add_if(schema.methods.iter().any(Method::has_inputs), types.as_str());
        }

        let mut file = GoFile::new(&self.package)
            .imports(imports)
            .decl(&self.router(schema));
        for method in &schema.methods {
            file = file.decl(&self.wrapper(method));
        }
        file.render()
    }

    fn rpc(&self) -> &str {
        package_qualifier(&self.runtime)
    }

    fn input_type(&self, method: &Method) -> String {
        let name = GO_NAMING.input_type(&method.name);
        match &self.types_package {
            Some(types) => format!("{}.{}", package_qualifier(types), name),
            None => name,
        }
    }

    fn router(&self, schema: &Schema) -> Func {
        let rpc = self.rpc();
        let invalid = format!("{}.WriteError(w, {}.BadRequest(\"Invalid method\"))", rpc, rpc);

        let mut get = switch(
            "r.URL.Path",
            vec![
                CodeFragment::line("case \"/_health\":"),
                CodeFragment::Indent(vec![CodeFragment::line(format!(
                    "{}.WriteHealth(w, s)",
                    rpc
                ))]),
                CodeFragment::line("default:"),
                CodeFragment::Indent(vec![CodeFragment::line(&invalid)]),
            ],
        );
        get.push(CodeFragment::line("return"));
        let get = CodeFragment::block("if r.Method == \"GET\" {", get, "}");

        let mut cases = Vec::new();
        for method in &schema.methods {
            cases.push(CodeFragment::line(format!("case \"/{}\":", method.name)));
            let wrapper = GO_NAMING.member_name(&method.name);
            let body = if method.has_inputs() {
                vec![
                    CodeFragment::line(format!("var in {}", self.input_type(method))),
                    CodeFragment::line(format!("err = {}.ReadRequest(r, &in)", rpc)),
                    CodeFragment::block(
                        "if err != nil {",
                        vec![CodeFragment::line("break")],
                        "}",
                    ),
                    CodeFragment::line(format!("res, err = s.{}(ctx, in)", wrapper)),
                ]
            } else {
                vec![CodeFragment::line(format!("res, err = s.{}(ctx)", wrapper))]
            };
            cases.push(CodeFragment::Indent(body));
        }
        cases.push(CodeFragment::line("default:"));
        cases.push(CodeFragment::Indent(vec![CodeFragment::line(format!(
            "err = {}.BadRequest(\"Invalid method\")",
            rpc
        ))]));

        let mut post = vec![
            CodeFragment::line(format!("ctx := {}.NewRequestContext(r.Context(), r)", rpc)),
            CodeFragment::line("var res any"),
            CodeFragment::line("var err error"),
        ];
        post.extend(switch("r.URL.Path", cases));
        post.extend([
            CodeFragment::Blank,
            CodeFragment::block(
                "if err != nil {",
                vec![
                    CodeFragment::line(format!("{}.WriteError(w, err)", rpc)),
                    CodeFragment::line("return"),
                ],
                "}",
            ),
            CodeFragment::Blank,
            CodeFragment::line(format!("{}.WriteResponse(w, res)", rpc)),
            CodeFragment::line("return"),
        ]);
        let post = CodeFragment::block("if r.Method == \"POST\" {", post, "}");

        Func::new("ServeHTTP")
            .doc("ServeHTTP implementation.")
            .receiver("s *Server")
            .param("w http.ResponseWriter")
            .param("r *http.Request")
            .body([get, CodeFragment::Blank, post, CodeFragment::Blank])
            .body_line(invalid)
    }

    fn wrapper(&self, method: &Method) -> Func {
        let wrapper = GO_NAMING.member_name(&method.name);
        let exported = GO_NAMING.method_name(&method.name);
        let doc = format!("{} {}", wrapper, method.description);

        let mut func = Func::new(&wrapper)
            .doc(doc.trim_end())
            .receiver("s *Server")
            .param("ctx context.Context");
        if method.has_inputs() {
            func = func.param(format!("in {}", self.input_type(method)));
        }
        func = func.returns("(any, error)");

        let mut ctx = "ctx";
        if self.tracing {
            func = func.body_line(format!(
                "logs := log.FromContext(ctx).WithField(\"method\", {})",
                Value::String(method.name.clone())
            ));
            if method.has_inputs() {
                let fields = method
                    .inputs
                    .iter()
                    .map(|f| {
                        CodeFragment::line(format!(
                            "{}: in.{},",
                            Value::String(f.name.clone()),
                            GO_NAMING.field_name(&f.name)
                        ))
                    })
                    .collect();
                func = func.body([
                    CodeFragment::Blank,
                    CodeFragment::block("logs = logs.WithFields(log.Fields{", fields, "})"),
                ]);
            }
            func = func.body([CodeFragment::Blank]);
            ctx = "log.NewContext(ctx, logs)";
        }

        let args = if method.has_inputs() {
            format!("{}, in", ctx)
        } else {
            ctx.to_string()
        };

        if method.has_outputs() {
            func.body_line(format!("res, err := s.{}({})", exported, args))
                .body_line("return res, err")
        } else {
            func.body_line(format!("err := s.{}({})", exported, args))
                .body_line("return nil, err")
        }
    }
}

/// A gofmt-style switch: cases sit at the level of the `switch` keyword.
fn switch(subject: &str, cases: Vec<CodeFragment>) -> Vec<CodeFragment> {
    let mut out = vec![CodeFragment::line(format!("switch {} {{", subject))];
    out.extend(cases);
    out.push(CodeFragment::line("}"));
    out
}

impl Backend for GoServer {
    fn name(&self) -> &'static str {
        "go-server"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new("server.go", self.render(schema))])
    }
}
