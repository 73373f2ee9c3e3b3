//! Go HTTP client: a `Client` with one method per schema method.

use rpcgen_codegen::{Result, language::Backend};
use rpcgen_core::File;
use rpcgen_ir::{Method, Schema};

use crate::{
    ast::{Field, Func, GoFile, Imports, Struct},
    naming::GO_NAMING,
};

/// Error type and request helper shared by every client method.
const CALL_HELPER: &str = "\
// Error is an error returned by the client.
type Error struct {
\tStatus     string
\tStatusCode int
\tType       string
\tMessage    string
}

// Error implementation.
func (e Error) Error() string {
\tif e.Type == \"\" {
\t\treturn fmt.Sprintf(\"%s: %d\", e.Status, e.StatusCode)
\t}
\treturn fmt.Sprintf(\"%s: %s\", e.Type, e.Message)
}

// call POSTs in to endpoint/method and decodes the response into out.
func call(client *http.Client, authToken, endpoint, method string, in, out any) error {
\tvar body io.Reader

\tif client == nil {
\t\tclient = http.DefaultClient
\t}

\tif in != nil {
\t\tvar buf bytes.Buffer
\t\tif err := json.NewEncoder(&buf).Encode(in); err != nil {
\t\t\treturn fmt.Errorf(\"encoding: %w\", err)
\t\t}
\t\tbody = &buf
\t}

\treq, err := http.NewRequest(\"POST\", endpoint+\"/\"+method, body)
\tif err != nil {
\t\treturn err
\t}
\treq.Header.Set(\"Content-Type\", \"application/json\")

\tif authToken != \"\" {
\t\treq.Header.Set(\"Authorization\", \"Bearer \"+authToken)
\t}

\tres, err := client.Do(req)
\tif err != nil {
\t\treturn err
\t}
\tdefer res.Body.Close()

\tif res.StatusCode >= 300 {
\t\tvar e Error
\t\tif res.Header.Get(\"Content-Type\") == \"application/json\" {
\t\t\tif err := json.NewDecoder(res.Body).Decode(&e); err != nil {
\t\t\t\treturn err
\t\t\t}
\t\t}
\t\te.Status = http.StatusText(res.StatusCode)
\t\te.StatusCode = res.StatusCode
\t\treturn e
\t}

\tif out != nil {
\t\tif err := json.NewDecoder(res.Body).Decode(out); err != nil {
\t\t\treturn err
\t\t}
\t}

\treturn nil
}";

/// Generates `client.go`.
#[derive(Debug, Clone)]
pub struct GoClient {
    package: String,
}

impl GoClient {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    pub fn render(&self, schema: &Schema) -> String {
        let mut imports = Imports::new();
        imports
            .add("bytes")
            .add("encoding/json")
            .add("fmt")
            .add("io")
            .add("net/http");

        let client = Struct::new("Client")
            .doc("Client is the API client.")
            .field(
                Field::new("URL", "string").doc("URL is the required API endpoint address."),
            )
            .field(
                Field::new("AuthToken", "string")
                    .doc("AuthToken is an optional authentication token."),
            )
            .field(Field::new("HTTPClient", "*http.Client").doc(
                "HTTPClient is the client used for making requests, defaulting to http.DefaultClient.",
            ));

        let mut file = GoFile::new(&self.package).imports(imports).decl(&client);
        for method in &schema.methods {
            file = file.decl(&method_func(method));
        }
        file.raw(CALL_HELPER).render()
    }
}

fn method_func(method: &Method) -> Func {
    let name = GO_NAMING.method_name(&method.name);
    let doc = format!("{} {}", name, method.description);
    let mut func = Func::new(&name).doc(doc.trim_end()).receiver("c *Client");

    let input = if method.has_inputs() {
        func = func.param(format!("in {}", GO_NAMING.input_type(&method.name)));
        "in"
    } else {
        "nil"
    };

    let call = |out: &str| {
        format!(
            "call(c.HTTPClient, c.AuthToken, c.URL, \"{}\", {}, {})",
            method.name, input, out
        )
    };

    if method.has_outputs() {
        func.returns(format!("(*{}, error)", GO_NAMING.output_type(&method.name)))
            .body_line(format!("var out {}", GO_NAMING.output_type(&method.name)))
            .body_line(format!("if err := {}; err != nil {{", call("&out")))
            .body_line("\treturn nil, err")
            .body_line("}")
            .body_line("return &out, nil")
    } else {
        func.returns("error").body_line(format!("return {}", call("nil")))
    }
}

impl Backend for GoClient {
    fn name(&self) -> &'static str {
        "go-client"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new("client.go", self.render(schema))])
    }
}
