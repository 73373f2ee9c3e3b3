//! TypeScript client: a `Client` class with one async method per schema method.

use std::collections::BTreeSet;

use rpcgen_codegen::{Result, builder::CodeBuilder, language::Backend};
use rpcgen_core::File;
use rpcgen_ir::{Field, FieldType, Kind, Method, Schema};

use crate::{
    ast::{Fn, Import, Param},
    code_file::{CodeFile, RawCode},
    naming::{TYPESCRIPT_NAMING, property_key},
};

const CLIENT_ERROR: &str = r#"/**
 * ClientError is an error returned by the API.
 */
export class ClientError extends Error {
  readonly status: number;
  readonly type?: string;

  constructor(status: number, message: string, type?: string) {
    super(message);
    this.name = "ClientError";
    this.status = status;
    this.type = type;
  }
}"#;

const CALL_HELPER: &str = r#"/**
 * Call method with params via a POST request.
 */
async function call(url: string, authToken: string | undefined, method: string, params?: unknown): Promise<string> {
  const headers: Record<string, string> = { "Content-Type": "application/json" };
  if (authToken) {
    headers["Authorization"] = `Bearer ${authToken}`;
  }

  const res = await fetch(`${url}/${method}`, {
    method: "POST",
    body: params === undefined ? undefined : JSON.stringify(params),
    headers,
  });

  // prefer the well-formed JSON error, fall back to the status line
  if (res.status >= 300) {
    let body: { type?: string; message?: string } | undefined;
    try {
      body = await res.json();
    } catch {
      body = undefined;
    }
    if (body?.message) {
      throw new ClientError(res.status, body.message, body.type);
    }
    throw new ClientError(res.status, `${res.status} ${res.statusText}`);
  }

  return res.text();
}"#;

const CLIENT_HEAD: &str = r#"private url: string;
private authToken?: string;

/**
 * Initialize.
 */
constructor(params: { url: string; authToken?: string }) {
  this.url = params.url;
  this.authToken = params.authToken;
}"#;

/// Generates `client.ts`.
#[derive(Debug, Clone)]
pub struct TsClient {
    types_import: String,
}

impl TsClient {
    /// `types_import` is the module specifier of the generated types,
    /// e.g. `./types`.
    pub fn new(types_import: impl Into<String>) -> Self {
        Self {
            types_import: types_import.into(),
        }
    }

    pub fn render(&self, schema: &Schema) -> String {
        let dated = Timestamps::find(schema);

        let mut used = BTreeSet::new();
        for method in &schema.methods {
            if method.has_inputs() {
                used.insert(TYPESCRIPT_NAMING.input_type(&method.name));
            }
            if method.has_outputs() {
                used.insert(TYPESCRIPT_NAMING.output_type(&method.name));
            }
        }
        for name in &dated.types {
            used.insert(TYPESCRIPT_NAMING.type_name(name));
        }

        let mut file = CodeFile::new();
        if !used.is_empty() {
            let import = used
                .into_iter()
                .fold(Import::new(&self.types_import).type_only(), Import::named);
            file = file.import(import);
        }

        file = file
            .add(&RawCode::new(CLIENT_ERROR))
            .add(&RawCode::new(CALL_HELPER));
        for reviver in dated.revivers(schema) {
            file = file.add(&reviver);
        }
        file.add(&client_class(schema, &dated)).render()
    }
}

/// Type names whose values hold timestamps, directly or through references
/// and arrays. Only these get revivers, so strings stay strings.
struct Timestamps<'a> {
    types: BTreeSet<&'a str>,
}

impl<'a> Timestamps<'a> {
    fn find(schema: &'a Schema) -> Self {
        let mut dated = Self {
            types: BTreeSet::new(),
        };
        loop {
            let found: Vec<&'a str> = schema
                .types
                .values()
                .filter(|ty| !dated.types.contains(ty.name.as_str()))
                .filter(|ty| ty.properties.iter().any(|f| dated.holds(f)))
                .map(|ty| ty.name.as_str())
                .collect();
            if found.is_empty() {
                return dated;
            }
            dated.types.extend(found);
        }
    }

    fn holds(&self, field: &Field) -> bool {
        match element(field) {
            FieldType::Primitive(kind) => *kind == Kind::Timestamp,
            FieldType::Reference(reference) => self.types.contains(reference.name()),
        }
    }

    /// Whether a method's output has to be revived after parsing.
    fn method(&self, method: &Method) -> bool {
        method.outputs.iter().any(|f| self.holds(f))
    }

    fn revivers(&self, schema: &Schema) -> Vec<Fn> {
        let types = schema
            .types
            .values()
            .filter(|ty| self.types.contains(ty.name.as_str()))
            .map(|ty| self.reviver(&TYPESCRIPT_NAMING.type_name(&ty.name), &ty.properties));
        let outputs = schema
            .methods
            .iter()
            .filter(|m| self.method(m))
            .map(|m| self.reviver(&TYPESCRIPT_NAMING.output_type(&m.name), &m.outputs));
        types.chain(outputs).collect()
    }

    /// `revive<Name>(value)`, turning the timestamp strings of a parsed
    /// value into dates in place.
    fn reviver(&self, name: &str, fields: &[Field]) -> Fn {
        let mut func = Fn::new(format!("revive{}", name))
            .doc(format!("revive{0} turns the timestamps of a parsed {0} into dates.", name))
            .param(Param::new("value", name))
            .returns("void");
        for field in fields.iter().filter(|f| self.holds(f)) {
            let key = member(&TYPESCRIPT_NAMING.field_name(&field.name));
            let line = match (element(field), field.is_array()) {
                (FieldType::Primitive(_), false) => {
                    format!("value{key} = new Date(value{key});", key = key)
                }
                (FieldType::Primitive(_), true) => {
                    format!("value{key} = value{key}.map((v) => new Date(v));", key = key)
                }
                (FieldType::Reference(reference), false) => format!(
                    "revive{}(value{});",
                    TYPESCRIPT_NAMING.type_name(reference.name()),
                    key
                ),
                (FieldType::Reference(reference), true) => format!(
                    "value{}.forEach((v) => revive{}(v));",
                    key,
                    TYPESCRIPT_NAMING.type_name(reference.name())
                ),
            };
            func = func.body_line(format!("if (value{} != null) {}", key, line));
        }
        func
    }
}

/// The element type of an array field, or the field's own type.
fn element(field: &Field) -> &FieldType {
    match field.item_type() {
        Some(ty) if field.is_array() => ty,
        _ => &field.ty,
    }
}

/// Property access on `value` for a member key.
fn member(key: &str) -> String {
    let key = property_key(key);
    if key.starts_with('"') {
        format!("[{}]", key)
    } else {
        format!(".{}", key)
    }
}

fn client_class(schema: &Schema, dated: &Timestamps) -> RawCode {
    let mut builder = CodeBuilder::typescript();
    builder.push_jsdoc("Client is the API client.");
    builder.push_line("export class Client {");
    builder.push_indent();
    builder.push_lines(CLIENT_HEAD);
    for method in &schema.methods {
        builder.push_blank();
        builder.emit(&method_fn(method, dated.method(method)));
    }
    builder.push_dedent();
    builder.push_line("}");
    RawCode::new(builder.build())
}

fn method_fn(method: &Method, revive: bool) -> Fn {
    let name = TYPESCRIPT_NAMING.method_name(&method.name);
    let doc = format!("{} {}", name, method.description);
    let mut func = Fn::method(&name).doc(doc.trim_end()).async_();

    let call = if method.has_inputs() {
        func = func.param(Param::new(
            "params",
            TYPESCRIPT_NAMING.input_type(&method.name),
        ));
        format!("call(this.url, this.authToken, \"{}\", params)", method.name)
    } else {
        format!("call(this.url, this.authToken, \"{}\")", method.name)
    };

    if method.has_outputs() {
        let output = TYPESCRIPT_NAMING.output_type(&method.name);
        let func = func
            .returns(format!("Promise<{}>", output))
            .body_line(format!("const res = await {};", call));
        if revive {
            func.body_line(format!("const out: {} = JSON.parse(res);", output))
                .body_line(format!("revive{}(out);", output))
                .body_line("return out;")
        } else {
            func.body_line("return JSON.parse(res);")
        }
    } else {
        func.returns("Promise<void>")
            .body_line(format!("await {};", call))
    }
}

impl Backend for TsClient {
    fn name(&self) -> &'static str {
        "ts-client"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new("client.ts", self.render(schema))])
    }
}
