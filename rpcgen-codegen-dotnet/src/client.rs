//! C# client: model classes, an exception type and an `HttpClient` based
//! client class, all in one namespace.

use rpcgen_codegen::{
    Result,
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
    language::{Backend, TypeMapper},
    schema::describe::field_extra,
};
use rpcgen_core::File;
use rpcgen_ir::{Field, Method, Schema};

use crate::{
    ast::{Class, Method as CsMethod, Param, Property},
    naming::DOTNET_NAMING,
    type_mapper::DotnetTypeMapper,
};

const USINGS: &str = "\
using System;
using System.Collections.Generic;
using System.Net.Http;
using System.Net.Http.Headers;
using System.Threading.Tasks;
using Newtonsoft.Json;";

/// Request helper shared by every client method. The request content type
/// must be exactly `application/json`, with no charset.
const CALL_HELPER: &str = r#"private async Task<string> CallAsync(string method, object parameters = null)
{
    var message = new HttpRequestMessage(HttpMethod.Post, $"{_url}/{method}");
    if (!string.IsNullOrWhiteSpace(_authToken))
        message.Headers.Add("Authorization", $"Bearer {_authToken}");
    if (parameters != null)
    {
        message.Content = new StringContent(JsonConvert.SerializeObject(parameters));
        message.Content.Headers.ContentType = new MediaTypeHeaderValue("application/json");
    }

    var response = await _httpClient.SendAsync(message);
    var status = (int)response.StatusCode;
    var content = await response.Content.ReadAsStringAsync();
    if (status < 300)
        return content;

    Dictionary<string, string> body = null;
    try
    {
        body = JsonConvert.DeserializeObject<Dictionary<string, string>>(content);
    }
    catch (JsonException)
    {
    }
    if (body != null && body.TryGetValue("message", out var error))
    {
        body.TryGetValue("type", out var type);
        throw new {exception}(status, type, error);
    }
    throw new {exception}(status);
}"#;

const EXCEPTION_MEMBERS: &str = r#"/// <summary>
/// Status is the HTTP status code of the response.
/// </summary>
public int Status { get; }

/// <summary>
/// Type is the error type reported by the API, if any.
/// </summary>
public string Type { get; }

public {exception}(int status)
    : base($"{status} response")
{
    Status = status;
}

public {exception}(int status, string type, string message)
    : base($"{status} response: {type}: {message}")
{
    Status = status;
    Type = type;
}"#;

const CLIENT_HEAD: &str = r#"private readonly HttpClient _httpClient;
private readonly string _url;
private readonly string _authToken;

/// <summary>
/// Initialize with the API's base url and an optional bearer token.
/// </summary>
public {class}(HttpClient httpClient, string url, string authToken = null)
{
    _httpClient = httpClient;
    _url = url;
    _authToken = authToken;
}"#;

/// Generates `<Class>.cs`.
#[derive(Debug, Clone)]
pub struct DotnetClient {
    namespace: String,
    class_name: String,
}

impl DotnetClient {
    /// A client class named `Client` in `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: "Client".to_string(),
        }
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    fn exception_name(&self) -> String {
        format!("{}Exception", self.class_name)
    }

    pub fn render(&self, schema: &Schema) -> Result<String> {
        let mut members: Vec<Vec<CodeFragment>> = Vec::new();

        for ty in schema.types.values() {
            let name = DOTNET_NAMING.type_name(&ty.name);
            let doc = (!ty.description.is_empty()).then(|| format!("{} {}", name, ty.description));
            members.push(model(schema, &name, doc, &ty.properties)?.to_fragments());
        }
        for method in &schema.methods {
            if method.has_inputs() {
                let name = DOTNET_NAMING.input_type(&method.name);
                let doc = Some(format!("{} params.", name));
                members.push(model(schema, &name, doc, &method.inputs)?.to_fragments());
            }
            if method.has_outputs() {
                let name = DOTNET_NAMING.output_type(&method.name);
                let doc = Some(format!("{} params.", name));
                members.push(model(schema, &name, doc, &method.outputs)?.to_fragments());
            }
        }
        members.push(self.exception().to_fragments());
        members.push(self.client(schema).to_fragments());

        let mut body = Vec::new();
        for (i, member) in members.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(member);
        }

        let mut builder = CodeBuilder::new(Indent::Spaces(4));
        builder
            .push_comment("Code generated by rpcgen. DO NOT EDIT.")
            .push_blank()
            .push_lines(USINGS)
            .push_blank()
            .push_line(&format!("namespace {}", self.namespace));
        builder.apply_fragment(CodeFragment::block("{", body, "}"));
        Ok(builder.build())
    }

    fn exception(&self) -> Class {
        let exception = self.exception_name();
        Class::new(&exception)
            .doc(format!("{} is an error returned by the API.", exception))
            .extends("Exception")
            .raw(&EXCEPTION_MEMBERS.replace("{exception}", &exception))
    }

    fn client(&self, schema: &Schema) -> Class {
        let mut class = Class::new(&self.class_name)
            .doc(format!("{} is the {} API client.", self.class_name, schema.name))
            .raw(&CLIENT_HEAD.replace("{class}", &self.class_name));
        for method in &schema.methods {
            class = class.member(&method_fn(method));
        }
        class.raw(&CALL_HELPER.replace("{exception}", &self.exception_name()))
    }
}

fn model(schema: &Schema, name: &str, doc: Option<String>, fields: &[Field]) -> Result<Class> {
    let mapper = DotnetTypeMapper;
    let mut class = Class::new(name);
    if let Some(doc) = doc {
        class = class.doc(doc);
    }

    for field in fields {
        let prop = DOTNET_NAMING.field_name(&field.name);
        let doc = if field.description.is_empty() {
            field_extra(field).trim_start().to_string()
        } else {
            format!("{} is {}{}", prop, field.description, field_extra(field))
        };
        let mut property = Property::new(&prop, &field.name, mapper.field(schema, field)?);
        if !doc.is_empty() {
            property = property.doc(doc);
        }
        class = class.member(&property);
    }

    Ok(class)
}

fn method_fn(method: &Method) -> CsMethod {
    let name = DOTNET_NAMING.method_name(&method.name);
    let mut func = CsMethod::new(&name).async_();
    if !method.description.is_empty() {
        func = func.doc(format!("{} {}", name, method.description));
    }

    let call = if method.has_inputs() {
        func = func.param(Param::new("input", DOTNET_NAMING.input_type(&method.name)));
        format!("CallAsync(\"{}\", input)", method.name)
    } else {
        format!("CallAsync(\"{}\")", method.name)
    };

    if method.has_outputs() {
        let output = DOTNET_NAMING.output_type(&method.name);
        func.returns(format!("Task<{}>", output))
            .body_line(format!("var res = await {};", call))
            .body_line(format!("return JsonConvert.DeserializeObject<{}>(res);", output))
    } else {
        func.returns("Task").body_line(format!("await {};", call))
    }
}

impl Backend for DotnetClient {
    fn name(&self) -> &'static str {
        "dotnet-client"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new(
            format!("{}.cs", self.class_name),
            self.render(schema)?,
        )])
    }
}
