//! Go struct definitions for schema types and method parameters.

use rpcgen_codegen::{
    Result,
    language::{Backend, TypeMapper},
    schema::{checks, describe::field_extra},
};
use rpcgen_core::File;
use rpcgen_ir::{Field, Kind, Schema};

use crate::{
    DEFAULT_RUNTIME,
    ast::{Field as GoField, GoFile, Imports, Struct},
    naming::{GO_NAMING, package_qualifier},
    type_mapper::GoTypeMapper,
    validate::{ONE_OF_HELPER, ValidateWriter},
};

/// Generates `types.go`: one struct per type, plus `{Method}Input` and
/// `{Method}Output` structs, with optional `Validate` methods.
#[derive(Debug, Clone)]
pub struct GoTypes {
    package: String,
    validate: bool,
    runtime: String,
}

impl GoTypes {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            validate: false,
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }

    /// Emit `Validate() error` methods.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Import path of the runtime package providing `ValidationError`.
    pub fn runtime(mut self, import_path: impl Into<String>) -> Self {
        self.runtime = import_path.into();
        self
    }

    /// Render the file content.
    pub fn render(&self, schema: &Schema) -> Result<String> {
        let mut validator = ValidateWriter::new(package_qualifier(&self.runtime));
        let mut file = GoFile::new(&self.package);

        for ty in schema.types.values() {
            let name = GO_NAMING.type_name(&ty.name);
            let doc = if ty.description.is_empty() {
                String::new()
            } else {
                format!("{} {}", name, ty.description)
            };
            file = file.decl(&self.structure(schema, &name, &doc, &ty.properties)?);
            if self.validate {
                let checks = checks(schema, &ty.properties)?;
                file = file.decl(&validator.method(&name, &checks));
            }
        }

        for method in &schema.methods {
            if method.has_inputs() {
                let name = GO_NAMING.input_type(&method.name);
                let doc = format!("{} params.", name);
                file = file.decl(&self.structure(schema, &name, &doc, &method.inputs)?);
                if self.validate {
                    let checks = checks(schema, &method.inputs)?;
                    file = file.decl(&validator.method(&name, &checks));
                }
            }
            if method.has_outputs() {
                let name = GO_NAMING.output_type(&method.name);
                let doc = format!("{} params.", name);
                file = file.decl(&self.structure(schema, &name, &doc, &method.outputs)?);
            }
        }

        let needs = validator.needs();
        if needs.one_of {
            file = file.raw(ONE_OF_HELPER);
        }

        let mut imports = Imports::new();
        imports
            .add_if(uses_time(schema), "time")
            .add_if(needs.fmt, "fmt")
            .add_if(needs.runtime, self.runtime.as_str());

        Ok(file.imports(imports).render())
    }

    fn structure(
        &self,
        schema: &Schema,
        name: &str,
        doc: &str,
        fields: &[Field],
    ) -> Result<Struct> {
        let mapper = GoTypeMapper;
        let mut structure = Struct::new(name);
        if !doc.is_empty() {
            structure = structure.doc(doc);
        }
        for field in fields {
            let go_name = GO_NAMING.field_name(&field.name);
            let doc = if field.description.is_empty() {
                field_extra(field).trim_start().to_string()
            } else {
                format!("{} is {}{}", go_name, field.description, field_extra(field))
            };
            let mut go_field = GoField::new(&go_name, mapper.field(schema, field)?)
                .tag(tags(schema, field));
            if !doc.is_empty() {
                go_field = go_field.doc(doc);
            }
            structure = structure.field(go_field);
        }
        Ok(structure)
    }
}

impl Backend for GoTypes {
    fn name(&self) -> &'static str {
        "go-types"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new("types.go", self.render(schema)?)])
    }
}

/// `json:"name"` for every tag configured in the schema's `go` options.
fn tags(schema: &Schema, field: &Field) -> String {
    schema
        .go
        .tags
        .iter()
        .map(|tag| format!("{}:\"{}\"", tag, field.name))
        .collect::<Vec<_>>()
        .join(" ")
}

fn uses_time(schema: &Schema) -> bool {
    schema.fields().iter().any(|(_, field)| {
        field.ty.is_kind(Kind::Timestamp)
            || field
                .item_type()
                .is_some_and(|item| item.is_kind(Kind::Timestamp))
    })
}
