//! Serde structs for schema types and method parameters.

use rpcgen_codegen::{
    Result,
    language::{Backend, TypeMapper},
    schema::{checks, describe::field_extra},
};
use rpcgen_core::File;
use rpcgen_ir::{Field, Schema};

use crate::{
    ast::{Field as RustField, Struct},
    naming::RUST_NAMING,
    rust_file::{RustFile, Uses},
    type_mapper::RustTypeMapper,
    validate::validate_impl,
};

/// Derives shared by every generated struct.
const DERIVES: &[&str] = &[
    "Debug",
    "Clone",
    "Default",
    "PartialEq",
    "Serialize",
    "Deserialize",
];

/// Generates `types.rs`: one struct per type, plus `{Method}Input` and
/// `{Method}Output` structs, with optional `Validate` implementations for
/// types and inputs.
#[derive(Debug, Clone, Default)]
pub struct RustTypes {
    validate: bool,
}

impl RustTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `rpcgen_runtime::Validate` implementations.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Render the file content.
    pub fn render(&self, schema: &Schema) -> Result<String> {
        let mut file = RustFile::new();

        for ty in schema.types.values() {
            let name = RUST_NAMING.type_name(&ty.name);
            let doc = if ty.description.is_empty() {
                String::new()
            } else {
                format!("{} {}", name, ty.description)
            };
            file = file.add(&structure(schema, &name, &doc, &ty.properties)?);
            if self.validate {
                file = file.add(&validate_impl(&name, &checks(schema, &ty.properties)?));
            }
        }

        for method in &schema.methods {
            if method.has_inputs() {
                let name = RUST_NAMING.input_type(&method.name);
                let doc = format!("{} params.", name);
                file = file.add(&structure(schema, &name, &doc, &method.inputs)?);
                if self.validate {
                    file = file.add(&validate_impl(&name, &checks(schema, &method.inputs)?));
                }
            }
            if method.has_outputs() {
                let name = RUST_NAMING.output_type(&method.name);
                let doc = format!("{} params.", name);
                file = file.add(&structure(schema, &name, &doc, &method.outputs)?);
            }
        }

        let mut uses = Uses::new();
        uses.add_all("serde", ["Deserialize", "Serialize"]);
        if self.validate && (!schema.types.is_empty() || schema.methods.iter().any(|m| m.has_inputs())) {
            uses.add_all("rpcgen_runtime", ["Validate", "ValidationError"]);
        }

        Ok(file.uses(uses).render())
    }
}

impl Backend for RustTypes {
    fn name(&self) -> &'static str {
        "rust-types"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new("types.rs", self.render(schema)?)])
    }
}

fn structure(schema: &Schema, name: &str, doc: &str, fields: &[Field]) -> Result<Struct> {
    let mapper = RustTypeMapper;
    let mut structure = Struct::new(name);
    if !doc.is_empty() {
        structure = structure.doc(doc);
    }
    for derive in DERIVES {
        structure = structure.derive(*derive);
    }
    structure = structure.attr("serde(default)");

    for field in fields {
        let ident = RUST_NAMING.field_name(&field.name);
        let ty = mapper.field(schema, field)?;
        let mut rust_field = RustField::new(&ident, &ty);

        let doc = if field.description.is_empty() {
            field_extra(field).trim_start().to_string()
        } else {
            format!("{} is {}{}", field.name, field.description, field_extra(field))
        };
        if !doc.is_empty() {
            rust_field = rust_field.doc(doc);
        }
        // serde strips the raw identifier prefix on its own.
        if ident.trim_start_matches("r#") != field.name {
            rust_field = rust_field.attr(format!("serde(rename = {:?})", field.name));
        }
        if ty.starts_with("Option<") {
            rust_field = rust_field.attr("serde(skip_serializing_if = \"Option::is_none\")");
        }
        structure = structure.field(rust_field);
    }
    Ok(structure)
}
