//! TypeScript interfaces for schema types and method parameters.

use rpcgen_codegen::{
    Result,
    language::{Backend, TypeMapper},
    schema::describe::field_extra,
};
use rpcgen_core::File;
use rpcgen_ir::{Field, Schema};

use crate::{
    ast::{Interface, InterfaceField},
    code_file::CodeFile,
    naming::TYPESCRIPT_NAMING,
    type_mapper::TypeScriptTypeMapper,
};

/// Generates `types.ts`: an exported interface per type, plus
/// `{Method}Input` and `{Method}Output` interfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsTypes;

impl TsTypes {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, schema: &Schema) -> Result<String> {
        let mut file = CodeFile::new();

        for ty in schema.types.values() {
            let name = TYPESCRIPT_NAMING.type_name(&ty.name);
            let doc = (!ty.description.is_empty()).then(|| format!("{} {}", name, ty.description));
            file = file.add(&interface(schema, &name, doc, &ty.properties)?);
        }

        for method in &schema.methods {
            if method.has_inputs() {
                let name = TYPESCRIPT_NAMING.input_type(&method.name);
                let doc = Some(format!("{} params.", name));
                file = file.add(&interface(schema, &name, doc, &method.inputs)?);
            }
            if method.has_outputs() {
                let name = TYPESCRIPT_NAMING.output_type(&method.name);
                let doc = Some(format!("{} params.", name));
                file = file.add(&interface(schema, &name, doc, &method.outputs)?);
            }
        }

        Ok(file.render())
    }
}

fn interface(
    schema: &Schema,
    name: &str,
    doc: Option<String>,
    fields: &[Field],
) -> Result<Interface> {
    let mapper = TypeScriptTypeMapper;
    let mut interface = Interface::new(name);
    if let Some(doc) = doc {
        interface = interface.doc(doc);
    }

    for field in fields {
        let key = TYPESCRIPT_NAMING.field_name(&field.name);
        let doc = if field.description.is_empty() {
            field_extra(field).trim_start().to_string()
        } else {
            format!("{} is {}{}", key, field.description, field_extra(field))
        };
        let mut member = InterfaceField::new(&key, mapper.field(schema, field)?)
            .optional(!field.required);
        if !doc.is_empty() {
            member = member.doc(doc);
        }
        interface = interface.field(member);
    }

    Ok(interface)
}

impl Backend for TsTypes {
    fn name(&self) -> &'static str {
        "ts-types"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        Ok(vec![File::new("types.ts", self.render(schema)?)])
    }
}
