//! TypeScript type mapper implementation.

use rpcgen_codegen::language::{Position, TypeMapper};
use rpcgen_ir::{Kind, Type};

use crate::naming::TYPESCRIPT_NAMING;

/// TypeScript type mapper implementation.
///
/// Timestamps are `Date`; the generated client revives the timestamp fields
/// of each response after parsing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn backend(&self) -> &'static str {
        "typescript"
    }

    fn primitive(&self, kind: Kind) -> Option<String> {
        let ty = match kind {
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Integer | Kind::Float => "number",
            Kind::Object => "Record<string, unknown>",
            Kind::Timestamp => "Date",
            Kind::Array => "unknown[]",
        };
        Some(ty.to_string())
    }

    fn reference(&self, ty: &Type, _position: Position) -> String {
        TYPESCRIPT_NAMING.type_name(&ty.name)
    }

    fn array(&self, element: &str) -> String {
        format!("{}[]", element)
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::testing::todo_schema;

    use super::*;

    #[test]
    fn test_ts_primitives() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.primitive(Kind::Integer).as_deref(), Some("number"));
        assert_eq!(mapper.primitive(Kind::Float).as_deref(), Some("number"));
        assert_eq!(mapper.primitive(Kind::Boolean).as_deref(), Some("boolean"));
        assert_eq!(mapper.primitive(Kind::Timestamp).as_deref(), Some("Date"));
    }

    #[test]
    fn test_ts_references() {
        let schema = todo_schema();
        let mapper = TypeScriptTypeMapper;

        assert_eq!(
            mapper.field(&schema, &schema.methods[1].outputs[0]).unwrap(),
            "Item[]"
        );
        assert_eq!(
            mapper.field(&schema, &schema.methods[2].outputs[0]).unwrap(),
            "Item"
        );
    }
}
