//! Go type mapper implementation.

use rpcgen_codegen::language::{Position, TypeMapper};
use rpcgen_ir::{Kind, Type};

use crate::naming::GO_NAMING;

/// Go type mapper.
///
/// Reference fields are pointers, so a type may contain itself and a
/// required reference can be checked against `nil`. Array elements are
/// values.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn backend(&self) -> &'static str {
        "go"
    }

    fn primitive(&self, kind: Kind) -> Option<String> {
        let ty = match kind {
            Kind::String => "string",
            Kind::Boolean => "bool",
            Kind::Integer => "int",
            Kind::Float => "float64",
            Kind::Object => "map[string]any",
            Kind::Timestamp => "time.Time",
            Kind::Array => "[]any",
        };
        Some(ty.to_string())
    }

    fn reference(&self, ty: &Type, position: Position) -> String {
        match position {
            Position::Field => format!("*{}", GO_NAMING.type_name(&ty.name)),
            Position::Element => GO_NAMING.type_name(&ty.name),
        }
    }

    fn array(&self, element: &str) -> String {
        format!("[]{}", element)
    }
}
