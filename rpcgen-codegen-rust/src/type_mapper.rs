//! Rust type mapper implementation.

use rpcgen_codegen::language::{Position, TypeMapper};
use rpcgen_ir::{Kind, Type};

use crate::naming::RUST_NAMING;

/// Rust type mapper.
///
/// Reference fields are `Option<Box<T>>`, so an unset reference is `None`
/// and a type may contain itself. Timestamps are optional for the same
/// reason. Array elements are plain values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn backend(&self) -> &'static str {
        "rust"
    }

    fn primitive(&self, kind: Kind) -> Option<String> {
        let ty = match kind {
            Kind::String => "String",
            Kind::Boolean => "bool",
            Kind::Integer => "i64",
            Kind::Float => "f64",
            Kind::Object => "serde_json::Map<String, serde_json::Value>",
            Kind::Timestamp => "Option<chrono::DateTime<chrono::Utc>>",
            Kind::Array => "Vec<serde_json::Value>",
        };
        Some(ty.to_string())
    }

    fn reference(&self, ty: &Type, position: Position) -> String {
        match position {
            Position::Field => format!("Option<Box<{}>>", RUST_NAMING.type_name(&ty.name)),
            Position::Element => RUST_NAMING.type_name(&ty.name),
        }
    }

    fn array(&self, element: &str) -> String {
        format!("Vec<{}>", element)
    }
}
