//! C# type mapper implementation.

use rpcgen_codegen::language::{Position, TypeMapper};
use rpcgen_ir::{Kind, Type};

use crate::naming::DOTNET_NAMING;

/// C# type mapper.
///
/// Timestamps are `DateTime?` so an absent value stays `null`. Models are
/// classes, so references need no wrapper and may be recursive.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotnetTypeMapper;

impl TypeMapper for DotnetTypeMapper {
    fn backend(&self) -> &'static str {
        "dotnet"
    }

    fn primitive(&self, kind: Kind) -> Option<String> {
        let ty = match kind {
            Kind::String => "string",
            Kind::Boolean => "bool",
            Kind::Integer => "long",
            Kind::Float => "double",
            Kind::Object => "Dictionary<string, object>",
            Kind::Timestamp => "DateTime?",
            Kind::Array => "List<object>",
        };
        Some(ty.to_string())
    }

    fn reference(&self, ty: &Type, _position: Position) -> String {
        DOTNET_NAMING.type_name(&ty.name)
    }

    fn array(&self, element: &str) -> String {
        format!("List<{}>", element)
    }
}
