//! C# naming conventions.

use rpcgen_codegen::language::{Case, NamingConvention};
use rpcgen_core::Naming;

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
///
/// Classes, properties and methods are PascalCase with known acronyms fully
/// capitalized (`user_id` -> `UserID`). Properties carry their wire name in
/// a `[JsonProperty]` attribute.
pub const DOTNET_NAMING: NamingConvention = NamingConvention {
    naming: Naming::DEFAULT,
    type_case: Case::Exported,
    field_case: Case::Exported,
    method_case: Case::Exported,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
        "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort",
        "using", "virtual", "void", "volatile", "while",
    ],
    escape_reserved: escape_csharp_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotnet_naming() {
        assert_eq!(DOTNET_NAMING.type_name("item"), "Item");
        assert_eq!(DOTNET_NAMING.field_name("created_at"), "CreatedAt");
        assert_eq!(DOTNET_NAMING.field_name("user_id"), "UserID");
        assert_eq!(DOTNET_NAMING.method_name("add_item"), "AddItem");
        assert_eq!(DOTNET_NAMING.output_type("get_items"), "GetItemsOutput");
    }

    #[test]
    fn test_reserved_members_are_escaped() {
        assert_eq!(DOTNET_NAMING.member_name("params"), "@params");
        assert_eq!(DOTNET_NAMING.member_name("item"), "item");
    }
}
