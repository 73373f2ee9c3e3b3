//! Go-specific naming conventions.

use rpcgen_codegen::language::{Case, NamingConvention};
use rpcgen_core::Naming;

fn escape_go_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// Go naming conventions.
///
/// Types, fields and methods are exported, with known acronyms fully
/// capitalized (`user_id` -> `UserID`).
pub const GO_NAMING: NamingConvention = NamingConvention {
    naming: Naming::DEFAULT,
    type_case: Case::Exported,
    field_case: Case::Exported,
    method_case: Case::Exported,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_go_reserved,
};

/// The package qualifier of an import path: its last segment.
pub fn package_qualifier(import_path: &str) -> &str {
    import_path.rsplit('/').next().unwrap_or(import_path)
}
