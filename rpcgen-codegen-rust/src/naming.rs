//! Rust-specific naming conventions.

use rpcgen_codegen::language::{Case, NamingConvention};
use rpcgen_core::Naming;

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

/// Rust naming conventions.
///
/// Types are upper camel without acronym capitalization (`UserId`), fields
/// and methods are snake case.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    naming: Naming::PLAIN,
    type_case: Case::Exported,
    field_case: Case::Snake,
    method_case: Case::Snake,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};
