//! C# AST builders for model classes, properties and methods.
//!
//! Blocks use C#'s own-line braces. Render them via CodeBuilder.

mod class;
mod doc;
mod method;

pub use class::{Class, Property};
pub use doc::{summary, xml_escape};
pub use method::{Method, Param};

use rpcgen_codegen::builder::CodeFragment;

/// A header line followed by a braced, indented body.
fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Vec<CodeFragment> {
    vec![
        CodeFragment::line(header),
        CodeFragment::block("{", body, "}"),
    ]
}
