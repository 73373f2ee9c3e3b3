//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with a
//! generated-code banner, organized imports and body content.

use rpcgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Organizes code into a banner, imports and body. Body elements are
/// separated by one blank line.
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("./types").named("Item").type_only())
///     .add(&interface)
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: &impl Renderable) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.push_comment("Code generated by rpcgen. DO NOT EDIT.");

        if !self.imports.is_empty() {
            builder.push_blank();
            for import in &self.imports {
                builder.emit(import);
            }
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Useful for adding raw code strings to CodeFile body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.lines().map(CodeFragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_only() {
        assert_eq!(
            CodeFile::new().render(),
            "// Code generated by rpcgen. DO NOT EDIT.\n"
        );
    }

    #[test]
    fn test_full_file() {
        let code = CodeFile::new()
            .import(Import::new("./types").named("Item").type_only())
            .add(&RawCode::new("const a = 1;"))
            .add(&RawCode::new("const b = 2;"))
            .render();

        assert_eq!(
            code,
            "// Code generated by rpcgen. DO NOT EDIT.\n\n\
             import type { Item } from \"./types\";\n\n\
             const a = 1;\n\n\
             const b = 2;\n"
        );
    }
}
