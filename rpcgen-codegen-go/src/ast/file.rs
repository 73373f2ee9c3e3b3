//! Go source file builder.

use std::collections::BTreeSet;

use rpcgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Import paths of a Go file, grouped the way gofmt expects: standard
/// library first, then everything else.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    std: BTreeSet<String>,
    external: BTreeSet<String>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path. Paths whose first segment has no dot are treated
    /// as standard library packages.
    pub fn add(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        let first = path.split('/').next().unwrap_or_default();
        if first.contains('.') {
            self.external.insert(path);
        } else {
            self.std.insert(path);
        }
        self
    }

    /// Add an import path when `condition` holds.
    pub fn add_if(&mut self, condition: bool, path: impl Into<String>) -> &mut Self {
        if condition {
            self.add(path);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.std.is_empty() && self.external.is_empty()
    }

    fn len(&self) -> usize {
        self.std.len() + self.external.len()
    }
}

impl Renderable for Imports {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_empty() {
            return Vec::new();
        }

        if self.len() == 1 {
            let path = self.std.iter().chain(&self.external).next();
            return path
                .map(|p| vec![CodeFragment::line(format!("import \"{}\"", p))])
                .unwrap_or_default();
        }

        let mut body: Vec<CodeFragment> = self
            .std
            .iter()
            .map(|p| CodeFragment::line(format!("\"{}\"", p)))
            .collect();
        if !self.std.is_empty() && !self.external.is_empty() {
            body.push(CodeFragment::Blank);
        }
        body.extend(
            self.external
                .iter()
                .map(|p| CodeFragment::line(format!("\"{}\"", p))),
        );

        vec![CodeFragment::block("import (", body, ")")]
    }
}

/// A complete generated Go source file.
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    imports: Imports,
    decls: Vec<String>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Imports::new(),
            decls: Vec::new(),
        }
    }

    pub fn imports(mut self, imports: Imports) -> Self {
        self.imports = imports;
        self
    }

    /// Add a top-level declaration.
    pub fn decl(mut self, node: &impl Renderable) -> Self {
        self.decls.push(CodeBuilder::go().node(node).build());
        self
    }

    /// Add a top-level declaration written as raw Go source.
    pub fn raw(mut self, source: &str) -> Self {
        self.decls.push(CodeBuilder::go().lines(source).build());
        self
    }

    /// Render the file. Declarations are separated by one blank line.
    pub fn render(&self) -> String {
        let header = CodeBuilder::go()
            .comment("Code generated by rpcgen. DO NOT EDIT.")
            .blank()
            .line(&format!("package {}", self.package))
            .when(!self.imports.is_empty(), |b| b.blank().node(&self.imports))
            .build();

        let mut out = header;
        for decl in &self.decls {
            out.push('\n');
            out.push_str(decl);
        }
        out
    }
}
