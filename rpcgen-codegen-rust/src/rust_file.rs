//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with
//! organized `use` declarations and body content.

use std::collections::{BTreeMap, BTreeSet};

use rpcgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

const GENERATED_HEADER: &str = "Code generated by rpcgen. DO NOT EDIT.";

/// `use` declarations of a Rust file, merged per module.
///
/// `std` paths come first, then external crates, then `crate`, `self` and
/// `super` paths, each group separated by a blank line and sorted.
#[derive(Debug, Clone, Default)]
pub struct Uses {
    modules: BTreeMap<String, BTreeSet<String>>,
}

impl Uses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import `symbol` from `module`.
    pub fn add(&mut self, module: impl Into<String>, symbol: impl Into<String>) -> &mut Self {
        self.modules
            .entry(module.into())
            .or_default()
            .insert(symbol.into());
        self
    }

    /// Import several symbols from `module`.
    pub fn add_all<S: Into<String>>(
        &mut self,
        module: impl Into<String>,
        symbols: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        let entry = self.modules.entry(module.into()).or_default();
        entry.extend(symbols.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.modules.values().all(BTreeSet::is_empty)
    }

    fn statement(module: &str, symbols: &BTreeSet<String>) -> String {
        let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
        match symbols.as_slice() {
            [one] => format!("use {}::{};", module, one),
            many => format!("use {}::{{{}}};", module, many.join(", ")),
        }
    }
}

fn group(module: &str) -> u8 {
    let root = module.split("::").next().unwrap_or_default();
    match root {
        "std" | "core" | "alloc" => 0,
        "crate" | "self" | "super" => 2,
        _ => 1,
    }
}

impl Renderable for Uses {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        let mut previous = None;
        let mut modules: Vec<_> = self
            .modules
            .iter()
            .filter(|(_, symbols)| !symbols.is_empty())
            .collect();
        modules.sort_by_key(|(module, _)| group(module));

        for (module, symbols) in modules {
            let current = group(module);
            if previous.is_some_and(|p| p != current) {
                fragments.push(CodeFragment::Blank);
            }
            previous = Some(current);
            fragments.push(CodeFragment::line(Self::statement(module, symbols)));
        }
        fragments
    }
}

/// A complete generated Rust source file.
///
/// # Example
///
/// ```
/// use rpcgen_codegen_rust::{RustFile, Uses};
///
/// let mut uses = Uses::new();
/// uses.add("serde", "Serialize");
///
/// let code = RustFile::new().uses(uses).raw("pub struct Empty {}").render();
/// assert!(code.contains("use serde::Serialize;\n\npub struct Empty {}\n"));
/// ```
#[derive(Debug, Clone)]
pub struct RustFile {
    header: Option<&'static str>,
    uses: Uses,
    body: Vec<String>,
}

impl Default for RustFile {
    fn default() -> Self {
        Self {
            header: Some(GENERATED_HEADER),
            uses: Uses::new(),
            body: Vec::new(),
        }
    }
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the generated-code header, for files the user owns and edits.
    pub fn editable(mut self) -> Self {
        self.header = None;
        self
    }

    pub fn uses(mut self, uses: Uses) -> Self {
        self.uses = uses;
        self
    }

    /// Add a body element.
    pub fn add(mut self, node: &impl Renderable) -> Self {
        self.body.push(CodeBuilder::rust().node(node).build());
        self
    }

    /// Add a body element written as raw Rust source.
    pub fn raw(mut self, source: &str) -> Self {
        self.body.push(CodeBuilder::rust().lines(source).build());
        self
    }

    /// Render the file: the generated-code header, the `use` declarations,
    /// then the body elements, each section separated by a blank line.
    pub fn render(&self) -> String {
        let mut sections = Vec::new();
        if let Some(header) = self.header {
            sections.push(CodeBuilder::rust().comment(header).build());
        }
        if !self.uses.is_empty() {
            sections.push(CodeBuilder::rust().node(&self.uses).build());
        }
        sections.extend(self.body.iter().cloned());
        sections.join("\n")
    }
}
