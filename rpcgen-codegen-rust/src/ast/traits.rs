//! Rust trait definition builder.

use rpcgen_codegen::builder::{CodeFragment, Renderable};

use super::Fn;

/// Builder for public trait definitions.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Option<String>,
    bounds: Option<String>,
    items: Vec<Fn>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            bounds: None,
            items: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Supertrait bounds, e.g. `Send + Sync`.
    pub fn bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    /// Add an item; trait items are never `pub`.
    pub fn item(mut self, item: Fn) -> Self {
        self.items.push(item.private());
        self
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }

        let header = match &self.bounds {
            Some(bounds) => format!("pub trait {}: {} {{", self.name, bounds),
            None => format!("pub trait {} {{", self.name),
        };

        let mut body = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(item.to_fragments());
        }
        fragments.push(CodeFragment::block(header, body, "}"));
        fragments
    }
}
