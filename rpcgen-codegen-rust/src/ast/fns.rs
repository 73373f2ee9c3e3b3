//! Rust function builder.

use rpcgen_codegen::builder::{CodeFragment, Renderable};

/// A parameter in a Rust function.
///
/// An empty type renders the name alone, for receivers like `&self`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// `&self`.
    pub fn self_ref() -> Self {
        Self::new("&self", "")
    }
}

/// Builder for Rust functions.
///
/// A function without a body renders as a declaration ending in `;` once
/// marked with [`Fn::declaration`], for required trait items.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    is_async: bool,
    is_declaration: bool,
    generics: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            is_async: false,
            is_declaration: false,
            generics: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn declaration(mut self) -> Self {
        self.is_declaration = true;
        self
    }

    /// Generic parameters without the angle brackets, e.g. `S: Service`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: &str) -> Self {
        self.body.extend(content.lines().map(CodeFragment::line));
        self
    }

    /// Add body fragments.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{}>", g))
            .unwrap_or_default();

        let params = self
            .params
            .iter()
            .map(|p| {
                if p.ty.is_empty() {
                    p.name.clone()
                } else {
                    format!("{}: {}", p.name, p.ty)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let returns = self
            .return_type
            .as_ref()
            .map(|ret| format!(" -> {}", ret))
            .unwrap_or_default();

        format!(
            "{}{}fn {}{}({}){}",
            vis, async_kw, self.name, generics, params, returns
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::line(format!("#[{}]", attr)));
        }

        if self.is_declaration && self.body.is_empty() {
            fragments.push(CodeFragment::line(format!("{};", self.signature())));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} {{", self.signature()),
                self.body.clone(),
                "}",
            ));
        }
        fragments
    }
}
