//! TypeScript function and class method builder.

use rpcgen_codegen::builder::{CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for TypeScript functions.
///
/// A function built with [`Fn::method`] renders without the `function`
/// keyword, for use inside a class body.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    exported: bool,
    method: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            exported: false,
            method: false,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// A class method.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            method: true,
            ..Self::new(name)
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn export(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
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
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: &str) -> Self {
        self.body.extend(content.lines().map(str::to_string));
        self
    }

    fn signature(&self) -> String {
        let export = if self.exported && !self.method { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let keyword = if self.method { "" } else { "function " };

        let params = self
            .params
            .iter()
            .map(|p| {
                let optional = if p.optional { "?" } else { "" };
                format!("{}{}: {}", p.name, optional, p.ty)
            })
            .collect::<Vec<_>>()
            .join(", ");

        let returns = self
            .return_type
            .as_ref()
            .map(|ret| format!(": {}", ret))
            .unwrap_or_default();

        format!(
            "{}{}{}{}({}){} {{",
            export, async_kw, keyword, self.name, params, returns
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }
        let body = self.body.iter().map(CodeFragment::line).collect();
        fragments.push(CodeFragment::block(self.signature(), body, "}"));
        fragments
    }
}
