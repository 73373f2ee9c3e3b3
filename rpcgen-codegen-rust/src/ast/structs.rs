//! Rust struct builder.

use rpcgen_codegen::builder::{CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub attrs: Vec<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
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

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::line(format!("#[{}]", attr)));
        }
        let vis = if self.is_public { "pub " } else { "" };
        fragments.push(CodeFragment::line(format!(
            "{}{}: {},",
            vis, self.name, self.ty
        )));
        fragments
    }
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    fields: Vec<Field>,
    is_public: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            fields: Vec::new(),
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::line(format!("#[{}]", attr)));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "{}struct {} {{}}",
                vis, self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("{}struct {} {{", vis, self.name),
                self.fields.iter().flat_map(Field::to_fragments).collect(),
                "}",
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::builder::CodeBuilder;

    use super::*;

    fn build(s: &Struct) -> String {
        CodeBuilder::rust().node(s).build()
    }

    #[test]
    fn test_empty_struct() {
        assert_eq!(build(&Struct::new("Empty")), "pub struct Empty {}\n");
    }

    #[test]
    fn test_struct_with_derives_and_attrs() {
        let s = build(
            &Struct::new("Item")
                .derive("Debug")
                .derive("Clone")
                .attr("serde(default)"),
        );
        assert_eq!(
            s,
            "#[derive(Debug, Clone)]\n#[serde(default)]\npub struct Item {}\n"
        );
    }

    #[test]
    fn test_field_with_doc_and_attrs() {
        let s = build(
            &Struct::new("Item").field(
                Field::new("created_at", "Option<String>")
                    .doc("When it was created.")
                    .attr("serde(rename = \"createdAt\")"),
            ),
        );
        assert_eq!(
            s,
            "pub struct Item {\n    /// When it was created.\n    #[serde(rename = \"createdAt\")]\n    pub created_at: Option<String>,\n}\n"
        );
    }

    #[test]
    fn test_private_field() {
        let s = build(&Struct::new("Client").private().field(Field::new("url", "String").private()));
        assert_eq!(s, "struct Client {\n    url: String,\n}\n");
    }
}
