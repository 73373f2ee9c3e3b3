//! C# class and property builders.

use rpcgen_codegen::builder::{CodeFragment, Renderable};

use super::{braced, summary};

/// An auto-property mapped to a JSON key.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub json_name: String,
    pub ty: String,
    pub doc: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, json_name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json_name: json_name.into(),
            ty: ty.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.as_deref().map(summary).unwrap_or_default();
        fragments.push(CodeFragment::line(format!(
            "[JsonProperty(\"{}\")]",
            self.json_name
        )));
        fragments.push(CodeFragment::line(format!(
            "public {} {} {{ get; set; }}",
            self.ty, self.name
        )));
        fragments
    }
}

/// Builder for public classes.
///
/// Members are separated by blank lines so each keeps its own doc comment.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Option<String>,
    base: Option<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            base: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// The class this one derives from.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn member(mut self, member: &impl Renderable) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    /// A member given as raw lines.
    pub fn raw(mut self, code: &str) -> Self {
        self.members
            .push(code.lines().map(CodeFragment::line).collect());
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.as_deref().map(summary).unwrap_or_default();

        let header = match &self.base {
            Some(base) => format!("public class {} : {}", self.name, base),
            None => format!("public class {}", self.name),
        };
        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(member.iter().cloned());
        }
        fragments.extend(braced(header, body));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::builder::CodeBuilder;

    use super::*;

    fn build(node: &impl Renderable) -> String {
        CodeBuilder::rust().node(node).build()
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(build(&Class::new("Empty")), "public class Empty\n{\n}\n");
    }

    #[test]
    fn test_class_with_properties() {
        let code = build(
            &Class::new("Item")
                .doc("Item is a to-do item.")
                .member(&Property::new("ID", "id", "long").doc("ID is the id."))
                .member(&Property::new("Text", "text", "string")),
        );
        assert_eq!(
            code,
            "/// <summary>\n/// Item is a to-do item.\n/// </summary>\n\
             public class Item\n\
             {\n\
             \x20   /// <summary>\n\
             \x20   /// ID is the id.\n\
             \x20   /// </summary>\n\
             \x20   [JsonProperty(\"id\")]\n\
             \x20   public long ID { get; set; }\n\
             \n\
             \x20   [JsonProperty(\"text\")]\n\
             \x20   public string Text { get; set; }\n\
             }\n"
        );
    }

    #[test]
    fn test_base_class() {
        let code = build(&Class::new("ClientException").extends("Exception"));
        assert!(code.starts_with("public class ClientException : Exception\n{\n"));
    }
}
