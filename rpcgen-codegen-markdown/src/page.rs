//! Markdown building blocks shared by both layouts.

use rpcgen_codegen::{
    builder::{CodeBuilder, Indent},
    schema::describe::field_extra,
};
use rpcgen_core::{Naming, capitalize};
use rpcgen_ir::{Example, Field, FieldType, Kind, MethodExample, Schema};
use serde_json::Value;

/// Where links to type documentation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLinks {
    /// `../types/Item.md`
    Files,
    /// `types.md#item`
    Anchors,
}

/// A markdown document under construction.
#[derive(Debug, Clone)]
pub struct Page {
    out: CodeBuilder,
    links: TypeLinks,
}

impl Page {
    pub fn new(links: TypeLinks) -> Self {
        Self {
            out: CodeBuilder::new(Indent::TYPESCRIPT),
            links,
        }
    }

    pub fn line(&mut self, line: &str) -> &mut Self {
        self.out.push_line(line);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push_blank();
        self
    }

    /// `---`-delimited front matter.
    pub fn front_matter(&mut self, title: &str, slug: &str, teaser: &str) -> &mut Self {
        self.line("---")
            .line(&format!("title: {}", title))
            .line(&format!("slug: {}", slug))
            .line(&format!("teaser: {}", teaser))
            .line("---")
            .blank()
    }

    /// An empty HTML anchor, so links survive heading renames.
    pub fn anchor(&mut self, id: &str) -> &mut Self {
        self.line(&format!("<a id=\"{}\"></a>", id))
    }

    /// A list item linking to `target`, followed by the description if any.
    pub fn link_item(&mut self, text: &str, target: &str, description: &str) -> &mut Self {
        if description.is_empty() {
            self.line(&format!("  - [{}]({})", text, target))
        } else {
            self.line(&format!("  - [{}]({}) — {}", text, target, description))
        }
    }

    /// A name, type and description table of fields, followed by a blank line.
    pub fn fields(&mut self, fields: &[Field]) -> &mut Self {
        self.table_header(&["Name", "Type", "Description"]);
        for field in fields {
            let description = capitalize(&field.description) + &field_extra(field);
            let row = [
                format!("`{}`", field.name),
                self.field_type(field),
                description.trim_start().to_string(),
            ];
            self.line(row.join(" | ").trim_end());
        }
        self.blank()
    }

    pub fn table_header(&mut self, cells: &[&str]) -> &mut Self {
        let header: Vec<String> = cells.iter().map(|c| format!("__{}__", c)).collect();
        let rule = vec!["---"; cells.len()];
        self.line(&header.join(" | ")).line(&rule.join(" | "))
    }

    /// Type examples under an `Examples` heading at `level`.
    pub fn type_examples(&mut self, level: usize, examples: &[Example]) -> &mut Self {
        if examples.is_empty() {
            return self;
        }
        self.line(&format!("{} Examples", "#".repeat(level))).blank();
        for example in examples {
            if !example.description.is_empty() {
                self.line(&example.description).blank();
            }
            self.json(&example.value);
        }
        self
    }

    /// Method examples under an `Example` or `Examples` heading at `level`.
    pub fn method_examples(&mut self, level: usize, examples: &[MethodExample]) -> &mut Self {
        let title = match examples.len() {
            0 => return self,
            1 => "Example",
            _ => "Examples",
        };
        self.line(&format!("{} {}", "#".repeat(level), title)).blank();

        for example in examples {
            if !example.name.is_empty() {
                self.line(&format!("{} {}", "#".repeat(level + 1), example.name))
                    .blank();
            }
            if !example.description.is_empty() {
                self.line(&example.description).blank();
            }
            self.line("Input:").blank();
            self.optional_json(example.input.as_ref());
            self.line("Output:").blank();
            self.optional_json(example.output.as_ref());
        }
        self
    }

    pub fn build(self) -> String {
        self.out.build()
    }

    fn optional_json(&mut self, value: Option<&Value>) -> &mut Self {
        match value {
            Some(value) => self.json(value),
            None => self.line("  None.").blank(),
        }
    }

    fn json(&mut self, value: &Value) -> &mut Self {
        let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.line("```json");
        self.out.push_lines(&pretty);
        self.line("```").blank()
    }

    fn field_type(&self, field: &Field) -> String {
        match (&field.ty, field.item_type()) {
            (FieldType::Primitive(Kind::Array), Some(item)) => {
                format!("__array__ of {}", self.type_name(item))
            }
            (ty, _) => self.type_name(ty),
        }
    }

    fn type_name(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Primitive(kind) => format!("__{}__", kind),
            FieldType::Reference(reference) => {
                let name = doc_name(reference.name());
                let target = match self.links {
                    TypeLinks::Files => format!("../types/{}.md", name),
                    TypeLinks::Anchors => format!("types.md#{}", Naming::DEFAULT.anchor_name(&name)),
                };
                format!("[{}]({})", name, target)
            }
        }
    }
}

/// Display name of a type: its exported name.
pub fn doc_name(name: &str) -> String {
    Naming::DEFAULT.exported_name(name)
}

/// Groups in declaration order with their visible methods, skipping empty
/// groups.
pub fn grouped_methods<'a>(
    schema: &'a Schema,
    include_private: bool,
) -> Vec<(&'a rpcgen_ir::Group, Vec<&'a rpcgen_ir::Method>)> {
    schema
        .groups
        .iter()
        .map(|group| {
            let methods: Vec<_> = schema
                .methods_in(&group.name)
                .filter(|m| include_private || !m.private)
                .collect();
            (group, methods)
        })
        .filter(|(_, methods)| !methods.is_empty())
        .collect()
}

/// Visible methods whose group is empty or not declared.
pub fn ungrouped_methods(schema: &Schema, include_private: bool) -> Vec<&rpcgen_ir::Method> {
    schema
        .methods
        .iter()
        .filter(|m| include_private || !m.private)
        .filter(|m| schema.group_named(&m.group).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::testing::todo_schema;

    use super::*;

    #[test]
    fn test_fields_table() {
        let schema = todo_schema();
        let item = schema.type_named("item").unwrap();
        let mut page = Page::new(TypeLinks::Files);
        page.fields(&item.properties);

        assert_eq!(
            page.build(),
            "__Name__ | __Type__ | __Description__\n\
             --- | --- | ---\n\
             `created_at` | __timestamp__ | The time the to-do item was created.\n\
             `id` | __integer__ | The id of the item. This field is read-only.\n\
             `text` | __string__ | The to-do item text. This field is required.\n\
             \n"
        );
    }

    #[test]
    fn test_reference_links() {
        let schema = todo_schema();
        let get_items = &schema.methods[1];

        let mut page = Page::new(TypeLinks::Files);
        page.fields(&get_items.outputs);
        assert!(page.build().contains("`items` | __array__ of [Item](../types/Item.md) |"));

        let mut page = Page::new(TypeLinks::Anchors);
        page.fields(&get_items.outputs);
        assert!(page.build().contains("[Item](types.md#item)"));
    }

    #[test]
    fn test_method_example_without_output() {
        let schema = todo_schema();
        let mut page = Page::new(TypeLinks::Files);
        page.method_examples(2, &schema.methods[0].examples);

        assert_eq!(
            page.build(),
            "## Example\n\n\
             ### Add an item\n\n\
             Adds a single item.\n\n\
             Input:\n\n\
             ```json\n{\n  \"item\": \"Buy milk\"\n}\n```\n\n\
             Output:\n\n\
             \x20 None.\n\n"
        );
    }
}
