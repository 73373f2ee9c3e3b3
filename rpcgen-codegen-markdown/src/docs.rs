//! The markdown documentation backend.

use rpcgen_codegen::{Result, language::Backend};
use rpcgen_core::{File, Naming, capitalize};
use rpcgen_ir::{Method, Schema, Type};

use crate::page::{Page, TypeLinks, doc_name, grouped_methods, ungrouped_methods};

/// How documentation is split into files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// `types/index.md`, `types/<Type>.md`, `methods/index.md` and
    /// `methods/<method>.md`.
    #[default]
    PerFile,
    /// `types.md` and `methods.md`, with front matter and anchors.
    SinglePage,
}

/// Generates markdown documentation for types and methods.
///
/// Every method gets documented. Indexes list methods under their group, in
/// the order groups are declared; the single page collects methods without a
/// declared group under a trailing "Other" section. Private types and methods
/// are omitted unless `include_private` is set.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocs {
    layout: Layout,
    include_private: bool,
}

impl MarkdownDocs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn include_private(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }

    fn types<'a>(&self, schema: &'a Schema) -> Vec<&'a Type> {
        schema
            .types
            .values()
            .filter(|t| self.include_private || !t.private)
            .collect()
    }

    fn per_file(&self, schema: &Schema) -> Vec<File> {
        let types = self.types(schema);
        let mut files = Vec::new();

        let mut index = Page::new(TypeLinks::Files);
        index.line("# Types").blank();
        for ty in &types {
            let name = doc_name(&ty.name);
            index.link_item(&name, &format!("./{}.md", name), &ty.description);
        }
        files.push(File::new("types/index.md", index.build()));

        for ty in &types {
            let name = doc_name(&ty.name);
            let mut page = Page::new(TypeLinks::Files);
            page.line(&format!("# {}", name)).blank();
            type_body(&mut page, ty, 2);
            files.push(File::new(format!("types/{}.md", name), page.build()));
        }

        let groups = grouped_methods(schema, self.include_private);
        let mut index = Page::new(TypeLinks::Files);
        index.line("# Methods").blank();
        for (group, methods) in &groups {
            index.line(&format!("## {}", capitalize(&group.name))).blank();
            if !group.description.is_empty() {
                index.line(&group.description).blank();
            }
            for method in methods {
                index.link_item(
                    &method.name,
                    &format!("./{}.md", method.name),
                    &method.description,
                );
            }
            index.blank();
        }
        files.push(File::new("methods/index.md", index.build()));

        let methods = schema
            .methods
            .iter()
            .filter(|m| self.include_private || !m.private);
        for method in methods {
            let mut page = Page::new(TypeLinks::Files);
            page.line(&format!("# {}", method.name)).blank();
            method_body(&mut page, method, 2);
            files.push(File::new(format!("methods/{}.md", method.name), page.build()));
        }

        files
    }

    fn single_page(&self, schema: &Schema) -> Vec<File> {
        let naming = Naming::DEFAULT;

        let mut types = Page::new(TypeLinks::Anchors);
        types.front_matter(
            "Types",
            "types",
            &format!("Type documentation for the {} API.", schema.name),
        );
        for ty in self.types(schema) {
            let name = doc_name(&ty.name);
            types
                .anchor(&naming.anchor_name(&name))
                .line(&format!("## {}", name))
                .blank();
            type_body(&mut types, ty, 3);
        }

        let mut methods = Page::new(TypeLinks::Anchors);
        methods.front_matter(
            "Methods",
            "methods",
            &format!("Method documentation for the {} API.", schema.name),
        );
        for (group, group_methods) in grouped_methods(schema, self.include_private) {
            method_section(&mut methods, &group.name, &group.description, &group_methods);
        }
        let others = ungrouped_methods(schema, self.include_private);
        if !others.is_empty() {
            method_section(&mut methods, "other", "", &others);
        }

        vec![
            File::new("types.md", types.build()),
            File::new("methods.md", methods.build()),
        ]
    }
}

/// A titled section with a method table followed by each method's body.
fn method_section(page: &mut Page, title: &str, description: &str, methods: &[&Method]) {
    let naming = Naming::DEFAULT;
    let section_id = naming.anchor_name(title);
    page.anchor(&section_id)
        .line(&format!("## {}", capitalize(title)))
        .blank();
    if !description.is_empty() {
        page.line(description).blank();
    }

    page.table_header(&["Method", "Description"]);
    for method in methods {
        let id = format!("{}.{}", section_id, naming.anchor_name(&method.name));
        page.line(
            format!(
                "[{}](#{}) | {}",
                method.name,
                id,
                capitalize(&method.description)
            )
            .trim_end(),
        );
    }
    page.blank();

    for method in methods {
        let id = format!("{}.{}", section_id, naming.anchor_name(&method.name));
        page.anchor(&id).line(&format!("### {}", method.name)).blank();
        method_body(page, method, 4);
    }
}

/// Sentence, field table and examples of a type.
fn type_body(page: &mut Page, ty: &Type, level: usize) {
    let name = doc_name(&ty.name);
    if !ty.description.is_empty() {
        page.line(&format!("The `{}` {}", name, ty.description)).blank();
    }
    if !ty.properties.is_empty() {
        page.fields(&ty.properties);
    }
    page.type_examples(level, &ty.examples);
}

/// Sentence, input and output tables and examples of a method.
fn method_body(page: &mut Page, method: &Method, level: usize) {
    if !method.description.is_empty() {
        page.line(&format!("The `{}` method {}", method.name, method.description))
            .blank();
    }
    if method.has_inputs() {
        page.line("Inputs:").blank().fields(&method.inputs);
    }
    if method.has_outputs() {
        page.line("Outputs:").blank().fields(&method.outputs);
    }
    page.method_examples(level, &method.examples);
}

impl Backend for MarkdownDocs {
    fn name(&self) -> &'static str {
        "md-docs"
    }

    fn emit(&self, schema: &Schema) -> Result<Vec<File>> {
        let files = match self.layout {
            Layout::PerFile => self.per_file(schema),
            Layout::SinglePage => self.single_page(schema),
        };
        Ok(files)
    }
}
