//! The schema root.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Example, Field, Method, TypeRef};

/// Options consumed by the Go backends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoOptions {
    /// Struct tag keys emitted for every field, e.g. `json`.
    #[serde(default = "default_go_tags")]
    pub tags: Vec<String>,
}

fn default_go_tags() -> Vec<String> {
    vec!["json".to_string()]
}

impl Default for GoOptions {
    fn default() -> Self {
        Self {
            tags: default_go_tags(),
        }
    }
}

/// A documentation category for methods.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub summary: String,
}

/// A shared named type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Type {
    /// Filled in from the key of the `types` map at load time.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub properties: Vec<Field>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// An RPC schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schema {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub go: GoOptions,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Keyed by type name; iteration is ordered by name.
    #[serde(default)]
    pub types: BTreeMap<String, Type>,
}

impl Schema {
    /// Copy each `types` key into the type's `name` and sort every ordered
    /// collection by name.
    ///
    /// Groups, methods, method inputs and outputs, and type properties are
    /// sorted; types are ordered by the map itself.
    pub fn canonicalize(&mut self) {
        for (name, ty) in &mut self.types {
            ty.name.clone_from(name);
            ty.properties.sort_by(|a, b| a.name.cmp(&b.name));
        }

        self.groups.sort_by(|a, b| a.name.cmp(&b.name));
        self.methods.sort_by(|a, b| a.name.cmp(&b.name));

        for method in &mut self.methods {
            method.inputs.sort_by(|a, b| a.name.cmp(&b.name));
            method.outputs.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }

    /// Look up a type by its bare name.
    pub fn type_named(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Look up the type a reference points at.
    pub fn lookup(&self, reference: &TypeRef) -> Option<&Type> {
        self.type_named(reference.name())
    }

    /// Methods belonging to the named group, in canonical order.
    pub fn methods_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Method> {
        self.methods.iter().filter(move |m| m.group == group)
    }

    pub fn group_named(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Every field in the schema, paired with a dotted location such as
    /// `types.item.id` or `methods.add_item.inputs.item`.
    pub fn fields(&self) -> Vec<(String, &Field)> {
        let mut out = Vec::new();
        for ty in self.types.values() {
            for field in &ty.properties {
                out.push((format!("types.{}.{}", ty.name, field.name), field));
            }
        }
        for method in &self.methods {
            for field in &method.inputs {
                out.push((format!("methods.{}.inputs.{}", method.name, field.name), field));
            }
            for field in &method.outputs {
                out.push((format!("methods.{}.outputs.{}", method.name, field.name), field));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Schema {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_go_tags_default() {
        let schema = parse(json!({ "name": "x", "version": "1" }));
        assert_eq!(schema.go.tags, ["json"]);

        let schema = parse(json!({ "name": "x", "version": "1", "go": {} }));
        assert_eq!(schema.go.tags, ["json"]);

        let schema = parse(json!({ "name": "x", "version": "1", "go": { "tags": ["json", "db"] } }));
        assert_eq!(schema.go.tags, ["json", "db"]);
    }

    #[test]
    fn test_canonicalize_sorts_and_names() {
        let mut schema = parse(json!({
            "name": "x",
            "version": "1",
            "groups": [{ "name": "zeta" }, { "name": "alpha" }],
            "methods": [
                {
                    "name": "remove",
                    "inputs": [
                        { "name": "b", "type": "string" },
                        { "name": "a", "type": "string" }
                    ]
                },
                { "name": "add" }
            ],
            "types": {
                "user": {
                    "properties": [
                        { "name": "name", "type": "string" },
                        { "name": "id", "type": "integer" }
                    ]
                }
            }
        }));
        schema.canonicalize();

        let groups: Vec<_> = schema.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(groups, ["alpha", "zeta"]);

        let methods: Vec<_> = schema.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, ["add", "remove"]);

        let inputs: Vec<_> = schema.methods[1].inputs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(inputs, ["a", "b"]);

        let user = schema.type_named("user").unwrap();
        assert_eq!(user.name, "user");
        let props: Vec<_> = user.properties.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(props, ["id", "name"]);
    }

    #[test]
    fn test_methods_in_group() {
        let schema = parse(json!({
            "name": "x",
            "version": "1",
            "methods": [
                { "name": "a", "group": "items" },
                { "name": "b", "group": "users" },
                { "name": "c", "group": "items" }
            ]
        }));
        let names: Vec<_> = schema.methods_in("items").map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_fields_locations() {
        let mut schema = parse(json!({
            "name": "x",
            "version": "1",
            "methods": [{ "name": "get", "outputs": [{ "name": "item", "type": "string" }] }],
            "types": { "item": { "properties": [{ "name": "id", "type": "integer" }] } }
        }));
        schema.canonicalize();

        let locations: Vec<_> = schema.fields().into_iter().map(|(loc, _)| loc).collect();
        assert_eq!(locations, ["types.item.id", "methods.get.outputs.item"]);
    }
}
