//! Reference resolution.

use rpcgen_ir::{Field, FieldType, Schema, Type, TypeRef};

use crate::error::{GenerateError, Result};

/// Resolves type references against one schema.
///
/// There is no cycle detection: a type may reference itself, directly or
/// through other types, and each backend emits such types with an
/// indirection of its own.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    schema: &'a Schema,
}

impl<'a> Resolver<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Look up the type a reference points at.
    pub fn resolve(&self, reference: &TypeRef) -> Result<&'a Type> {
        self.schema
            .lookup(reference)
            .ok_or_else(|| GenerateError::UnresolvedReference {
                reference: reference.as_str().to_string(),
                location: None,
            })
    }

    /// The referenced element type of an array field, if its items are a reference.
    pub fn element(&self, field: &Field) -> Result<Option<&'a Type>> {
        if !field.is_array() {
            return Ok(None);
        }
        match field.item_type() {
            Some(FieldType::Reference(reference)) => self.resolve(reference).map(Some),
            _ => Ok(None),
        }
    }
}

/// Every reference that does not resolve, with the location of its field.
pub fn dangling_references(schema: &Schema) -> Vec<(String, &TypeRef)> {
    schema
        .fields()
        .into_iter()
        .flat_map(|(location, field)| {
            field
                .references()
                .filter(|reference| schema.lookup(reference).is_none())
                .map(move |reference| (location.clone(), reference))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Fail on the first reference that does not resolve.
pub fn check_references(schema: &Schema) -> Result<()> {
    match dangling_references(schema).into_iter().next() {
        None => Ok(()),
        Some((location, reference)) => Err(GenerateError::UnresolvedReference {
            reference: reference.as_str().to_string(),
            location: Some(location),
        }),
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_ir::{Items, Kind};

    use super::*;
    use crate::testing::todo_schema;

    fn ghost() -> FieldType {
        FieldType::Reference(TypeRef::to_type("Ghost"))
    }

    #[test]
    fn test_resolve() {
        let schema = todo_schema();
        let resolver = Resolver::new(&schema);

        let item = resolver.resolve(&TypeRef::to_type("item")).unwrap();
        assert_eq!(item.name, "item");

        let err = resolver.resolve(&TypeRef::to_type("Ghost")).unwrap_err();
        assert_eq!(err.to_string(), "reference to undefined type \"#/types/Ghost\"");
    }

    #[test]
    fn test_element() {
        let schema = todo_schema();
        let resolver = Resolver::new(&schema);
        let get_items = &schema.methods[1];
        let remove_item = &schema.methods[2];

        let element = resolver.element(&get_items.outputs[0]).unwrap();
        assert_eq!(element.map(|t| t.name.as_str()), Some("item"));
        assert!(resolver.element(&remove_item.outputs[0]).unwrap().is_none());
    }

    #[test]
    fn test_self_reference_resolves() {
        let mut schema = todo_schema();
        let mut children = Field::new("children", FieldType::Primitive(Kind::Array));
        children.items = Some(Items {
            ty: FieldType::Reference(TypeRef::to_type("item")),
        });
        if let Some(item) = schema.types.get_mut("item") {
            item.properties.push(children);
        }

        assert!(check_references(&schema).is_ok());
    }

    #[test]
    fn test_check_references_reports_location() {
        let mut schema = todo_schema();
        if let Some(item) = schema.types.get_mut("item") {
            item.properties.push(Field::new("ghost", ghost()));
        }

        let err = check_references(&schema).unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnresolvedReference {
                reference: "#/types/Ghost".to_string(),
                location: Some("types.item.ghost".to_string()),
            }
        );
    }

    #[test]
    fn test_dangling_references_finds_all() {
        let mut schema = todo_schema();
        schema.methods[0].inputs.push(Field::new("a", ghost()));
        let mut list = Field::new("b", FieldType::Primitive(Kind::Array));
        list.items = Some(Items { ty: ghost() });
        schema.methods[1].outputs.push(list);

        let dangling: Vec<_> = dangling_references(&schema)
            .into_iter()
            .map(|(location, _)| location)
            .collect();
        assert_eq!(
            dangling,
            ["methods.add_item.inputs.a", "methods.get_items.outputs.b"]
        );
    }
}
