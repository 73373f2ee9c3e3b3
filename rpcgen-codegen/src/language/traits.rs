//! Language-agnostic code generation traits.

use rpcgen_core::File;
use rpcgen_ir::{Field, FieldType, Kind, Schema, Type};

use crate::{
    error::{GenerateError, Result},
    schema::{Resolver, check_references},
};

/// A generator targeting one output language or format.
///
/// Implementations are plain structs holding their configuration. They only
/// read the schema, so one loaded schema can be shared by several backends
/// running at once.
pub trait Backend: Send + Sync {
    /// Backend identifier (e.g., "go-types", "ts-client")
    fn name(&self) -> &'static str;

    /// Emit the output files for a schema whose references are known to resolve.
    fn emit(&self, schema: &Schema) -> Result<Vec<File>>;

    /// Generate all files for the schema.
    ///
    /// Every reference is checked before anything is emitted, so a dangling
    /// reference never yields partial output.
    fn generate(&self, schema: &Schema) -> Result<Vec<File>> {
        check_references(schema)?;
        self.emit(schema)
    }
}

/// Where a mapped type is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The declared type of a field.
    Field,
    /// The element type of an array field.
    Element,
}

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Name of the backend, used in [`GenerateError::UnmappedKind`].
    fn backend(&self) -> &'static str;

    /// Map a primitive kind. `None` means the language has no mapping.
    ///
    /// [`Kind::Array`] is only asked for when the element type is unknown.
    fn primitive(&self, kind: Kind) -> Option<String>;

    /// Map a reference to a named type.
    fn reference(&self, ty: &Type, position: Position) -> String;

    /// Wrap an element type into the language's array type.
    fn array(&self, element: &str) -> String;

    /// Map a field's declared type, resolving references and array items.
    fn field(&self, schema: &Schema, field: &Field) -> Result<String> {
        match &field.ty {
            FieldType::Primitive(Kind::Array) => {
                let element = field.item_type().ok_or_else(|| GenerateError::MissingItems {
                    field: field.name.clone(),
                })?;
                let element = self.map(schema, element, Position::Element)?;
                Ok(self.array(&element))
            }
            ty => self.map(schema, ty, Position::Field),
        }
    }

    /// Map a single field type at the given position.
    fn map(&self, schema: &Schema, ty: &FieldType, position: Position) -> Result<String> {
        match ty {
            FieldType::Primitive(kind) => {
                self.primitive(*kind)
                    .ok_or_else(|| GenerateError::UnmappedKind {
                        backend: self.backend(),
                        kind: *kind,
                    })
            }
            FieldType::Reference(reference) => {
                let ty = Resolver::new(schema).resolve(reference)?;
                Ok(self.reference(ty, position))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_ir::{Items, TypeRef};

    use super::*;
    use crate::testing::todo_schema;

    struct Mapper;

    impl TypeMapper for Mapper {
        fn backend(&self) -> &'static str {
            "test"
        }

        fn primitive(&self, kind: Kind) -> Option<String> {
            match kind {
                Kind::String => Some("str".to_string()),
                Kind::Integer => Some("int".to_string()),
                _ => None,
            }
        }

        fn reference(&self, ty: &Type, position: Position) -> String {
            match position {
                Position::Field => format!("*{}", ty.name),
                Position::Element => ty.name.clone(),
            }
        }

        fn array(&self, element: &str) -> String {
            format!("[]{}", element)
        }
    }

    #[test]
    fn test_maps_primitives_and_references() {
        let schema = todo_schema();
        let remove = &schema.methods[2];
        let get = &schema.methods[1];

        assert_eq!(Mapper.field(&schema, &remove.inputs[0]).unwrap(), "int");
        assert_eq!(Mapper.field(&schema, &remove.outputs[0]).unwrap(), "*item");
        assert_eq!(Mapper.field(&schema, &get.outputs[0]).unwrap(), "[]item");
    }

    #[test]
    fn test_unmapped_kind_is_an_error() {
        let schema = todo_schema();
        let field = Field::new("done", FieldType::Primitive(Kind::Boolean));
        let err = Mapper.field(&schema, &field).unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnmappedKind {
                backend: "test",
                kind: Kind::Boolean
            }
        );
    }

    #[test]
    fn test_array_without_items() {
        let schema = todo_schema();
        let field = Field::new("tags", FieldType::Primitive(Kind::Array));
        assert!(matches!(
            Mapper.field(&schema, &field),
            Err(GenerateError::MissingItems { .. })
        ));

        let mut field = field;
        field.items = Some(Items {
            ty: FieldType::Reference(TypeRef::to_type("ghost")),
        });
        assert!(matches!(
            Mapper.field(&schema, &field),
            Err(GenerateError::UnresolvedReference { .. })
        ));
    }
}
