//! Fields and their value types.

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};
use serde_json::Value;

/// Prefix shared by every type reference.
pub const TYPE_REF_PREFIX: &str = "#/types/";

/// Primitive value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    String,
    Boolean,
    Integer,
    Float,
    Array,
    Object,
    Timestamp,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 7] = [
        Kind::String,
        Kind::Boolean,
        Kind::Integer,
        Kind::Float,
        Kind::Array,
        Kind::Object,
        Kind::Timestamp,
    ];

    const NAMES: &'static [&'static str] = &[
        "string",
        "boolean",
        "integer",
        "float",
        "array",
        "object",
        "timestamp",
    ];

    /// Get the wire spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown kind '{}'", s))
    }
}

/// A `$ref` pointing at a named type, e.g. `#/types/item`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a reference to the named type.
    pub fn to_type(name: &str) -> Self {
        Self(format!("{}{}", TYPE_REF_PREFIX, name))
    }

    /// The raw reference as written in the document.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The referenced type name, with the `#/types/` prefix stripped.
    pub fn name(&self) -> &str {
        self.0.strip_prefix(TYPE_REF_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The type of a field: either a primitive kind or a reference to a named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Primitive(Kind),
    Reference(TypeRef),
}

impl FieldType {
    /// The primitive kind, if this is not a reference.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            FieldType::Primitive(kind) => Some(*kind),
            FieldType::Reference(_) => None,
        }
    }

    /// The reference, if this is not a primitive.
    pub fn reference(&self) -> Option<&TypeRef> {
        match self {
            FieldType::Primitive(_) => None,
            FieldType::Reference(r) => Some(r),
        }
    }

    pub fn is_kind(&self, kind: Kind) -> bool {
        self.kind() == Some(kind)
    }
}

// `"type": "integer"` decodes as a primitive, `"type": { "$ref": ... }` as a
// reference. The variant is chosen by the shape of the value.
impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldTypeVisitor;

        impl<'de> Visitor<'de> for FieldTypeVisitor {
            type Value = FieldType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a kind name or an object with a \"$ref\" key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldType, E> {
                v.parse::<Kind>()
                    .map(FieldType::Primitive)
                    .map_err(|_| E::unknown_variant(v, Kind::NAMES))
            }

            fn visit_map<A>(self, mut map: A) -> Result<FieldType, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut reference = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key != "$ref" {
                        return Err(de::Error::unknown_field(&key, &["$ref"]));
                    }
                    if reference.is_some() {
                        return Err(de::Error::duplicate_field("$ref"));
                    }
                    reference = Some(map.next_value::<String>()?);
                }
                reference
                    .map(|r| FieldType::Reference(TypeRef(r)))
                    .ok_or_else(|| de::Error::missing_field("$ref"))
            }
        }

        deserializer.deserialize_any(FieldTypeVisitor)
    }
}

/// Element type of an array field.
///
/// Accepts both `{ "type": "string" }` and `{ "type": { "$ref": ... } }`, as
/// well as the short form `{ "$ref": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Items {
    pub ty: FieldType,
}

impl<'de> Deserialize<'de> for Items {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawItems {
            #[serde(rename = "type")]
            ty: Option<FieldType>,
            #[serde(rename = "$ref")]
            reference: Option<String>,
        }

        let raw = RawItems::deserialize(deserializer)?;
        match (raw.ty, raw.reference) {
            (Some(ty), None) => Ok(Items { ty }),
            (None, Some(r)) => Ok(Items {
                ty: FieldType::Reference(TypeRef(r)),
            }),
            (Some(_), Some(_)) => Err(de::Error::custom(
                "items must declare either \"type\" or \"$ref\", not both",
            )),
            (None, None) => Err(de::Error::missing_field("type")),
        }
    }
}

/// A named, typed slot in a type, method input or method output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default)]
    pub items: Option<Items>,
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,
}

impl Field {
    /// Create a field of the given type with every flag unset.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required: false,
            readonly: false,
            default: None,
            ty,
            items: None,
            enum_values: Vec::new(),
        }
    }

    pub fn is_array(&self) -> bool {
        self.ty.is_kind(Kind::Array)
    }

    /// The element type of an array field.
    pub fn item_type(&self) -> Option<&FieldType> {
        self.items.as_ref().map(|items| &items.ty)
    }

    /// Every reference mentioned by this field, its own type first.
    pub fn references(&self) -> impl Iterator<Item = &TypeRef> {
        self.ty
            .reference()
            .into_iter()
            .chain(self.item_type().and_then(FieldType::reference))
    }
}
