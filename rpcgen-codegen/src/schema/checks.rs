//! Validation rules emitted for required, enum, default and nested fields.
//!
//! Backends turn each [`Check`] into target-language code. Checks are listed
//! per field in a fixed order: default substitution, required, enum, then
//! element validation, so every backend validates in the same order and
//! reports the same first failure.

use rpcgen_ir::{Field, FieldType, Kind, Schema, Type};
use serde_json::Value;

use super::{Resolver, describe::quoted_list};
use crate::error::{GenerateError, Result};

/// Message of a failed required check.
pub const REQUIRED_MESSAGE: &str = "is required";

/// Message of a failed enum check, e.g. `must be one of: "a", "b"`.
pub fn one_of_message(values: &[String]) -> String {
    format!("must be one of: {}", quoted_list(values))
}

/// Default value substituted for an unset field.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    String(String),
    Integer(i64),
    Float(f64),
}

/// The zero value a required check compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zero {
    EmptyString,
    ZeroInt,
    ZeroFloat,
    EmptyArray,
    EmptyObject,
    UnsetTimestamp,
    UnsetReference,
}

/// One validation rule for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Check<'a> {
    /// Replace the zero value with the declared default.
    Default { field: &'a Field, value: DefaultValue },
    /// Fail with [`REQUIRED_MESSAGE`] when the field holds its zero value.
    Required { field: &'a Field, zero: Zero },
    /// Fail with [`one_of_message`] when a non-empty value is outside the enum.
    OneOf { field: &'a Field },
    /// Validate each element, annotating the first failure with its index.
    Elements { field: &'a Field, element: &'a Type },
}

/// The checks for a list of fields, in field order.
pub fn checks<'a>(schema: &'a Schema, fields: &'a [Field]) -> Result<Vec<Check<'a>>> {
    let resolver = Resolver::new(schema);
    let mut out = Vec::new();

    for field in fields {
        if let Some(value) = default_value(field)? {
            out.push(Check::Default { field, value });
        }
        if field.required {
            if let Some(zero) = zero_value(&field.ty) {
                out.push(Check::Required { field, zero });
            }
        }
        if field.ty.is_kind(Kind::String) && !field.enum_values.is_empty() {
            out.push(Check::OneOf { field });
        }
        if let Some(element) = resolver.element(field)? {
            out.push(Check::Elements { field, element });
        }
    }

    Ok(out)
}

/// Booleans have no zero value that means "unset".
fn zero_value(ty: &FieldType) -> Option<Zero> {
    let kind = match ty {
        FieldType::Reference(_) => return Some(Zero::UnsetReference),
        FieldType::Primitive(kind) => kind,
    };
    match kind {
        Kind::String => Some(Zero::EmptyString),
        Kind::Integer => Some(Zero::ZeroInt),
        Kind::Float => Some(Zero::ZeroFloat),
        Kind::Array => Some(Zero::EmptyArray),
        Kind::Object => Some(Zero::EmptyObject),
        Kind::Timestamp => Some(Zero::UnsetTimestamp),
        Kind::Boolean => None,
    }
}

fn default_value(field: &Field) -> Result<Option<DefaultValue>> {
    let (Some(value), Some(kind)) = (&field.default, field.ty.kind()) else {
        return Ok(None);
    };

    let parsed = match (kind, value) {
        (Kind::String, Value::String(s)) => DefaultValue::String(s.clone()),
        (Kind::Integer, Value::Number(n)) if n.is_i64() => {
            DefaultValue::Integer(n.as_i64().unwrap_or_default())
        }
        (Kind::Float, Value::Number(n)) => DefaultValue::Float(n.as_f64().unwrap_or_default()),
        (Kind::String | Kind::Integer | Kind::Float, _) => {
            return Err(GenerateError::InvalidDefault {
                field: field.name.clone(),
                kind: kind.to_string(),
            });
        }
        _ => return Ok(None),
    };

    Ok(Some(parsed))
}
