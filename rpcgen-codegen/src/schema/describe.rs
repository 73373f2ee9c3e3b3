//! Field attribute and enum sentences appended to field descriptions.

use rpcgen_ir::Field;
use serde_json::Value;

/// Join a list the way it reads in prose: `a`, `a and b`, `a, b, and c`.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", init.join(", "), last.as_ref())
        }
    }
}

/// Quote each value as a JSON string and separate them with commas.
pub fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| Value::String(v.clone()).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// ` This field is required and read-only.`, or empty.
pub fn field_attributes(field: &Field) -> String {
    let mut attrs = Vec::new();
    if field.required {
        attrs.push("required");
    }
    if field.readonly {
        attrs.push("read-only");
    }
    if attrs.is_empty() {
        return String::new();
    }
    format!(" This field is {}.", join_list(&attrs))
}

/// ` Must be one of: "a", "b".`, or empty.
pub fn field_enum(field: &Field) -> String {
    if field.enum_values.is_empty() {
        return String::new();
    }
    format!(" Must be one of: {}.", quoted_list(&field.enum_values))
}

/// Attribute and enum sentences together.
pub fn field_extra(field: &Field) -> String {
    field_attributes(field) + &field_enum(field)
}

#[cfg(test)]
mod tests {
    use rpcgen_ir::{FieldType, Kind};

    use super::*;

    fn field() -> Field {
        Field::new("status", FieldType::Primitive(Kind::String))
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list::<&str>(&[]), "");
        assert_eq!(join_list(&["a"]), "a");
        assert_eq!(join_list(&["a", "b"]), "a and b");
        assert_eq!(join_list(&["a", "b", "c"]), "a, b, and c");
    }

    #[test]
    fn test_field_attributes() {
        let mut f = field();
        assert_eq!(field_attributes(&f), "");

        f.required = true;
        assert_eq!(field_attributes(&f), " This field is required.");

        f.readonly = true;
        assert_eq!(field_attributes(&f), " This field is required and read-only.");
    }

    #[test]
    fn test_field_extra() {
        let mut f = field();
        f.readonly = true;
        f.enum_values = vec!["open".to_string(), "closed".to_string()];
        assert_eq!(
            field_extra(&f),
            " This field is read-only. Must be one of: \"open\", \"closed\"."
        );
    }
}
