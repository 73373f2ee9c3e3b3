//! Loading schema documents from disk and from strings.

use std::fs;

use rpcgen_ir::{FieldType, Kind};
use rpcgen_schema::{Error, Loader, StructuralValidator, load, load_str};
use serde_json::Value;
use tempfile::TempDir;

const TODO: &str = include_str!("fixtures/todo.json");

fn names<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    iter.collect()
}

#[test]
fn test_load_todo_schema() {
    let schema = load_str(TODO).unwrap();

    assert_eq!(schema.name, "todo");
    assert_eq!(schema.version, "1.0.0");
    assert_eq!(schema.go.tags, ["json"]);
    assert_eq!(
        names(schema.methods.iter().map(|m| m.name.as_str())),
        ["add_item", "get_items", "remove_item"]
    );

    let item = schema.type_named("item").unwrap();
    assert_eq!(item.name, "item");
    assert_eq!(
        names(item.properties.iter().map(|f| f.name.as_str())),
        ["created_at", "id", "text"]
    );
    assert_eq!(item.properties[0].ty, FieldType::Primitive(Kind::Timestamp));
    assert!(item.properties[1].readonly);
    assert!(item.properties[2].required);
}

#[test]
fn test_reference_fields_decode_as_references() {
    let schema = load_str(TODO).unwrap();
    let get_items = &schema.methods[1];
    let items = &get_items.outputs[0];

    assert!(items.is_array());
    let element = items.item_type().and_then(FieldType::reference).unwrap();
    assert_eq!(element.name(), "item");

    let remove_item = &schema.methods[2];
    assert_eq!(remove_item.outputs[0].ty.reference().unwrap().name(), "item");
}

#[test]
fn test_loading_is_deterministic() {
    let first = load_str(TODO).unwrap();
    let second = load_str(TODO).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("schema.json");
    fs::write(&path, TODO).unwrap();

    let schema = load(&path).unwrap();
    assert_eq!(schema.methods.len(), 3);
}

#[test]
fn test_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = load(temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_malformed_json() {
    let err = load_str("{ \"name\": ").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_structural_errors_are_collected() {
    let err = load_str(r#"{ "methods": [{ "description": "no name" }] }"#).unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("validation failed:\n  - "), "{}", message);
    assert!(err.violations().len() >= 3, "{:?}", err.violations());
    assert!(message.contains("name"));
    assert!(message.contains("version"));
    assert!(message.contains("/methods/0"));
}

#[test]
fn test_unknown_keys_rejected() {
    let err = load_str(
        r#"{
            "name": "x",
            "version": "1",
            "description": "",
            "groups": [],
            "methods": [],
            "types": {},
            "extra": true
        }"#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::Structural { .. }));
}

#[test]
fn test_custom_validator() {
    struct RejectAll;

    impl StructuralValidator for RejectAll {
        fn validate(&self, _document: &Value) -> Vec<String> {
            vec!["nope".to_string()]
        }
    }

    let loader = Loader::with_validator(RejectAll);
    let err = loader.load_str(TODO, "todo.json").unwrap_err();
    assert_eq!(err.to_string(), "validation failed:\n  - nope");
}

#[test]
fn test_types_named_from_keys() {
    let schema = load_str(
        r#"{
            "name": "users",
            "version": "1",
            "description": "User accounts.",
            "groups": [],
            "methods": [],
            "types": {
                "user": { "properties": [{ "name": "id", "type": "integer" }] },
                "account": {}
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        names(schema.types.values().map(|t| t.name.as_str())),
        ["account", "user"]
    );
}
