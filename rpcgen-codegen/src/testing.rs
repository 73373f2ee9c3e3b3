//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use rpcgen_ir::Schema;

/// A small to-do list schema exercising references, arrays, required and
/// read-only fields, groups and examples.
pub const TODO_SCHEMA: &str = include_str!("fixtures/todo.json");

/// Load [`TODO_SCHEMA`] through the real loader.
///
/// # Panics
///
/// Panics if the fixture fails to load, which is a bug in the fixture.
pub fn todo_schema() -> Schema {
    match rpcgen_schema::load_str_with_filename(TODO_SCHEMA, "todo.json") {
        Ok(schema) => schema,
        Err(err) => panic!("todo fixture failed to load: {}", err),
    }
}

/// Load a schema from a JSON string, panicking on failure.
pub fn schema_from_str(content: &str) -> Schema {
    match rpcgen_schema::load_str(content) {
        Ok(schema) => schema,
        Err(err) => panic!("fixture failed to load: {}", err),
    }
}
