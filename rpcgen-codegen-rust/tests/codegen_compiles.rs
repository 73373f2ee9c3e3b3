//! Integration tests that verify generated code compiles and serves requests.
//!
//! These tests generate the Rust backends' output into a scratch crate that
//! depends on `rpcgen-runtime` and run cargo on it. They fetch crates from
//! the registry, so they only run on request:
//! `cargo test -p rpcgen-codegen-rust -- --ignored`.

use std::{fs, path::Path, process::Command};

use rpcgen_codegen::{
    generation::generate_all,
    language::Backend,
    testing::{TODO_SCHEMA, schema_from_str},
};
use rpcgen_codegen_rust::{RustClient, RustServer, RustTypes};
use tempfile::TempDir;

fn cargo_toml() -> String {
    let runtime = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../rpcgen-runtime")
        .display()
        .to_string();
    format!(
        r#"[package]
name = "generated"
version = "0.1.0"
edition = "2024"

[dependencies]
bytes = "1"
chrono = {{ version = "0.4", features = ["serde"] }}
http = "1"
reqwest = {{ version = "0.12", default-features = false, features = ["json"] }}
rpcgen-runtime = {{ path = {:?} }}
serde = {{ version = "1", features = ["derive"] }}
serde_json = "1"
tracing = "0.1"

[dev-dependencies]
tokio = {{ version = "1", features = ["macros", "rt"] }}
"#,
        runtime
    )
}

/// A todo service backed by a vector, replacing the generated stub.
const TODO_SERVICE: &str = r#"use std::sync::Mutex;

use http::StatusCode;
use rpcgen_runtime::{Error, RequestContext};

use super::{
    server::Service,
    types::{AddItemInput, GetItemsOutput, Item, RemoveItemInput, RemoveItemOutput},
};

#[derive(Debug, Default)]
pub struct ServiceImpl {
    pub items: Mutex<Vec<Item>>,
}

impl Service for ServiceImpl {
    async fn add_item(&self, _ctx: &RequestContext, input: AddItemInput) -> Result<(), Error> {
        let mut items = self.items.lock().map_err(|_| Error::internal("poisoned"))?;
        let id = items.len() as i64 + 1;
        items.push(Item {
            id,
            text: input.item,
            ..Item::default()
        });
        Ok(())
    }

    async fn get_items(&self, _ctx: &RequestContext) -> Result<GetItemsOutput, Error> {
        let items = self.items.lock().map_err(|_| Error::internal("poisoned"))?;
        Ok(GetItemsOutput {
            items: items.clone(),
        })
    }

    async fn remove_item(
        &self,
        _ctx: &RequestContext,
        input: RemoveItemInput,
    ) -> Result<RemoveItemOutput, Error> {
        let mut items = self.items.lock().map_err(|_| Error::internal("poisoned"))?;
        let Some(pos) = items.iter().position(|item| item.id == input.id) else {
            return Err(Error::new(StatusCode::NOT_FOUND, "not_found", "item not found"));
        };
        Ok(RemoveItemOutput {
            item: Some(Box::new(items.remove(pos))),
        })
    }
}
"#;

/// Requests served through the generated `dispatch`.
const TODO_DISPATCH_TESTS: &str = r##"use bytes::Bytes;
use generated::api::{server::dispatch, service_impl::ServiceImpl};
use http::{Request, StatusCode, header::CONTENT_TYPE};

fn post(path: &str, body: &'static str) -> Request<Bytes> {
    Request::post(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[tokio::test]
async fn add_item_answers_no_content() {
    let service = ServiceImpl::default();
    let res = dispatch(&service, post("/add_item", r#"{ "item": "Buy milk" }"#)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.body(), "");

    let res = dispatch(&service, post("/get_items", "")).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.body().contains(""text": "Buy milk""), "{}", res.body());
}

#[tokio::test]
async fn malformed_body_never_reaches_the_service() {
    let service = ServiceImpl::default();
    let res = dispatch(&service, post("/add_item", "{ "item": ")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.body().contains("Failed to parse malformed request body, must be a valid JSON object"));
    assert!(service.items.lock().unwrap().is_empty());
}

#[tokio::test]
async fn required_input_is_validated() {
    let service = ServiceImpl::default();
    let res = dispatch(&service, post("/add_item", "{}")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.body().contains(""message": "item is required""), "{}", res.body());
}

#[tokio::test]
async fn service_errors_keep_their_status() {
    let service = ServiceImpl::default();
    let res = dispatch(&service, post("/remove_item", "{ "id": 7 }")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
"##;

/// Write the scratch crate with the generated files under `src/api`.
///
/// Files already present in `src/api` are only replaced when the backend
/// always overwrites them.
fn scaffold(root: &Path, schema_json: &str, existing: &[(&str, &str)]) {
    let schema = schema_from_str(schema_json);
    let types = RustTypes::new().validate(true);
    let server = RustServer::new().validate(true).tracing(true);
    let client = RustClient::new();
    let backends: [&dyn Backend; 3] = [&types, &server, &client];
    let outputs = generate_all(&schema, &backends).expect("Failed to generate code");

    let api = root.join("src/api");
    fs::create_dir_all(&api).expect("Failed to create src/api");

    fs::write(root.join("Cargo.toml"), cargo_toml()).expect("Failed to write Cargo.toml");
    fs::write(root.join("src/lib.rs"), "pub mod api;\n").expect("Failed to write lib.rs");
    fs::write(
        api.join("mod.rs"),
        "pub mod client;\npub mod server;\npub mod service_impl;\npub mod types;\n",
    )
    .expect("Failed to write mod.rs");

    for (path, content) in existing {
        fs::write(api.join(path), content).expect("Failed to write existing file");
    }
    for file in outputs.iter().flat_map(|output| output.files.iter()) {
        file.write(&api).expect("Failed to write generated file");
    }
}

/// Run cargo in the scratch crate, dumping the generated files on failure.
fn run_cargo(root: &Path, args: &[&str]) {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .output()
        .expect("Failed to run cargo");

    if !status.status.success() {
        let stdout = String::from_utf8_lossy(&status.stdout);
        let stderr = String::from_utf8_lossy(&status.stderr);

        eprintln!("\n=== Generated files ===");
        print_generated_files(&root.join("src/api"));

        panic!(
            "cargo {} failed!\n\nstdout:\n{}\n\nstderr:\n{}",
            args.join(" "),
            stdout,
            stderr
        );
    }
}

/// Generate code from a schema and verify it compiles with `cargo check`
fn assert_generated_code_compiles(schema_json: &str) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    scaffold(temp_dir.path(), schema_json, &[]);
    run_cargo(temp_dir.path(), &["check", "--message-format=short"]);
}

/// Print all generated files for debugging
fn print_generated_files(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        eprintln!("{}", path.display());
        if let Ok(content) = fs::read_to_string(&path) {
            for line in content.lines() {
                eprintln!("  | {}", line);
            }
        }
    }
}

#[test]
#[ignore = "runs cargo test and needs registry access"]
fn test_todo_server_serves_requests() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    scaffold(root, TODO_SCHEMA, &[("service_impl.rs", TODO_SERVICE)]);

    let kept = fs::read_to_string(root.join("src/api/service_impl.rs")).unwrap();
    assert_eq!(kept, TODO_SERVICE);

    fs::create_dir_all(root.join("tests")).unwrap();
    fs::write(root.join("tests/dispatch.rs"), TODO_DISPATCH_TESTS).unwrap();
    run_cargo(root, &["test", "--message-format=short"]);
}

#[test]
#[ignore = "runs cargo check and needs registry access"]
fn test_todo_compiles() {
    assert_generated_code_compiles(TODO_SCHEMA);
}

#[test]
#[ignore = "runs cargo check and needs registry access"]
fn test_defaults_enums_and_recursion_compile() {
    assert_generated_code_compiles(
        r##"{
            "name": "tasks",
            "version": "1",
            "description": "Task tracking.",
            "groups": [],
            "methods": [
                {
                    "name": "create_task",
                    "inputs": [
                        { "name": "title", "type": "string", "required": true },
                        { "name": "status", "type": "string", "enum": ["open", "closed"], "default": "open" },
                        { "name": "priority", "type": "integer", "default": 3 },
                        { "name": "weight", "type": "float", "default": 0.5 },
                        { "name": "labels", "type": "object" },
                        { "name": "subtasks", "type": "array", "items": { "$ref": "#/types/task" } }
                    ],
                    "outputs": [{ "name": "task", "type": { "$ref": "#/types/task" } }]
                },
                { "name": "ping" }
            ],
            "types": {
                "task": {
                    "properties": [
                        { "name": "type", "type": "string" },
                        { "name": "dueAt", "type": "timestamp" },
                        { "name": "parent", "type": { "$ref": "#/types/task" } },
                        { "name": "subtasks", "type": "array", "items": { "$ref": "#/types/task" } },
                        { "name": "tags", "type": "array", "items": { "type": "string" } },
                        { "name": "done", "type": "boolean" }
                    ]
                }
            }
        }"##,
    );
}
