mod check;
mod completions;
mod dotnet;
mod go;
mod markdown;
mod rust;
mod typescript;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use dotnet::DotnetClientCommand;
use eyre::{Result, WrapErr, bail};
use go::{GoClientCommand, GoServerCommand, GoTypesCommand};
use markdown::MdDocsCommand;
use rpcgen_codegen::{
    language::Backend,
    pipeline::{GroupPolicy, Pipeline, ValidatePhase},
};
use rpcgen_core::{File, WriteResult};
use rpcgen_ir::Schema;
use rust::{RustClientCommand, RustServerCommand, RustTypesCommand};
use typescript::{TsClientCommand, TsTypesCommand};

/// Extension trait for exiting on loader errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for rpcgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "rpcgen")]
#[command(version)]
#[command(about = "Generate RPC clients, servers and documentation from a JSON schema")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::GoTypes(cmd) => cmd.run(),
            Commands::GoServer(cmd) => cmd.run(),
            Commands::GoClient(cmd) => cmd.run(),
            Commands::TsTypes(cmd) => cmd.run(),
            Commands::TsClient(cmd) => cmd.run(),
            Commands::RustTypes(cmd) => cmd.run(),
            Commands::RustServer(cmd) => cmd.run(),
            Commands::RustClient(cmd) => cmd.run(),
            Commands::DotnetClient(cmd) => cmd.run(),
            Commands::MdDocs(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a schema without generating code
    Check(CheckCommand),

    /// Generate Go types
    GoTypes(GoTypesCommand),

    /// Generate a Go HTTP server router
    GoServer(GoServerCommand),

    /// Generate a Go HTTP client
    GoClient(GoClientCommand),

    /// Generate TypeScript types
    TsTypes(TsTypesCommand),

    /// Generate a TypeScript fetch client
    TsClient(TsClientCommand),

    /// Generate Rust types
    RustTypes(RustTypesCommand),

    /// Generate a Rust server dispatcher and implementer stub
    RustServer(RustServerCommand),

    /// Generate a Rust reqwest client
    RustClient(RustClientCommand),

    /// Generate a C# HttpClient client with its model classes
    DotnetClient(DotnetClientCommand),

    /// Generate markdown documentation
    MdDocs(MdDocsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where the schema comes from and how strictly it is checked.
#[derive(Args)]
pub(crate) struct SchemaArgs {
    /// Path to the schema document
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Fail when a method names a group that is not declared
    #[arg(long)]
    pub reject_unknown_groups: bool,
}

impl SchemaArgs {
    /// Load the schema and run the validation pipeline over it.
    ///
    /// Loader errors are printed as diagnostics and exit the process.
    pub fn load(&self) -> Result<Schema> {
        let schema = rpcgen_schema::load(&self.schema).unwrap_or_exit();

        let policy = if self.reject_unknown_groups {
            GroupPolicy::Reject
        } else {
            GroupPolicy::Omit
        };
        let ctx = Pipeline::new()
            .validate(ValidatePhase::new().group_policy(policy))
            .run(schema)
            .wrap_err_with(|| format!("{} is invalid", self.schema.display()))?;

        Ok(ctx.into_schema())
    }
}

/// Where generated files go.
#[derive(Args)]
pub(crate) struct OutputArgs {
    /// Directory to write generated files into; single files go to stdout
    /// when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Run `backend` over `schema` and deliver its files.
    pub fn emit(&self, backend: &dyn Backend, schema: &Schema) -> Result<()> {
        let files = backend
            .generate(schema)
            .wrap_err_with(|| format!("{} failed", backend.name()))?;
        tracing::debug!(backend = backend.name(), files = files.len(), "generated");

        match (&self.output, files.as_slice()) {
            (Some(dir), files) => write_files(dir, files),
            (None, [file]) => {
                print!("{}", file.content());
                Ok(())
            }
            (None, files) => bail!(
                "{} writes {} files; pass --output <dir>",
                backend.name(),
                files.len()
            ),
        }
    }
}

fn write_files(dir: &Path, files: &[File]) -> Result<()> {
    for file in files {
        let path = dir.join(file.path());
        match file.write(dir)? {
            WriteResult::Written => println!("  + {}", path.display()),
            WriteResult::Skipped => println!("  = {} (exists, kept)", path.display()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::CommandFactory;
    use rpcgen_codegen_go::GoTypes;
    use rpcgen_codegen_rust::RustServer;
    use tempfile::TempDir;

    use super::*;

    const SCHEMA: &str = r#"{
        "name": "todo",
        "version": "1",
        "description": "A to-do list API.",
        "groups": [],
        "methods": [
            { "name": "ping", "description": "checks the service.", "group": "misc" }
        ],
        "types": {}
    }"#;

    fn schema_file(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("schema.json");
        fs::write(&path, SCHEMA).unwrap();
        path
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommand_flags() {
        let cli = Cli::try_parse_from([
            "rpcgen",
            "go-server",
            "--schema",
            "api.json",
            "--output",
            "out",
            "--package",
            "todo",
            "--tracing",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::GoServer(_)));

        let cli = Cli::try_parse_from([
            "rpcgen",
            "dotnet-client",
            "--namespace",
            "Todo",
            "--class",
            "TodoClient",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::DotnetClient(_)));

        assert!(Cli::try_parse_from(["rpcgen", "md-docs", "--layout", "single-page"]).is_ok());
        assert!(Cli::try_parse_from(["rpcgen", "md-docs", "--layout", "wiki"]).is_err());
    }

    #[test]
    fn test_unknown_group_policy() {
        let temp = TempDir::new().unwrap();
        let path = schema_file(&temp);

        let lenient = SchemaArgs {
            schema: path.clone(),
            reject_unknown_groups: false,
        };
        assert_eq!(lenient.load().unwrap().methods.len(), 1);

        let strict = SchemaArgs {
            schema: path,
            reject_unknown_groups: true,
        };
        let err = strict.load().unwrap_err();
        assert!(format!("{:?}", err).contains("misc"), "{:?}", err);
    }

    #[test]
    fn test_emit_writes_into_output_dir() {
        let temp = TempDir::new().unwrap();
        let schema = rpcgen_schema::load(schema_file(&temp)).unwrap();
        let out = temp.path().join("gen");

        let output = OutputArgs {
            output: Some(out.clone()),
        };
        output.emit(&RustServer::new(), &schema).unwrap();

        assert!(out.join("server.rs").exists());
        fs::write(out.join("service_impl.rs"), "// mine").unwrap();
        output.emit(&RustServer::new(), &schema).unwrap();
        assert_eq!(fs::read_to_string(out.join("service_impl.rs")).unwrap(), "// mine");
    }

    #[test]
    fn test_multi_file_backend_needs_output_dir() {
        let temp = TempDir::new().unwrap();
        let schema = rpcgen_schema::load(schema_file(&temp)).unwrap();

        let stdout = OutputArgs { output: None };
        let err = stdout.emit(&RustServer::new(), &schema).unwrap_err();
        assert_eq!(err.to_string(), "rust-server writes 2 files; pass --output <dir>");

        assert!(stdout.emit(&GoTypes::new("api"), &schema).is_ok());
    }
}
