use clap::Args;
use eyre::Result;
use rpcgen_codegen_rust::{DEFAULT_TYPES_PATH, RustClient, RustServer, RustTypes};

use super::{OutputArgs, SchemaArgs};

#[derive(Args)]
pub struct RustTypesCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Implement rpcgen_runtime::Validate for every type
    #[arg(long)]
    pub validate: bool,
}

impl RustTypesCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        self.output
            .emit(&RustTypes::new().validate(self.validate), &schema)
    }
}

#[derive(Args)]
pub struct RustServerCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Module path of the generated types
    #[arg(long, default_value = DEFAULT_TYPES_PATH)]
    pub types: String,

    /// Apply defaults and validate inputs before calling the service
    #[arg(long)]
    pub validate: bool,

    /// Wrap each call in a tracing span carrying the method and inputs
    #[arg(long)]
    pub tracing: bool,
}

impl RustServerCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let backend = RustServer::new()
            .types_path(&self.types)
            .validate(self.validate)
            .tracing(self.tracing);
        self.output.emit(&backend, &schema)
    }
}

#[derive(Args)]
pub struct RustClientCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Module path of the generated types
    #[arg(long, default_value = DEFAULT_TYPES_PATH)]
    pub types: String,
}

impl RustClientCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        self.output
            .emit(&RustClient::new().types_path(&self.types), &schema)
    }
}
