use clap::Args;
use eyre::Result;
use rpcgen_codegen_go::{DEFAULT_RUNTIME, GoClient, GoServer, GoTypes};

use super::{OutputArgs, SchemaArgs};

#[derive(Args)]
pub struct GoTypesCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Go package name of the generated file
    #[arg(long, default_value = "api")]
    pub package: String,

    /// Emit Validate() methods
    #[arg(long)]
    pub validate: bool,

    /// Import path of the runtime package
    #[arg(long, default_value = DEFAULT_RUNTIME)]
    pub runtime: String,
}

impl GoTypesCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let backend = GoTypes::new(&self.package)
            .validate(self.validate)
            .runtime(&self.runtime);
        self.output.emit(&backend, &schema)
    }
}

#[derive(Args)]
pub struct GoServerCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Go package name of the generated file
    #[arg(long, default_value = "api")]
    pub package: String,

    /// Import path of the generated types, when they live in another package
    #[arg(long)]
    pub types: Option<String>,

    /// Attach a logger with the method name and inputs to each call
    #[arg(long)]
    pub tracing: bool,

    /// Import path of the runtime package
    #[arg(long, default_value = DEFAULT_RUNTIME)]
    pub runtime: String,
}

impl GoServerCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let mut backend = GoServer::new(&self.package)
            .tracing(self.tracing)
            .runtime(&self.runtime);
        if let Some(types) = &self.types {
            backend = backend.types_package(types);
        }
        self.output.emit(&backend, &schema)
    }
}

#[derive(Args)]
pub struct GoClientCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Go package name of the generated file
    #[arg(long, default_value = "client")]
    pub package: String,
}

impl GoClientCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        self.output.emit(&GoClient::new(&self.package), &schema)
    }
}
