use clap::Args;
use eyre::Result;
use rpcgen_codegen_typescript::{TsClient, TsTypes};

use super::{OutputArgs, SchemaArgs};

#[derive(Args)]
pub struct TsTypesCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl TsTypesCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        self.output.emit(&TsTypes::new(), &schema)
    }
}

#[derive(Args)]
pub struct TsClientCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Module specifier the client imports its types from
    #[arg(long, default_value = "./types")]
    pub types: String,
}

impl TsClientCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        self.output.emit(&TsClient::new(&self.types), &schema)
    }
}
