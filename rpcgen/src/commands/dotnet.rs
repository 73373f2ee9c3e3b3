use clap::Args;
use eyre::Result;
use rpcgen_codegen_dotnet::DotnetClient;

use super::{OutputArgs, SchemaArgs};

#[derive(Args)]
pub struct DotnetClientCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Namespace of the generated classes
    #[arg(long, default_value = "MyNamespace")]
    pub namespace: String,

    /// Name of the client class, which also names the file
    #[arg(long = "class", default_value = "Client")]
    pub class_name: String,
}

impl DotnetClientCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let backend = DotnetClient::new(&self.namespace).class_name(&self.class_name);
        self.output.emit(&backend, &schema)
    }
}
