use clap::{Args, ValueEnum};
use eyre::Result;
use rpcgen_codegen_markdown::{Layout, MarkdownDocs};

use super::{OutputArgs, SchemaArgs};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LayoutArg {
    /// One page per type and per method, with index pages
    #[default]
    PerFile,
    /// A types page and a methods page with anchors
    SinglePage,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::PerFile => Layout::PerFile,
            LayoutArg::SinglePage => Layout::SinglePage,
        }
    }
}

#[derive(Args)]
pub struct MdDocsCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// How the documentation is split into files
    #[arg(long, value_enum, default_value_t)]
    pub layout: LayoutArg,

    /// Document private types and methods too
    #[arg(long)]
    pub include_private: bool,
}

impl MdDocsCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let backend = MarkdownDocs::new()
            .layout(self.layout.into())
            .include_private(self.include_private);
        self.output.emit(&backend, &schema)
    }
}
