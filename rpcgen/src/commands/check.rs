use clap::Args;
use eyre::Result;

use super::SchemaArgs;

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;

        println!("✓ {} is valid\n", self.schema.schema.display());
        println!("  {} v{}", schema.name, schema.version);
        if schema.description.is_empty() {
            println!();
        } else {
            println!("  {}\n", schema.description);
        }

        println!("  {}", plural(schema.groups.len(), "group"));
        println!("  {}", plural(schema.methods.len(), "method"));
        println!("  {}", plural(schema.types.len(), "type"));

        Ok(())
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
