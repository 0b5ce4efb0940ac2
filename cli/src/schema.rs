use clap::Args;

use crate::error::Result;
use crate::utils::load_schema;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the schema definition (JSON, or YAML for .yaml/.yml)
    #[arg(short, long)]
    schema: String,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let schema = load_schema(&config.schema)?;
    print!("{}", schema);
    Ok(())
}
