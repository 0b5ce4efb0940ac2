use attributes::{Decoder, Encoder};
use clap::Args;

use crate::error::Result;
use crate::output::{InputFormat, OutputFormat, render};
use crate::utils::{Target, load_schema, read_document};

#[derive(Args)]
pub(crate) struct Config {
    #[command(flatten)]
    target: Target,

    /// Path to the document. If not specified, reads from stdin
    file: Option<String>,

    /// Document format, overriding the file extension
    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,

    /// Output format: the decoded record (text) or its re-encoding
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let schema = load_schema(&config.target.schema)?;
    let codec = schema.codec(&config.target.type_name)?;
    let input = read_document(config.file.as_deref(), config.input_format)?;

    let record = codec.decode(&input)?;

    match config.output {
        OutputFormat::Text => print!("{}", record),
        format => print!("{}", render(&record.encode()?, format)?),
    }

    Ok(())
}
