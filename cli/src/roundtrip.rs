use attributes::{Decoder, Encoder};
use clap::Args;

use crate::error::{Error, Result};
use crate::output::InputFormat;
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
}

/// Decodes and re-encodes the document. Symbol and text keys are treated as
/// equal; everything else must match exactly.
pub(crate) fn execute(config: Config) -> Result<()> {
    let schema = load_schema(&config.target.schema)?;
    let codec = schema.codec(&config.target.type_name)?;
    let input = read_document(config.file.as_deref(), config.input_format)?;

    let encoded = codec.decode(&input)?.encode()?;

    if encoded.canonical_keys() != input.canonical_keys() {
        return Err(Error::RoundTripMismatch {
            type_name: codec.type_name().to_string(),
            expected: input.to_string(),
            actual: encoded.to_string(),
        });
    }

    println!("{}: round trip ok", codec.type_name());
    Ok(())
}
