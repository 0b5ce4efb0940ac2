use std::fs;
use std::io::{self, Read};

use attributes::{Definition, Schema};
use clap::Args;
use tree::Node;

use crate::error::Result;
use crate::output::InputFormat;

/// Schema file and the type to map documents through
#[derive(Args)]
pub(crate) struct Target {
    /// Path to the schema definition (JSON, or YAML for .yaml/.yml)
    #[arg(short, long)]
    pub(crate) schema: String,

    /// Declared type the document maps to
    #[arg(short = 't', long = "type")]
    pub(crate) type_name: String,
}

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read and parse the document to decode. The format follows the file
/// extension unless `format` is given.
pub(crate) fn read_document(file: Option<&str>, format: Option<InputFormat>) -> Result<Node> {
    let contents = String::from_utf8(read_input(file)?)?;
    format
        .unwrap_or_else(|| InputFormat::from_path(file))
        .parse(&contents)
}

pub(crate) fn load_schema(path: &str) -> Result<Schema> {
    let contents = fs::read_to_string(path)?;
    let definition = match InputFormat::from_path(Some(path)) {
        InputFormat::Yaml => Definition::from_yaml(&contents)?,
        InputFormat::Json => Definition::from_json(&contents)?,
    };
    tracing::debug!(path, "schema definition loaded");
    Ok(definition.build()?)
}
