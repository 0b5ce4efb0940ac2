//! Error types for declaring schemas and mapping attributes.

use thiserror::Error;

use crate::descriptor::ScalarKind;

#[derive(Debug, Error)]
pub enum Error {
    // Decoding errors
    #[error("{type_name}: cannot place {found} input without a default attribute")]
    InvalidRootShape {
        type_name: String,
        found: &'static str,
    },
    #[error("{type_name}.{attribute}: expected a sequence, got {found}")]
    ExpectedSequence {
        type_name: String,
        attribute: String,
        found: &'static str,
    },
    #[error("{type_name}.{attribute}: expected timestamp text, got {found}")]
    ExpectedTimestamp {
        type_name: String,
        attribute: String,
        found: &'static str,
    },
    #[error(transparent)]
    Timestamp(#[from] chrono::ParseError),
    #[error("cannot cast {found} to {kind}")]
    Cast { kind: ScalarKind, found: String },

    // Declaration errors
    #[error("{type_name}: cannot make {attempted} the default attribute, {existing} already is")]
    MultipleDefaults {
        type_name: String,
        existing: String,
        attempted: String,
    },
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("{type_name}: unknown attribute {attribute}")]
    UnknownAttribute { type_name: String, attribute: String },

    // Encoding errors
    #[error("cannot encode a {found} record with the {expected} codec")]
    TypeMismatch { expected: String, found: String },

    // Schema definition errors
    #[error("invalid schema definition: {0}")]
    Definition(String),
    #[error("schema definition is not valid JSON: {0}")]
    DefinitionJson(#[from] serde_json::Error),
    #[error("schema definition is not valid YAML: {0}")]
    DefinitionYaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
