use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("attribute mapping error: {0}")]
    Attributes(#[from] attributes::error::Error),

    #[error("{type_name}: round trip changed the document\n  input:   {expected}\n  encoded: {actual}")]
    RoundTripMismatch {
        type_name: String,
        expected: String,
        actual: String,
    },
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
