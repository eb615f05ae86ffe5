use thiserror::Error;

#[derive(Error, Debug)]
pub enum XdrpcError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse JSON request: {0}")]
    Parse(String),

    #[error("Missing required parameter: {0}")]
    InvalidArgument(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, XdrpcError>;
