use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported runtime endpoint: {0}")]
    Endpoint(String),

    #[error("Invalid container id: {0:?}")]
    InvalidId(String),

    #[error("Malformed request: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Http(#[from] hyper::Error),

    #[error("Malformed response: {0}")]
    Response(String),

    #[error("Runtime returned HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Runtime did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown output format: {0}")]
    Format(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
