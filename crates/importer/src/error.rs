use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),

    #[error("Event fetch failed with status {status}: {body}")]
    FetchFailed { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Import error: {0}")]
    ImportError(String),
}
