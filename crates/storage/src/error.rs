use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to load service credential: {0}")]
    Credential(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse store response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid path segment {0:?}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
