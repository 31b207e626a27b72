use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while loading the metadata document
#[derive(Error, Debug)]
pub enum PageError {
    #[error("metadata document not found: {path}")]
    NotFound { path: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching {path}")]
    UnexpectedStatus { status: StatusCode, path: String },

    #[error("invalid metadata document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, PageError>;
