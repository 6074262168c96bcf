//! Common error types for dino-compare

use thiserror::Error;

/// Common result type for dino-compare operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across dino-compare crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input in an otherwise well-formed request
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
