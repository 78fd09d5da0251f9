//! Error types for chores-core

use thiserror::Error;

/// Result type alias using chores-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chores-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API returned a non-success status
    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
