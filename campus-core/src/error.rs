//! Error types for the campus app.

use thiserror::Error;

/// Errors that can occur in campus operations.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Weather request failed: {0}")]
    Weather(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Please write something before posting!")]
    EmptyPost,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for campus operations.
pub type CampusResult<T> = Result<T, CampusError>;
