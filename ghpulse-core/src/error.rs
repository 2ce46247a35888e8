//! Error types for ghpulse-core

use thiserror::Error;

/// Main error type for the ghpulse-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Dashboard requested without a username
    #[error("Please enter a GitHub username.")]
    MissingUsername,

    /// Category tag outside the known set (persona, rarity, achievement category)
    #[error("unknown {kind}: {value}")]
    UnknownTag { kind: &'static str, value: String },
}

/// Result type alias for ghpulse-core
pub type Result<T> = std::result::Result<T, Error>;
