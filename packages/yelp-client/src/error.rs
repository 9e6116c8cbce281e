//! Error types for the Yelp client.

use thiserror::Error;

/// Result type for Yelp client operations.
pub type Result<T> = std::result::Result<T, YelpError>;

/// Yelp client errors.
#[derive(Debug, Error)]
pub enum YelpError {
    /// Configuration error (missing API key, HTTP client could not be built)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the Fusion API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Body was not the JSON shape we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

impl YelpError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, YelpError::Network(e) if e.is_timeout())
    }
}
