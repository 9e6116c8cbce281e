//! Error types for the Foursquare client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FoursquareError>;

#[derive(Debug, Error)]
pub enum FoursquareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl FoursquareError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FoursquareError::Network(e) if e.is_timeout())
    }
}
