//! Error types for the Instagram client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InstagramError>;

#[derive(Debug, Error)]
pub enum InstagramError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 401/403: hashtag pages need a logged-in session cookie
    #[error("login required (status {status})")]
    LoginRequired { status: u16 },

    /// 429 or a `feedback_required`/`wait a few minutes` body
    #[error("rate limited by Instagram")]
    RateLimited,

    #[error("hashtag not found: #{tag}")]
    NotFound { tag: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl InstagramError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, InstagramError::Network(e) if e.is_timeout())
    }
}
