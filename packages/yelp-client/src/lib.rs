//! Pure Yelp Fusion REST API client.
//!
//! Covers the one endpoint we need: `/v3/businesses/search`. One request per
//! call, no retries; status codes are surfaced as [`YelpError::Api`] so the
//! caller can decide whose fault a failure was.
//!
//! # Example
//!
//! ```rust,ignore
//! use yelp_client::{SearchParams, SortBy, YelpClient};
//!
//! let client = YelpClient::new("your-api-key", Duration::from_secs(10))?;
//! let params = SearchParams::new("Seattle, WA")
//!     .with_term("restaurants")
//!     .sorted_by(SortBy::Rating);
//!
//! for business in client.search_businesses(&params).await?.businesses {
//!     println!("{} ({:?})", business.name, business.rating);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, YelpError};
pub use types::{Business, Category, Center, Coordinates, Location, SearchParams, SearchResponse, SortBy};

use std::time::Duration;

use types::ErrorEnvelope;

const BASE_URL: &str = "https://api.yelp.com";

pub struct YelpClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YelpClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(YelpError::Config("API key is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| YelpError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Search businesses around a location.
    pub async fn search_businesses(&self, params: &SearchParams) -> Result<SearchResponse> {
        let url = format!("{}/v3/businesses/search", self.base_url);
        tracing::debug!(location = %params.location, term = ?params.term, "Yelp business search");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(YelpError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| YelpError::Parse(e.to_string()))?;
        tracing::debug!(count = parsed.businesses.len(), total = parsed.total, "Yelp search returned");

        Ok(parsed)
    }
}

/// Pull the human-readable description out of Yelp's error envelope.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match (envelope.error.code, envelope.error.description) {
            (Some(code), Some(description)) => format!("{}: {}", code, description),
            (Some(code), None) => code,
            (None, Some(description)) => description,
            (None, None) => body.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_config_error() {
        let result = YelpClient::new("  ", Duration::from_secs(1));
        assert!(matches!(result, Err(YelpError::Config(_))));
    }

    #[test]
    fn test_error_message_uses_envelope() {
        let body = r#"{"error": {"code": "TOKEN_INVALID", "description": "Invalid access token"}}"#;
        assert_eq!(error_message(body), "TOKEN_INVALID: Invalid access token");
        assert_eq!(error_message("upstream exploded"), "upstream exploded");
    }
}
