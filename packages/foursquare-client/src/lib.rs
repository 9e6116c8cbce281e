//! Pure Foursquare Places (v3) REST API client.
//!
//! Only place search is implemented. Foursquare v3 takes the raw API key in
//! the `Authorization` header, without a `Bearer` prefix.

pub mod error;
pub mod types;

pub use error::{FoursquareError, Result};
pub use types::{Category, Geocodes, LatLng, Location, Place, SearchParams, SearchResponse};

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use types::ErrorBody;

const BASE_URL: &str = "https://api.foursquare.com";

pub struct FoursquareClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FoursquareClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FoursquareError::Config("API key is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FoursquareError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn search_places(&self, params: &SearchParams) -> Result<SearchResponse> {
        let url = format!("{}/v3/places/search", self.base_url);
        tracing::debug!(near = %params.near, query = ?params.query, "Foursquare place search");

        let resp = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.api_key)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            return Err(FoursquareError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| FoursquareError::Parse(e.to_string()))?;
        tracing::debug!(count = parsed.results.len(), "Foursquare search returned");

        Ok(parsed)
    }
}
