//! Client for Instagram's hashtag web API.
//!
//! This is the same unofficial endpoint the Instagram web app uses to render
//! `/explore/tags/{tag}/`. It needs no API key, but Instagram increasingly
//! refuses anonymous callers; pass a browser `sessionid` cookie to get
//! reliable results.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_client::InstagramClient;
//!
//! let client = InstagramClient::new(Duration::from_secs(15))?
//!     .with_session_id(std::env::var("INSTAGRAM_SESSION_ID").ok());
//!
//! for media in client.hashtag_media("seattlefood").await? {
//!     println!("{} {}", media.code.unwrap_or_default(), media.caption_text());
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{InstagramError, Result};
pub use types::{CarouselItem, HashtagInfo, Media, MediaLocation, WebInfoResponse};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, USER_AGENT};

const BASE_URL: &str = "https://www.instagram.com";

/// App id the Instagram web client sends; the API rejects requests without it.
const WEB_APP_ID: &str = "936619743392459";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub struct InstagramClient {
    client: reqwest::Client,
    base_url: String,
    session_id: Option<String>,
}

impl InstagramClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("x-ig-app-id", HeaderValue::from_static(WEB_APP_ID));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| InstagramError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            session_id: None,
        })
    }

    /// Attach a logged-in `sessionid` cookie. Blank values are ignored.
    pub fn with_session_id(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_session(&self) -> bool {
        self.session_id.is_some()
    }

    /// Fetch the raw hashtag page.
    pub async fn hashtag_info(&self, tag: &str) -> Result<HashtagInfo> {
        let tag = tag.trim_start_matches('#');
        if tag.is_empty() {
            return Err(InstagramError::Config("hashtag is empty".into()));
        }

        let url = format!("{}/api/v1/tags/web_info/", self.base_url);
        let mut request = self.client.get(&url).query(&[("tag_name", tag)]);
        if let Some(session_id) = &self.session_id {
            request = request.header(COOKIE, format!("sessionid={}", session_id));
        }

        tracing::debug!(tag, authenticated = self.session_id.is_some(), "Fetching hashtag page");
        let resp = request.send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        match status.as_u16() {
            200..=299 => {}
            401 | 403 => return Err(InstagramError::LoginRequired { status: status.as_u16() }),
            404 => return Err(InstagramError::NotFound { tag: tag.to_string() }),
            429 => return Err(InstagramError::RateLimited),
            code => {
                if is_rate_limit_body(&body) {
                    return Err(InstagramError::RateLimited);
                }
                return Err(InstagramError::Api {
                    status: code,
                    message: body,
                });
            }
        }

        let parsed: WebInfoResponse =
            serde_json::from_str(&body).map_err(|e| InstagramError::Parse(e.to_string()))?;
        Ok(parsed.data)
    }

    /// Every media record on a hashtag page, in page order.
    pub async fn hashtag_media(&self, tag: &str) -> Result<Vec<Media>> {
        let info = self.hashtag_info(tag).await?;
        let media: Vec<Media> = info.media().into_iter().cloned().collect();
        tracing::debug!(tag, count = media.len(), "Hashtag media parsed");
        Ok(media)
    }
}

/// Instagram sometimes answers throttled callers with a 400 and a
/// human-readable body instead of a 429.
fn is_rate_limit_body(body: &str) -> bool {
    let lower = body.to_ascii_lowercase();
    lower.contains("please wait a few minutes") || lower.contains("feedback_required")
}
