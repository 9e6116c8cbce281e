//! Instagram hashtag adapter (implements BasePostProvider).
//!
//! A location becomes three hashtags, one per post category:
//!
//! | Tag              | Category |
//! |------------------|----------|
//! | `{slug}food`     | eat      |
//! | `{slug}`         | do       |
//! | `{slug}hotel`    | sleep    |
//!
//! Tags are fetched one after another. Instagram throttles bursts from the
//! same client much harder than it throttles a slow trickle.
//!
//! The whole plan shares one fetch budget that ends a little before the
//! provider timeout. A tag that would run past it is abandoned and the posts
//! already collected are returned.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use instagram_client::{InstagramClient, InstagramError, Media};
use tokio::time::Instant;

use super::{BasePostProvider, PostBatch, ProviderError, ProviderTimeouts};
use crate::common::{SecretString, ValidationError};
use crate::domains::search::models::{
    Coordinates, NewPost, Post, PostCategory, Provider, MAX_POST_LIMIT,
};

/// Cap on a single hashtag request.
const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct InstagramAdapter {
    client: InstagramClient,
    budget: Duration,
}

impl InstagramAdapter {
    pub fn new(
        session_id: Option<&SecretString>,
        timeout: Duration,
    ) -> Result<Self, InstagramError> {
        let client = InstagramClient::new(timeout.min(MAX_REQUEST_TIMEOUT))?
            .with_session_id(session_id.map(|s| s.expose().to_string()));
        if !client.has_session() {
            tracing::warn!("INSTAGRAM_SESSION_ID not set; hashtag pages may be refused");
        }
        Ok(Self::from_client(client).with_timeout(timeout))
    }

    pub fn from_client(client: InstagramClient) -> Self {
        Self {
            client,
            budget: fetch_budget(ProviderTimeouts::default().instagram),
        }
    }

    /// Fit every hashtag request inside the provider `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.budget = fetch_budget(timeout);
        self
    }
}

/// Nine tenths of the provider timeout, so partial results are handed back
/// before the caller gives up on the whole call.
fn fetch_budget(timeout: Duration) -> Duration {
    timeout - timeout / 10
}

/// Lowercased alphanumerics of the location ("São Paulo, BR" -> "sãopaulobr").
pub fn slug(location: &str) -> String {
    location
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Hashtags to fetch for a location, in fetch order. Empty when the location
/// has no usable characters.
pub fn hashtag_plan(location: &str) -> Vec<(String, PostCategory)> {
    let slug = slug(location);
    if slug.is_empty() {
        return Vec::new();
    }
    vec![
        (format!("{}food", slug), PostCategory::Eat),
        (slug.clone(), PostCategory::Do),
        (format!("{}hotel", slug), PostCategory::Sleep),
    ]
}

pub fn map_media(media: &Media, category: PostCategory) -> Result<Post, ValidationError> {
    let location = media.location.as_ref();
    let coordinates = location
        .and_then(|l| Coordinates::from_optional(l.lat, l.lng).ok())
        .flatten();

    Post::new(NewPost {
        shortcode: media.code.clone().unwrap_or_default(),
        image_url: media.image_url().unwrap_or_default().to_string(),
        caption: media.caption_text().to_string(),
        like_count: media.like_count.unwrap_or(0).max(0) as u64,
        author: media.username().unwrap_or_default().to_string(),
        taken_at: media.taken_at(),
        location_name: location.and_then(|l| l.name.clone()),
        coordinates,
        category,
    })
}

fn provider_error(error: InstagramError) -> ProviderError {
    match error {
        InstagramError::Parse(reason) => ProviderError::Malformed {
            provider: Provider::Instagram,
            reason,
        },
        e if e.is_timeout() => {
            ProviderError::unavailable(Provider::Instagram, "request timed out")
        }
        e => ProviderError::unavailable(Provider::Instagram, e.to_string()),
    }
}

/// What one hashtag request produced.
enum TagOutcome {
    Media(Vec<Media>),
    Failed(ProviderError),
}

impl InstagramAdapter {
    async fn fetch_tag(&self, tag: &str, deadline: Instant) -> TagOutcome {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return TagOutcome::Failed(ProviderError::unavailable(
                Provider::Instagram,
                "out of time before request",
            ));
        }

        match tokio::time::timeout(remaining, self.client.hashtag_media(tag)).await {
            Ok(Ok(media)) => TagOutcome::Media(media),
            Ok(Err(InstagramError::NotFound { .. })) => TagOutcome::Media(Vec::new()),
            Ok(Err(e)) => TagOutcome::Failed(provider_error(e)),
            Err(_) => TagOutcome::Failed(ProviderError::timed_out(Provider::Instagram, remaining)),
        }
    }
}

#[async_trait]
impl BasePostProvider for InstagramAdapter {
    async fn fetch_posts(&self, query: &str, limit: usize) -> Result<PostBatch, ProviderError> {
        let limit = limit.clamp(1, MAX_POST_LIMIT);
        let plan = hashtag_plan(query);
        if plan.is_empty() {
            tracing::debug!(query, "No hashtag can be built from query");
            return Ok(PostBatch::default());
        }

        let deadline = Instant::now() + self.budget;
        let per_tag = limit.div_ceil(plan.len());
        let mut seen = HashSet::new();
        let mut batch = PostBatch::default();
        let mut succeeded = 0usize;
        let mut last_error = None;

        for (tag, category) in &plan {
            let media = match self.fetch_tag(tag, deadline).await {
                TagOutcome::Media(media) => media,
                TagOutcome::Failed(e) => {
                    tracing::warn!(tag = %tag, error = %e, "Hashtag fetch failed");
                    batch.warnings.push(format!("No Instagram results for #{}: {}", tag, e));
                    last_error = Some(e);
                    continue;
                }
            };
            succeeded += 1;

            let mut taken = 0usize;
            for item in &media {
                if taken == per_tag {
                    break;
                }
                match map_media(item, *category) {
                    Ok(post) => {
                        if seen.insert(post.shortcode().to_string()) {
                            batch.posts.push(post);
                            taken += 1;
                        }
                    }
                    Err(e) => tracing::debug!(tag = %tag, error = %e, "Skipping media"),
                }
            }
            if taken == 0 {
                batch.warnings.push(format!("No Instagram results for #{}", tag));
            }
        }

        if succeeded == 0 {
            if let Some(e) = last_error {
                return Err(e);
            }
        }

        batch.posts.truncate(limit);
        tracing::info!(
            query,
            tags = plan.len(),
            count = batch.posts.len(),
            "Instagram fetch complete"
        );
        Ok(batch)
    }
}
