// TestDependencies - mock providers for testing
//
// Provides mock providers that can be injected into ServerDeps for tests.
// Each mock records the calls it receives so tests can assert that a
// provider was (or was not) reached.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{
    BasePlaceProvider, BasePostProvider, PlaceBatch, PostBatch, ProviderError, ServerDeps,
};
use crate::domains::search::models::{
    Coordinates, NewPlace, NewPost, Place, PlaceSource, Post, PostCategory, SearchCategory,
};

// =============================================================================
// Mock Place Provider (Yelp / Foursquare)
// =============================================================================

/// Arguments captured from a search_places call
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCall {
    pub location: String,
    pub category: SearchCategory,
}

pub struct MockPlaceProvider {
    source: PlaceSource,
    batch: Mutex<PlaceBatch>,
    error: Mutex<Option<ProviderError>>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<PlaceCall>>>,
}

impl MockPlaceProvider {
    pub fn new(source: PlaceSource) -> Self {
        Self {
            source,
            batch: Mutex::new(PlaceBatch::default()),
            error: Mutex::new(None),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_places(self, places: Vec<Place>) -> Self {
        self.batch.lock().unwrap().places = places;
        self
    }

    pub fn with_center(self, center: Coordinates) -> Self {
        self.batch.lock().unwrap().center = Some(center);
        self
    }

    /// Every call fails with this error
    pub fn failing_with(self, error: ProviderError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Sleep before answering (for timeout tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<PlaceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BasePlaceProvider for MockPlaceProvider {
    fn source(&self) -> PlaceSource {
        self.source
    }

    async fn search_places(
        &self,
        location: &str,
        category: SearchCategory,
    ) -> Result<PlaceBatch, ProviderError> {
        self.calls.lock().unwrap().push(PlaceCall {
            location: location.to_string(),
            category,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.batch.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Post Provider (Instagram)
// =============================================================================

/// Arguments captured from a fetch_posts call
#[derive(Debug, Clone, PartialEq)]
pub struct PostCall {
    pub query: String,
    pub limit: usize,
}

pub struct MockPostProvider {
    batch: Mutex<PostBatch>,
    error: Mutex<Option<ProviderError>>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<PostCall>>>,
}

impl MockPostProvider {
    pub fn new() -> Self {
        Self {
            batch: Mutex::new(PostBatch::default()),
            error: Mutex::new(None),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.batch.lock().unwrap().posts = posts;
        self
    }

    /// Per-hashtag notes returned alongside the posts
    pub fn with_warnings(self, warnings: Vec<String>) -> Self {
        self.batch.lock().unwrap().warnings = warnings;
        self
    }

    pub fn failing_with(self, error: ProviderError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<PostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockPostProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePostProvider for MockPostProvider {
    async fn fetch_posts(&self, query: &str, limit: usize) -> Result<PostBatch, ProviderError> {
        self.calls.lock().unwrap().push(PostCall {
            query: query.to_string(),
            limit,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        let mut batch = self.batch.lock().unwrap().clone();
        batch.posts.truncate(limit);
        Ok(batch)
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn sample_place(source: PlaceSource, id: &str, rating: f64, review_count: u32) -> Place {
    let mut input = NewPlace::new(source, id, format!("Place {}", id));
    input.categories = vec!["Restaurants".to_string()];
    input.rating = Some(rating);
    input.review_count = Some(review_count);
    input.address = "1 Main St, Seattle, WA".to_string();
    Place::new(input).expect("fixture place is valid")
}

pub fn sample_post(shortcode: &str, like_count: u64, category: PostCategory) -> Post {
    Post::new(NewPost {
        shortcode: shortcode.to_string(),
        image_url: format!("https://cdn.example.com/{}.jpg", shortcode),
        caption: format!("Post {}", shortcode),
        like_count,
        author: "local_guide".to_string(),
        taken_at: None,
        location_name: None,
        coordinates: None,
        category,
    })
    .expect("fixture post is valid")
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub instagram: Option<Arc<MockPostProvider>>,
    pub yelp: Option<Arc<MockPlaceProvider>>,
    pub foursquare: Option<Arc<MockPlaceProvider>>,
    pub timeouts: super::ProviderTimeouts,
    pub post_limit: usize,
}

impl TestDependencies {
    /// All three providers enabled, each returning nothing.
    pub fn new() -> Self {
        Self {
            instagram: Some(Arc::new(MockPostProvider::new())),
            yelp: Some(Arc::new(MockPlaceProvider::new(PlaceSource::Yelp))),
            foursquare: Some(Arc::new(MockPlaceProvider::new(PlaceSource::Foursquare))),
            timeouts: super::ProviderTimeouts::default(),
            post_limit: crate::domains::search::models::DEFAULT_POST_LIMIT,
        }
    }

    /// Set a mock Instagram provider
    pub fn mock_instagram(mut self, provider: MockPostProvider) -> Self {
        self.instagram = Some(Arc::new(provider));
        self
    }

    /// Set a mock Yelp provider
    pub fn mock_yelp(mut self, provider: MockPlaceProvider) -> Self {
        self.yelp = Some(Arc::new(provider));
        self
    }

    /// Set a mock Foursquare provider
    pub fn mock_foursquare(mut self, provider: MockPlaceProvider) -> Self {
        self.foursquare = Some(Arc::new(provider));
        self
    }

    pub fn without_instagram(mut self) -> Self {
        self.instagram = None;
        self
    }

    pub fn without_yelp(mut self) -> Self {
        self.yelp = None;
        self
    }

    pub fn without_foursquare(mut self) -> Self {
        self.foursquare = None;
        self
    }

    /// Same timeout for every provider
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts = super::ProviderTimeouts {
            yelp: timeout,
            foursquare: timeout,
            instagram: timeout,
        };
        self
    }

    /// Convert into ServerDeps. The mocks stay shared, so call records
    /// remain readable through `self.yelp` etc. after a clone.
    pub fn to_server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.instagram
                .clone()
                .map(|p| p as Arc<dyn BasePostProvider>),
            self.yelp.clone().map(|p| p as Arc<dyn BasePlaceProvider>),
            self.foursquare
                .clone()
                .map(|p| p as Arc<dyn BasePlaceProvider>),
        )
        .with_timeouts(self.timeouts)
        .with_post_limit(self.post_limit)
    }

    /// Total provider calls across all mocks.
    pub fn total_calls(&self) -> usize {
        self.instagram.as_ref().map_or(0, |p| p.call_count())
            + self.yelp.as_ref().map_or(0, |p| p.call_count())
            + self.foursquare.as_ref().map_or(0, |p| p.call_count())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
