//! Server dependencies for search (using traits for testability)
//!
//! Built once at startup from `Config` and shared read-only behind an `Arc`.
//! A provider slot is `None` when that provider is disabled.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domains::search::models::DEFAULT_POST_LIMIT;
use crate::kernel::{
    BasePlaceProvider, BasePostProvider, FoursquareAdapter, InstagramAdapter, YelpAdapter,
};

/// Upper bound on each provider's whole contribution to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTimeouts {
    pub yelp: Duration,
    pub foursquare: Duration,
    pub instagram: Duration,
}

impl Default for ProviderTimeouts {
    fn default() -> Self {
        Self {
            yelp: Duration::from_secs(10),
            foursquare: Duration::from_secs(10),
            instagram: Duration::from_secs(25),
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

#[derive(Clone)]
pub struct ServerDeps {
    pub instagram: Option<Arc<dyn BasePostProvider>>,
    pub yelp: Option<Arc<dyn BasePlaceProvider>>,
    pub foursquare: Option<Arc<dyn BasePlaceProvider>>,
    pub timeouts: ProviderTimeouts,
    /// Posts requested from Instagram per search
    pub post_limit: usize,
}

impl ServerDeps {
    pub fn new(
        instagram: Option<Arc<dyn BasePostProvider>>,
        yelp: Option<Arc<dyn BasePlaceProvider>>,
        foursquare: Option<Arc<dyn BasePlaceProvider>>,
    ) -> Self {
        Self {
            instagram,
            yelp,
            foursquare,
            timeouts: ProviderTimeouts::default(),
            post_limit: DEFAULT_POST_LIMIT,
        }
    }

    pub fn with_timeouts(mut self, timeouts: ProviderTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_post_limit(mut self, post_limit: usize) -> Self {
        self.post_limit = post_limit;
        self
    }

    /// Construct the real provider adapters.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut timeouts = ProviderTimeouts::default();

        let yelp = match &config.yelp {
            Some(yelp) => {
                timeouts.yelp = yelp.timeout;
                let adapter = YelpAdapter::new(&yelp.api_key, yelp.timeout)
                    .context("Failed to create Yelp client")?;
                Some(Arc::new(adapter) as Arc<dyn BasePlaceProvider>)
            }
            None => {
                tracing::info!("Yelp disabled");
                None
            }
        };

        let foursquare = match &config.foursquare {
            Some(fsq) => {
                timeouts.foursquare = fsq.timeout;
                let adapter = FoursquareAdapter::new(&fsq.api_key, fsq.timeout)
                    .context("Failed to create Foursquare client")?;
                Some(Arc::new(adapter) as Arc<dyn BasePlaceProvider>)
            }
            None => {
                tracing::info!("Foursquare disabled");
                None
            }
        };

        let mut post_limit = DEFAULT_POST_LIMIT;
        let instagram = match &config.instagram {
            Some(ig) => {
                timeouts.instagram = ig.timeout;
                post_limit = ig.post_limit;
                let adapter = InstagramAdapter::new(ig.session_id.as_ref(), ig.timeout)
                    .context("Failed to create Instagram client")?;
                Some(Arc::new(adapter) as Arc<dyn BasePostProvider>)
            }
            None => {
                tracing::info!("Instagram disabled");
                None
            }
        };

        Ok(Self::new(instagram, yelp, foursquare)
            .with_timeouts(timeouts)
            .with_post_limit(post_limit))
    }
}
