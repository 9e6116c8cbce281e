// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only: fetch from one provider, hand back
// validated models. Merging and ranking live in domains::search.
//
// Naming convention: Base* for trait names (e.g., BasePlaceProvider)

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domains::search::models::{
    Coordinates, Fault, Place, PlaceSource, Post, Provider, SearchCategory, SourceReport,
    SourceStatus,
};

// =============================================================================
// Provider errors
// =============================================================================

/// Why a provider contributed nothing to a response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Couldn't reach the provider, it throttled us, or it took too long
    #[error("{provider} unavailable: {reason}")]
    Unavailable { provider: Provider, reason: String },

    /// The provider answered and said no
    #[error("{provider} rejected the request ({status}): {message}")]
    Rejected {
        provider: Provider,
        status: u16,
        fault: Fault,
        message: String,
    },

    /// The provider answered with something we couldn't decode
    #[error("{provider} returned a malformed response: {reason}")]
    Malformed { provider: Provider, reason: String },
}

impl ProviderError {
    pub fn unavailable(provider: Provider, reason: impl Into<String>) -> Self {
        ProviderError::Unavailable {
            provider,
            reason: reason.into(),
        }
    }

    /// Classify a non-2xx answer. 429 is quota exhaustion, which is transient.
    pub fn from_status(provider: Provider, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            429 => ProviderError::Unavailable {
                provider,
                reason: format!("rate limited: {}", message),
            },
            400..=499 => ProviderError::Rejected {
                provider,
                status,
                fault: Fault::Caller,
                message,
            },
            _ => ProviderError::Rejected {
                provider,
                status,
                fault: Fault::Provider,
                message,
            },
        }
    }

    pub fn timed_out(provider: Provider, after: Duration) -> Self {
        ProviderError::Unavailable {
            provider,
            reason: format!("timed out after {:.1}s", after.as_secs_f64()),
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            ProviderError::Unavailable { provider, .. }
            | ProviderError::Rejected { provider, .. }
            | ProviderError::Malformed { provider, .. } => *provider,
        }
    }

    /// Per-source entry for the response.
    pub fn report(&self) -> SourceReport {
        let (status, fault) = match self {
            ProviderError::Unavailable { .. } => (SourceStatus::Unavailable, None),
            ProviderError::Rejected { fault, .. } => (SourceStatus::Rejected, Some(*fault)),
            ProviderError::Malformed { .. } => (SourceStatus::Malformed, None),
        };
        SourceReport::failed(self.provider(), status, fault, self.to_string())
    }
}

// =============================================================================
// Place providers (Yelp, Foursquare)
// =============================================================================

/// Places from one provider, plus the center of the area it searched.
#[derive(Debug, Clone, Default)]
pub struct PlaceBatch {
    pub places: Vec<Place>,
    pub center: Option<Coordinates>,
}

#[async_trait]
pub trait BasePlaceProvider: Send + Sync {
    /// Every place returned carries this source.
    fn source(&self) -> PlaceSource;

    /// One search request; no retries.
    async fn search_places(
        &self,
        location: &str,
        category: SearchCategory,
    ) -> Result<PlaceBatch, ProviderError>;
}

// =============================================================================
// Post provider (Instagram)
// =============================================================================

/// Posts from Instagram, plus notes about hashtags that contributed nothing.
#[derive(Debug, Clone, Default)]
pub struct PostBatch {
    pub posts: Vec<Post>,
    pub warnings: Vec<String>,
}

#[async_trait]
pub trait BasePostProvider: Send + Sync {
    /// At most `limit` posts for a location or hashtag term.
    async fn fetch_posts(&self, query: &str, limit: usize) -> Result<PostBatch, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            ProviderError::from_status(Provider::Yelp, 401, "bad key"),
            ProviderError::Rejected { fault: Fault::Caller, .. }
        ));
        assert!(matches!(
            ProviderError::from_status(Provider::Yelp, 503, "down"),
            ProviderError::Rejected { fault: Fault::Provider, .. }
        ));
        assert!(matches!(
            ProviderError::from_status(Provider::Foursquare, 429, "quota"),
            ProviderError::Unavailable { .. }
        ));
    }

    #[test]
    fn test_report_carries_provider_and_fault() {
        let report = ProviderError::from_status(Provider::Yelp, 401, "TOKEN_INVALID").report();
        assert_eq!(report.source, Provider::Yelp);
        assert_eq!(report.status, SourceStatus::Rejected);
        assert_eq!(report.fault, Some(Fault::Caller));
        assert_eq!(report.count, 0);
        assert_eq!(
            report.message.as_deref(),
            Some("Yelp rejected the request (401): TOKEN_INVALID")
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = ProviderError::timed_out(Provider::Instagram, Duration::from_secs(25));
        assert_eq!(err.to_string(), "Instagram unavailable: timed out after 25.0s");
    }
}
