//! Full search: posts and places together.

use super::{search_places, search_posts};
use crate::domains::search::models::{SearchQuery, SearchResult};
use crate::kernel::ServerDeps;

/// Run the places and posts searches concurrently and merge them.
pub async fn search_all(deps: &ServerDeps, query: &SearchQuery) -> SearchResult {
    let (places, posts) = tokio::join!(search_places(deps, query), search_posts(deps, query));

    let result = SearchResult::new(query, places, posts);
    tracing::info!(
        location = query.location(),
        posts = result.posts().len(),
        places = result.places().len(),
        warnings = result.warnings().len(),
        "Search complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::search::models::{PlaceSource, PostCategory, Provider, SearchCategory};
    use crate::kernel::test_dependencies::{sample_place, sample_post};
    use crate::kernel::{MockPlaceProvider, MockPostProvider, ProviderError, TestDependencies};

    #[tokio::test]
    async fn test_all_providers_merged() {
        let test_deps = TestDependencies::new()
            .mock_instagram(MockPostProvider::new().with_posts(
                (1..=5)
                    .map(|i| sample_post(&format!("p{}", i), i * 10, PostCategory::Eat))
                    .collect(),
            ))
            .mock_yelp(MockPlaceProvider::new(PlaceSource::Yelp).with_places(vec![
                sample_place(PlaceSource::Yelp, "y1", 4.0, 100),
                sample_place(PlaceSource::Yelp, "y2", 4.5, 100),
                sample_place(PlaceSource::Yelp, "y3", 3.5, 100),
            ]))
            .mock_foursquare(MockPlaceProvider::new(PlaceSource::Foursquare).with_places(vec![
                sample_place(PlaceSource::Foursquare, "f1", 8.0, 0),
                sample_place(PlaceSource::Foursquare, "f2", 7.5, 0),
            ]));

        let query = SearchQuery::new("Seattle, WA", SearchCategory::All).unwrap();
        let result = search_all(&test_deps.to_server_deps(), &query).await;

        assert_eq!(result.location(), "Seattle, WA");
        assert_eq!(result.posts().len(), 5);
        assert_eq!(result.places().len(), 5);
        let yelp_count = result
            .places()
            .iter()
            .filter(|p| p.source() == PlaceSource::Yelp)
            .count();
        assert_eq!(yelp_count, 3);

        let sources: Vec<_> = result.sources().iter().map(|s| s.source).collect();
        assert_eq!(
            sources,
            vec![Provider::Yelp, Provider::Foursquare, Provider::Instagram]
        );
    }

    #[tokio::test]
    async fn test_every_provider_failing_still_returns_result() {
        let test_deps = TestDependencies::new()
            .mock_instagram(MockPostProvider::new().failing_with(ProviderError::unavailable(
                Provider::Instagram,
                "rate limited",
            )))
            .mock_yelp(MockPlaceProvider::new(PlaceSource::Yelp).failing_with(
                ProviderError::Malformed {
                    provider: Provider::Yelp,
                    reason: "expected value at line 1".into(),
                },
            ))
            .mock_foursquare(MockPlaceProvider::new(PlaceSource::Foursquare).failing_with(
                ProviderError::from_status(Provider::Foursquare, 500, "internal"),
            ));

        let query = SearchQuery::new("Nowhere", SearchCategory::All).unwrap();
        let result = search_all(&test_deps.to_server_deps(), &query).await;

        assert!(result.posts().is_empty());
        assert!(result.places().is_empty());
        assert_eq!(result.warnings().len(), 3);
        assert!(result.sources().iter().all(|s| !s.is_ok()));
    }
}
