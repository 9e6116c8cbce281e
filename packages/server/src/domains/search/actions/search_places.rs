//! Places search: Yelp and Foursquare side by side.

use super::fanout::run_provider;
use crate::domains::search::models::{PlacesResult, Provider, SearchCategory, SearchQuery};
use crate::domains::search::ranking::rank_places;
use crate::kernel::{BasePlaceProvider, PlaceBatch, ProviderError, ServerDeps};

fn batch_len(batch: &PlaceBatch) -> usize {
    batch.places.len()
}

/// One provider's batch, without places labeled as another provider's.
async fn fetch_places(
    provider: &dyn BasePlaceProvider,
    location: &str,
    category: SearchCategory,
) -> Result<PlaceBatch, ProviderError> {
    let source = provider.source();
    let mut batch = provider.search_places(location, category).await?;

    let before = batch.places.len();
    batch.places.retain(|p| p.source() == source);
    if batch.places.len() < before {
        tracing::warn!(
            provider = %source.provider(),
            dropped = before - batch.places.len(),
            "Dropped places labeled with another source"
        );
    }
    Ok(batch)
}

/// Query both place providers concurrently.
///
/// Yelp places come first, ranked by review-weighted rating; Foursquare
/// places follow in the order Foursquare returned them. Nothing is merged
/// or relabeled across providers.
pub async fn search_places(deps: &ServerDeps, query: &SearchQuery) -> PlacesResult {
    let location = query.location();
    let category = query.category();

    let (yelp, foursquare) = tokio::join!(
        run_provider(
            Provider::Yelp,
            deps.timeouts.yelp,
            deps.yelp
                .as_deref()
                .map(|p| fetch_places(p, location, category)),
            batch_len,
        ),
        run_provider(
            Provider::Foursquare,
            deps.timeouts.foursquare,
            deps.foursquare
                .as_deref()
                .map(|p| fetch_places(p, location, category)),
            batch_len,
        ),
    );

    let center = yelp.value.center.or(foursquare.value.center);

    let mut places = yelp.value.places;
    rank_places(&mut places);
    places.extend(foursquare.value.places);

    let sources = vec![yelp.report, foursquare.report];
    let warnings = yelp.warning.into_iter().chain(foursquare.warning).collect();

    tracing::info!(
        location,
        category = %category,
        places = places.len(),
        "Places search complete"
    );

    PlacesResult::new(query, center, places, sources, warnings)
}
