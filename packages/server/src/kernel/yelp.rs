//! Yelp Fusion adapter (implements BasePlaceProvider).

use std::time::Duration;

use async_trait::async_trait;
use yelp_client::{Business, SearchParams, SearchResponse, SortBy, YelpClient, YelpError};

use super::{BasePlaceProvider, PlaceBatch, ProviderError};
use crate::common::{SecretString, ValidationError};
use crate::domains::search::models::{
    Coordinates, NewPlace, Place, PlaceSource, Provider, SearchCategory,
};

const SEARCH_RADIUS_M: u32 = 10_000;
const RESULT_LIMIT: u32 = 10;

pub struct YelpAdapter {
    client: YelpClient,
}

impl YelpAdapter {
    pub fn new(api_key: &SecretString, timeout: Duration) -> Result<Self, YelpError> {
        Ok(Self::from_client(YelpClient::new(api_key.expose(), timeout)?))
    }

    pub fn from_client(client: YelpClient) -> Self {
        Self { client }
    }
}

/// Yelp is our restaurant source, so "all" searches restaurants and leaves
/// attractions to Foursquare.
pub fn term_for(category: SearchCategory) -> &'static str {
    match category {
        SearchCategory::ThingsToDo => "things to do",
        SearchCategory::Restaurants | SearchCategory::All => "restaurants",
    }
}

pub fn map_business(business: &Business) -> Result<Place, ValidationError> {
    let coordinates = business
        .coordinates
        .map(|c| Coordinates::from_optional(c.latitude, c.longitude))
        .transpose()?
        .flatten();

    let mut input = NewPlace::new(PlaceSource::Yelp, &business.id, &business.name);
    input.categories = business.categories.iter().map(|c| c.title.clone()).collect();
    input.rating = business.rating;
    input.review_count = business.review_count;
    input.price = business.price.clone();
    input.address = business.display_address();
    input.coordinates = coordinates;
    input.distance_m = business.distance.map(|d| d.max(0.0).round() as u32);
    input.url = business.url.clone();
    input.image_url = business.image_url.clone();

    Place::new(input)
}

/// Map a whole response, dropping businesses that fail validation.
pub fn map_response(response: &SearchResponse) -> PlaceBatch {
    let places = response
        .businesses
        .iter()
        .filter_map(|b| match map_business(b) {
            Ok(place) => Some(place),
            Err(e) => {
                tracing::debug!(business_id = %b.id, error = %e, "Skipping Yelp business");
                None
            }
        })
        .collect();

    let center = response
        .region
        .as_ref()
        .and_then(|r| Coordinates::new(r.center.latitude, r.center.longitude).ok());

    PlaceBatch { places, center }
}

fn provider_error(error: YelpError) -> ProviderError {
    match error {
        YelpError::Api { status, message } => {
            ProviderError::from_status(Provider::Yelp, status, message)
        }
        YelpError::Parse(reason) => ProviderError::Malformed {
            provider: Provider::Yelp,
            reason,
        },
        e if e.is_timeout() => ProviderError::unavailable(Provider::Yelp, "request timed out"),
        e => ProviderError::unavailable(Provider::Yelp, e.to_string()),
    }
}

#[async_trait]
impl BasePlaceProvider for YelpAdapter {
    fn source(&self) -> PlaceSource {
        PlaceSource::Yelp
    }

    async fn search_places(
        &self,
        location: &str,
        category: SearchCategory,
    ) -> Result<PlaceBatch, ProviderError> {
        let params = SearchParams::new(location)
            .with_term(term_for(category))
            .with_radius(SEARCH_RADIUS_M)
            .with_limit(RESULT_LIMIT)
            .sorted_by(SortBy::Rating);

        let response = self
            .client
            .search_businesses(&params)
            .await
            .map_err(provider_error)?;

        let batch = map_response(&response);
        tracing::info!(
            location,
            returned = response.businesses.len(),
            kept = batch.places.len(),
            "Yelp search complete"
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::search::models::Fault;
    use serde_json::json;

    fn business(value: serde_json::Value) -> Business {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_map_business() {
        let place = map_business(&business(json!({
            "id": "pike-place-chowder",
            "name": "Pike Place Chowder",
            "url": "https://www.yelp.com/biz/pike-place-chowder",
            "rating": 4.5,
            "review_count": 8000,
            "categories": [{"alias": "seafood", "title": "Seafood"}],
            "location": {"display_address": ["1530 Post Aly", "Seattle, WA 98101"]},
            "coordinates": {"latitude": 47.6097, "longitude": -122.3422},
            "image_url": ""
        })))
        .unwrap();

        assert_eq!(place.source(), PlaceSource::Yelp);
        assert_eq!(place.category(), "Seafood");
        assert_eq!(place.address(), "1530 Post Aly, Seattle, WA 98101");
        assert_eq!(place.coordinates().unwrap().latitude(), 47.6097);
    }

    #[test]
    fn test_map_response_skips_invalid_and_reads_center() {
        let response: SearchResponse = serde_json::from_value(json!({
            "businesses": [
                {"id": "ok", "name": "Fine", "rating": 4.0},
                {"id": "bad", "name": "Off the scale", "rating": 7.0},
                {"id": "blank", "name": "  "}
            ],
            "region": {"center": {"latitude": 47.61, "longitude": -122.33}}
        }))
        .unwrap();

        let batch = map_response(&response);
        assert_eq!(batch.places.len(), 1);
        assert_eq!(batch.places[0].id(), "ok");
        assert_eq!(batch.center.unwrap().longitude(), -122.33);
    }

    #[test]
    fn test_term_for_category() {
        assert_eq!(term_for(SearchCategory::All), "restaurants");
        assert_eq!(term_for(SearchCategory::ThingsToDo), "things to do");
    }

    #[test]
    fn test_error_mapping() {
        let err = provider_error(YelpError::Api {
            status: 400,
            message: "LOCATION_NOT_FOUND".into(),
        });
        assert!(matches!(err, ProviderError::Rejected { fault: Fault::Caller, status: 400, .. }));

        let err = provider_error(YelpError::Parse("expected value".into()));
        assert!(matches!(err, ProviderError::Malformed { .. }));
    }
}
