//! Foursquare Places adapter (implements BasePlaceProvider).

use std::time::Duration;

use async_trait::async_trait;
use foursquare_client::{
    FoursquareClient, FoursquareError, Place as FsqPlace, SearchParams, SearchResponse,
};

use super::{BasePlaceProvider, PlaceBatch, ProviderError};
use crate::common::{SecretString, ValidationError};
use crate::domains::search::models::{
    Coordinates, NewPlace, Place, PlaceSource, Provider, SearchCategory,
};

const RESULT_LIMIT: u32 = 10;

pub struct FoursquareAdapter {
    client: FoursquareClient,
}

impl FoursquareAdapter {
    pub fn new(api_key: &SecretString, timeout: Duration) -> Result<Self, FoursquareError> {
        Ok(Self::from_client(FoursquareClient::new(
            api_key.expose(),
            timeout,
        )?))
    }

    pub fn from_client(client: FoursquareClient) -> Self {
        Self { client }
    }
}

pub fn query_for(category: SearchCategory) -> &'static str {
    match category {
        SearchCategory::Restaurants => "restaurants",
        SearchCategory::ThingsToDo | SearchCategory::All => "things to do",
    }
}

pub fn map_place(place: &FsqPlace) -> Result<Place, ValidationError> {
    let coordinates = match place.lat_lon() {
        Some((lat, lon)) => Coordinates::from_optional(Some(lat), Some(lon))?,
        None => None,
    };

    let mut input = NewPlace::new(PlaceSource::Foursquare, &place.fsq_id, &place.name);
    input.categories = place.categories.iter().map(|c| c.name.clone()).collect();
    input.rating = place.rating;
    input.address = place.address();
    input.coordinates = coordinates;
    input.distance_m = place.distance;
    input.url = Some(place.link());

    Place::new(input)
}

pub fn map_response(response: &SearchResponse) -> PlaceBatch {
    let places = response
        .results
        .iter()
        .filter_map(|p| match map_place(p) {
            Ok(place) => Some(place),
            Err(e) => {
                tracing::debug!(fsq_id = %p.fsq_id, error = %e, "Skipping Foursquare place");
                None
            }
        })
        .collect();

    PlaceBatch {
        places,
        center: None,
    }
}

fn provider_error(error: FoursquareError) -> ProviderError {
    match error {
        FoursquareError::Api { status, message } => {
            ProviderError::from_status(Provider::Foursquare, status, message)
        }
        FoursquareError::Parse(reason) => ProviderError::Malformed {
            provider: Provider::Foursquare,
            reason,
        },
        e if e.is_timeout() => {
            ProviderError::unavailable(Provider::Foursquare, "request timed out")
        }
        e => ProviderError::unavailable(Provider::Foursquare, e.to_string()),
    }
}

#[async_trait]
impl BasePlaceProvider for FoursquareAdapter {
    fn source(&self) -> PlaceSource {
        PlaceSource::Foursquare
    }

    async fn search_places(
        &self,
        location: &str,
        category: SearchCategory,
    ) -> Result<PlaceBatch, ProviderError> {
        let params = SearchParams::new(location)
            .with_query(query_for(category))
            .with_limit(RESULT_LIMIT);

        let response = self
            .client
            .search_places(&params)
            .await
            .map_err(provider_error)?;

        let batch = map_response(&response);
        tracing::info!(
            location,
            returned = response.results.len(),
            kept = batch.places.len(),
            "Foursquare search complete"
        );
        Ok(batch)
    }
}
