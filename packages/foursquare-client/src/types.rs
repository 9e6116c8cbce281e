use serde::{Deserialize, Serialize};

/// Fields requested from `/v3/places/search`. Rating is a premium field and
/// is only present when explicitly asked for.
pub const DEFAULT_FIELDS: &str = "fsq_id,name,categories,location,geocodes,distance,rating";

/// Query parameters for a place search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Free-form locality ("Seattle, WA"); Foursquare geocodes it.
    pub near: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl SearchParams {
    pub fn new(near: impl Into<String>) -> Self {
        Self {
            query: None,
            near: near.into(),
            limit: 10,
            fields: Some(DEFAULT_FIELDS.to_string()),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, 50);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Place>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub fsq_id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub location: Option<Location>,
    pub geocodes: Option<Geocodes>,
    /// Meters from the geocoded `near` point.
    pub distance: Option<u32>,
    /// 0.0 to 10.0
    pub rating: Option<f64>,
}

impl Place {
    /// Formatted address, falling back to the street line.
    pub fn address(&self) -> String {
        self.location
            .as_ref()
            .and_then(|l| {
                l.formatted_address
                    .clone()
                    .filter(|a| !a.is_empty())
                    .or_else(|| l.address.clone())
            })
            .unwrap_or_default()
    }

    /// Main geocode as (latitude, longitude).
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        let main = self.geocodes.as_ref()?.main.as_ref()?;
        Some((main.latitude, main.longitude))
    }

    pub fn link(&self) -> String {
        format!("https://foursquare.com/v/{}", self.fsq_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub formatted_address: Option<String>,
    pub address: Option<String>,
    pub locality: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geocodes {
    pub main: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_falls_back_to_street() {
        let place: Place = serde_json::from_value(json!({
            "fsq_id": "4b0",
            "name": "Space Needle",
            "location": {"formatted_address": "", "address": "400 Broad St"}
        }))
        .unwrap();
        assert_eq!(place.address(), "400 Broad St");
        assert_eq!(place.link(), "https://foursquare.com/v/4b0");
        assert!(place.lat_lon().is_none());
    }

    #[test]
    fn test_geocode_main() {
        let place: Place = serde_json::from_value(json!({
            "fsq_id": "4b0",
            "name": "Space Needle",
            "geocodes": {"main": {"latitude": 47.6205, "longitude": -122.3493}}
        }))
        .unwrap();
        assert_eq!(place.lat_lon(), Some((47.6205, -122.3493)));
    }
}
