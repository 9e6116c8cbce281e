use serde::{Deserialize, Serialize};

/// Sort order accepted by `/v3/businesses/search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    BestMatch,
    Rating,
    ReviewCount,
    Distance,
}

/// Query parameters for a business search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    pub location: String,
    /// Search radius in meters (Yelp caps this at 40 000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl SearchParams {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            term: None,
            location: location.into(),
            radius: None,
            limit: 10,
            sort_by: None,
        }
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_radius(mut self, meters: u32) -> Self {
        self.radius = Some(meters.min(40_000));
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, 50);
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// Response body of `/v3/businesses/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub total: u32,
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub center: Center,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single business from a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub price: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub location: Option<Location>,
    pub coordinates: Option<Coordinates>,
    pub image_url: Option<String>,
    /// Meters from the search center.
    pub distance: Option<f64>,
    pub is_closed: Option<bool>,
}

impl Business {
    /// Address lines joined the way Yelp displays them.
    pub fn display_address(&self) -> String {
        self.location
            .as_ref()
            .map(|l| l.display_address.join(", "))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub alias: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub display_address: Vec<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Error envelope Yelp returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: Option<String>,
    pub description: Option<String>,
}
