use serde::Serialize;

use super::Provider;
use crate::common::validation::{require_http_url, require_range, require_text, ValidationResult};

/// Label used when a provider returns a place without any category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Which place provider produced a record. Never changed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceSource {
    Yelp,
    Foursquare,
}

impl PlaceSource {
    /// Top of the provider's rating scale.
    pub fn rating_scale(&self) -> f64 {
        match self {
            PlaceSource::Yelp => 5.0,
            PlaceSource::Foursquare => 10.0,
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            PlaceSource::Yelp => Provider::Yelp,
            PlaceSource::Foursquare => Provider::Foursquare,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> ValidationResult<Self> {
        Ok(Self {
            latitude: require_range("latitude", latitude, -90.0, 90.0)?,
            longitude: require_range("longitude", longitude, -180.0, 180.0)?,
        })
    }

    /// Providers send 0/0 or leave one half out when they don't know; both
    /// mean "no coordinates" rather than a point in the Gulf of Guinea.
    pub fn from_optional(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> ValidationResult<Option<Self>> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 || lon != 0.0 => Self::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Unvalidated place fields as mapped from a provider response.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub source: PlaceSource,
    pub id: String,
    pub name: String,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub price: Option<String>,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub distance_m: Option<u32>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

impl NewPlace {
    pub fn new(source: PlaceSource, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source,
            id: id.into(),
            name: name.into(),
            categories: Vec::new(),
            rating: None,
            review_count: None,
            price: None,
            address: String::new(),
            coordinates: None,
            distance_m: None,
            url: None,
            image_url: None,
        }
    }
}

/// A restaurant or attraction from Yelp or Foursquare.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    id: String,
    name: String,
    category: String,
    categories: Vec<String>,
    rating: Option<f64>,
    rating_scale: f64,
    review_count: Option<u32>,
    price: Option<String>,
    address: String,
    coordinates: Option<Coordinates>,
    distance_m: Option<u32>,
    url: Option<String>,
    image_url: Option<String>,
    source: PlaceSource,
}

impl Place {
    pub fn new(input: NewPlace) -> ValidationResult<Self> {
        let id = require_text("id", &input.id)?;
        let name = require_text("name", &input.name)?;

        let categories: Vec<String> = input
            .categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        let category = categories
            .first()
            .cloned()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        let rating_scale = input.source.rating_scale();
        let rating = input
            .rating
            .map(|r| require_range("rating", r, 0.0, rating_scale))
            .transpose()?;

        let url = non_blank(input.url)
            .map(|u| require_http_url("url", &u))
            .transpose()?;
        let image_url = non_blank(input.image_url)
            .map(|u| require_http_url("image_url", &u))
            .transpose()?;

        Ok(Self {
            id,
            name,
            category,
            categories,
            rating,
            rating_scale,
            review_count: input.review_count,
            price: non_blank(input.price),
            address: input.address.trim().to_string(),
            coordinates: input.coordinates,
            distance_m: input.distance_m,
            url,
            image_url,
            source: input.source,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn review_count(&self) -> Option<u32> {
        self.review_count
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn source(&self) -> PlaceSource {
        self.source
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
