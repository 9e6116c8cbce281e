use crate::common::validation::{require_text, ValidationError, ValidationResult};

use super::SearchCategory;

/// Longest location string we pass on to providers.
pub const MAX_LOCATION_CHARS: usize = 200;

/// A validated search request. Building one is the only gate in front of the
/// providers: if this fails, nothing goes out on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    location: String,
    category: SearchCategory,
}

impl SearchQuery {
    pub fn new(location: &str, category: SearchCategory) -> ValidationResult<Self> {
        let location = require_text("location", location)?;
        if location.chars().count() > MAX_LOCATION_CHARS {
            return Err(ValidationError::new(
                "location",
                format!("must be at most {} characters", MAX_LOCATION_CHARS),
            ));
        }
        Ok(Self { location, category })
    }

    /// Parse raw query-string values.
    pub fn parse(location: Option<&str>, category: Option<&str>) -> ValidationResult<Self> {
        let location = location.ok_or_else(|| ValidationError::new("location", "is required"))?;
        let category = category
            .map(str::parse::<SearchCategory>)
            .transpose()?
            .unwrap_or_default();
        Self::new(location, category)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn category(&self) -> SearchCategory {
        self.category
    }
}
