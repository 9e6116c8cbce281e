//! Boundary checks shared by the response models and the query parser.

use thiserror::Error;
use url::Url;

/// A value failed a model constraint.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Trimmed, non-empty text.
pub fn require_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Absolute http(s) URL.
pub fn require_http_url(field: &'static str, value: &str) -> ValidationResult<String> {
    let value = require_text(field, value)?;
    let parsed = Url::parse(&value).map_err(|e| ValidationError::new(field, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(value),
        other => Err(ValidationError::new(
            field,
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// Finite number within `[min, max]`.
pub fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a finite number"));
    }
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("{} is outside {}..={}", value, min, max),
        ));
    }
    Ok(value)
}

/// Cut to at most `max` characters without splitting a code point.
pub fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("name", "  Pike Place  ").unwrap(), "Pike Place");
        let err = require_text("name", " \t ").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_require_http_url() {
        assert!(require_http_url("url", "https://www.instagram.com/p/abc/").is_ok());
        assert!(require_http_url("url", "ftp://example.com/x").is_err());
        assert!(require_http_url("url", "/relative/path").is_err());
    }

    #[test]
    fn test_require_range_rejects_nan() {
        assert!(require_range("latitude", f64::NAN, -90.0, 90.0).is_err());
        assert!(require_range("latitude", 91.0, -90.0, 90.0).is_err());
        assert_eq!(require_range("latitude", 47.6, -90.0, 90.0).unwrap(), 47.6);
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("café au lait", 4), "café");
        assert_eq!(truncate_chars("short", 300), "short");
    }
}
