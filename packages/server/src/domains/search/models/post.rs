use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Coordinates, PostCategory};
use crate::common::validation::{require_http_url, require_text, truncate_chars, ValidationResult};

/// Captions are cut to this many characters.
pub const MAX_CAPTION_CHARS: usize = 300;

/// Upper bound on posts fetched for one query.
pub const MAX_POST_LIMIT: usize = 60;

pub const DEFAULT_POST_LIMIT: usize = 27;

/// Unvalidated post fields as mapped from Instagram media.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub shortcode: String,
    pub image_url: String,
    pub caption: String,
    pub like_count: u64,
    pub author: String,
    pub taken_at: Option<DateTime<Utc>>,
    pub location_name: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub category: PostCategory,
}

/// An Instagram post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    shortcode: String,
    permalink: String,
    image_url: String,
    caption: String,
    like_count: u64,
    author: String,
    taken_at: Option<DateTime<Utc>>,
    location_name: Option<String>,
    coordinates: Option<Coordinates>,
    category: PostCategory,
}

impl Post {
    pub fn new(input: NewPost) -> ValidationResult<Self> {
        let shortcode = require_text("shortcode", &input.shortcode)?;
        let permalink = require_http_url(
            "permalink",
            &format!("https://www.instagram.com/p/{}/", shortcode),
        )?;

        Ok(Self {
            permalink,
            shortcode,
            image_url: require_http_url("image_url", &input.image_url)?,
            caption: truncate_chars(input.caption.trim(), MAX_CAPTION_CHARS),
            like_count: input.like_count,
            author: require_text("author", input.author.trim_start_matches('@'))?,
            taken_at: input.taken_at,
            location_name: input
                .location_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            coordinates: input.coordinates,
            category: input.category,
        })
    }

    pub fn shortcode(&self) -> &str {
        &self.shortcode
    }

    pub fn permalink(&self) -> &str {
        &self.permalink
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn category(&self) -> PostCategory {
        self.category
    }
}
