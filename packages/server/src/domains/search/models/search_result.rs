use serde::Serialize;

use super::{Coordinates, Place, Post, SearchCategory, SearchQuery, SourceReport};

/// Yelp + Foursquare half of a search.
#[derive(Debug, Clone, Serialize)]
pub struct PlacesResult {
    location: String,
    category: SearchCategory,
    /// Center of the searched area, when a provider geocoded it
    center: Option<Coordinates>,
    places: Vec<Place>,
    sources: Vec<SourceReport>,
    warnings: Vec<String>,
}

impl PlacesResult {
    pub fn new(
        query: &SearchQuery,
        center: Option<Coordinates>,
        places: Vec<Place>,
        sources: Vec<SourceReport>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            location: query.location().to_string(),
            category: query.category(),
            center,
            places,
            sources,
            warnings,
        }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn center(&self) -> Option<Coordinates> {
        self.center
    }

    pub fn sources(&self) -> &[SourceReport] {
        &self.sources
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Instagram half of a search.
#[derive(Debug, Clone, Serialize)]
pub struct PostsResult {
    location: String,
    category: SearchCategory,
    posts: Vec<Post>,
    sources: Vec<SourceReport>,
    warnings: Vec<String>,
}

impl PostsResult {
    pub fn new(
        query: &SearchQuery,
        posts: Vec<Post>,
        sources: Vec<SourceReport>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            location: query.location().to_string(),
            category: query.category(),
            posts,
            sources,
            warnings,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn sources(&self) -> &[SourceReport] {
        &self.sources
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Everything found for one location query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    location: String,
    category: SearchCategory,
    center: Option<Coordinates>,
    posts: Vec<Post>,
    places: Vec<Place>,
    sources: Vec<SourceReport>,
    warnings: Vec<String>,
}

impl SearchResult {
    /// Merge both halves. Places keep their provider labels and order; no
    /// cross-provider deduplication happens here.
    pub fn new(query: &SearchQuery, places: PlacesResult, posts: PostsResult) -> Self {
        let mut sources = places.sources;
        sources.extend(posts.sources);

        let mut warnings = places.warnings;
        warnings.extend(posts.warnings);

        Self {
            location: query.location().to_string(),
            category: query.category(),
            center: places.center,
            posts: posts.posts,
            places: places.places,
            sources,
            warnings,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn sources(&self) -> &[SourceReport] {
        &self.sources
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
