//! Search endpoints.
//!
//! Each handler validates the query string first; a bad query is answered
//! with 400 before any provider is called.

use axum::{
    extract::{Extension, Query},
    http::{header::ACCEPT, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::domains::search::{self, PlacesResult, PostsResult, SearchQuery};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::static_files::render_search_page;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    location: Option<String>,
    category: Option<String>,
}

impl SearchParams {
    fn into_query(self) -> Result<SearchQuery, ApiError> {
        Ok(SearchQuery::parse(
            self.location.as_deref(),
            self.category.as_deref(),
        )?)
    }
}

/// GET /api/search - posts and places
///
/// JSON by default; the rendered page when the client prefers HTML.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = params.into_query()?;
    let result = search::search_all(&state.deps, &query).await;

    if wants_html(&headers) {
        render_search_page(&result)
    } else {
        Ok(Json(result).into_response())
    }
}

/// GET /api/search/places - Yelp and Foursquare only
pub async fn places_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PlacesResult>, ApiError> {
    let query = params.into_query()?;
    Ok(Json(search::search_places(&state.deps, &query).await))
}

/// GET /api/search/instagram - Instagram only
pub async fn instagram_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PostsResult>, ApiError> {
    let query = params.into_query()?;
    Ok(Json(search::search_posts(&state.deps, &query).await))
}

/// True when the Accept header ranks `text/html` above `application/json`.
/// Wildcards don't count, so `*/*` (curl, fetch) gets JSON.
pub fn wants_html(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(ACCEPT).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mut html = 0.0_f32;
    let mut json = 0.0_f32;
    for range in accept.split(',') {
        let mut parts = range.split(';');
        let media = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        let q = parts
            .filter_map(|p| p.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        match media.as_str() {
            "text/html" => html = html.max(q),
            "application/json" => json = json.max(q),
            _ => {}
        }
    }

    html > 0.0 && html > json
}
