//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::ACCEPT, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{health_handler, instagram_handler, places_handler, search_handler};
use crate::server::static_files::{serve_asset, serve_index};

/// Hard ceiling on one request; provider timeouts are well inside it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    // Read-only API, so any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([ACCEPT]);

    Router::new()
        .route("/", get(serve_index))
        .route("/assets/*file", get(serve_asset))
        .route("/health", get(health_handler))
        .route("/api/search", get(search_handler))
        .route("/api/search/places", get(places_handler))
        .route("/api/search/instagram", get(instagram_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
