use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    providers: ProviderFlags,
}

/// Which providers this instance was started with.
#[derive(Serialize)]
pub struct ProviderFlags {
    instagram: bool,
    yelp: bool,
    foursquare: bool,
}

/// Health check endpoint
///
/// Never calls a provider; a process that can answer is healthy.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "discover",
        version: env!("CARGO_PKG_VERSION"),
        providers: ProviderFlags {
            instagram: state.deps.instagram.is_some(),
            yelp: state.deps.yelp.is_some(),
            foursquare: state.deps.foursquare.is_some(),
        },
    })
}
