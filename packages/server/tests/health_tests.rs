mod common;

use axum::http::StatusCode;
use discover_core::kernel::TestDependencies;

use crate::common::{get, test_app};

#[tokio::test]
async fn health_reports_ok_without_calling_providers() {
    let deps = TestDependencies::new().without_foursquare();
    let response = get(test_app(&deps), "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "discover");
    assert!(body["version"].is_string());
    assert_eq!(body["providers"]["yelp"], true);
    assert_eq!(body["providers"]["foursquare"], false);
    assert_eq!(deps.total_calls(), 0);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let deps = TestDependencies::new();
    let response = get(test_app(&deps), "/api/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
