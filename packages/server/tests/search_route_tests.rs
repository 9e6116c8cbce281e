//! Search endpoint tests over mock providers.

mod common;

use axum::http::StatusCode;
use discover_core::domains::search::models::{PlaceSource, PostCategory, Provider};
use discover_core::kernel::test_dependencies::{sample_place, sample_post};
use discover_core::kernel::{MockPlaceProvider, MockPostProvider, ProviderError, TestDependencies};

use crate::common::{get, get_with_accept, test_app};

fn seattle_deps() -> TestDependencies {
    TestDependencies::new()
        .mock_instagram(MockPostProvider::new().with_posts(
            (1..=5)
                .map(|i| sample_post(&format!("C{}", i), i * 7, PostCategory::Eat))
                .collect(),
        ))
        .mock_yelp(MockPlaceProvider::new(PlaceSource::Yelp).with_places(vec![
            sample_place(PlaceSource::Yelp, "pike-place-chowder", 4.5, 8000),
            sample_place(PlaceSource::Yelp, "canlis", 4.5, 1500),
            sample_place(PlaceSource::Yelp, "new-spot", 5.0, 4),
        ]))
        .mock_foursquare(MockPlaceProvider::new(PlaceSource::Foursquare).with_places(vec![
            sample_place(PlaceSource::Foursquare, "space-needle", 9.1, 0),
            sample_place(PlaceSource::Foursquare, "mopop", 8.8, 0),
        ]))
}

#[tokio::test]
async fn search_returns_posts_and_places() {
    let deps = seattle_deps();
    let response = get(test_app(&deps), "/api/search?location=Seattle,%20WA").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["location"], "Seattle, WA");
    assert_eq!(body["category"], "all");
    assert_eq!(body["posts"].as_array().unwrap().len(), 5);

    let places = body["places"].as_array().unwrap();
    assert_eq!(places.len(), 5);
    let yelp = places.iter().filter(|p| p["source"] == "yelp").count();
    let foursquare = places.iter().filter(|p| p["source"] == "foursquare").count();
    assert_eq!((yelp, foursquare), (3, 2));

    // Ranked Yelp first, Foursquare after in provider order
    let ids: Vec<_> = places.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["pike-place-chowder", "canlis", "new-spot", "space-needle", "mopop"]
    );

    // Most liked post first
    assert_eq!(body["posts"][0]["shortcode"], "C5");
    assert_eq!(body["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn category_is_passed_to_place_providers() {
    let deps = seattle_deps();
    let response = get(
        test_app(&deps),
        "/api/search?location=Seattle&category=things_to_do",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let calls = deps.foursquare.as_ref().unwrap().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].location, "Seattle");
    assert_eq!(calls[0].category.as_str(), "things_to_do");
}

#[tokio::test]
async fn invalid_queries_are_rejected_before_any_provider_call() {
    for uri in [
        "/api/search",
        "/api/search?location=",
        "/api/search?location=%20%20",
        "/api/search?location=Seattle&category=nightlife",
        "/api/search/places?location=",
        "/api/search/instagram",
    ] {
        let deps = seattle_deps();
        let response = get(test_app(&deps), uri).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(response.json()["error"].is_string(), "{}", uri);
        assert_eq!(deps.total_calls(), 0, "{}", uri);
    }
}

#[tokio::test]
async fn bad_request_names_the_field() {
    let deps = seattle_deps();
    let body = get(test_app(&deps), "/api/search?location=Paris&category=bars")
        .await
        .json();
    assert_eq!(body["field"], "category");

    let body = get(test_app(&deps), "/api/search").await.json();
    assert_eq!(body["field"], "location");
}

#[tokio::test]
async fn rejected_yelp_key_still_returns_200() {
    let deps = seattle_deps().mock_yelp(MockPlaceProvider::new(PlaceSource::Yelp).failing_with(
        ProviderError::from_status(Provider::Yelp, 401, "TOKEN_INVALID"),
    ));

    let response = get(test_app(&deps), "/api/search?location=Seattle").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let places = body["places"].as_array().unwrap();
    assert!(places.iter().all(|p| p["source"] == "foursquare"));
    assert_eq!(places.len(), 2);
    assert_eq!(body["posts"].as_array().unwrap().len(), 5);

    let yelp = body["sources"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["source"] == "yelp")
        .unwrap()
        .clone();
    assert_eq!(yelp["status"], "rejected");
    assert_eq!(yelp["fault"], "caller");
    assert_eq!(yelp["count"], 0);
}

#[tokio::test]
async fn disabled_providers_are_reported() {
    let deps = seattle_deps().without_instagram().without_foursquare();

    let response = get(test_app(&deps), "/api/search?location=Seattle").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["posts"].as_array().unwrap().len(), 0);
    assert_eq!(body["places"].as_array().unwrap().len(), 3);

    let statuses: Vec<_> = body["sources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["source"].as_str().unwrap(), s["status"].as_str().unwrap()))
        .collect();
    assert_eq!(
        statuses,
        vec![("yelp", "ok"), ("foursquare", "disabled"), ("instagram", "disabled")]
    );
}

#[tokio::test]
async fn places_endpoint_skips_instagram() {
    let deps = seattle_deps();
    let response = get(test_app(&deps), "/api/search/places?location=Seattle").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["places"].as_array().unwrap().len(), 5);
    assert!(body.get("posts").is_none());
    assert_eq!(deps.instagram.as_ref().unwrap().call_count(), 0);
}

#[tokio::test]
async fn instagram_endpoint_skips_places() {
    let deps = seattle_deps();
    let response = get(test_app(&deps), "/api/search/instagram?location=Seattle").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["posts"].as_array().unwrap().len(), 5);
    assert_eq!(deps.yelp.as_ref().unwrap().call_count(), 0);
    assert_eq!(deps.foursquare.as_ref().unwrap().call_count(), 0);
}

#[tokio::test]
async fn browsers_get_the_rendered_page() {
    let deps = seattle_deps();
    let response = get_with_accept(
        test_app(&deps),
        "/api/search?location=Seattle",
        "text/html,application/xhtml+xml,*/*;q=0.8",
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("text/html"));
    assert!(response.body.contains("pike-place-chowder"));
    assert!(!response.body.contains("__DISCOVER_BOOTSTRAP__"));
}

#[tokio::test]
async fn index_page_has_no_result() {
    let deps = seattle_deps();
    let response = get(test_app(&deps), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"<script id="bootstrap" type="application/json">null</script>"#));
    assert_eq!(deps.total_calls(), 0);
}

#[tokio::test]
async fn assets_are_served_with_mime_type() {
    let deps = seattle_deps();
    let response = get(test_app(&deps), "/assets/app.js").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .unwrap_or_default()
        .contains("javascript"));

    let response = get(test_app(&deps), "/assets/missing.js").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
