//! Router-level test harness.
//!
//! Builds the real axum router over mock providers and drives it with
//! `tower::ServiceExt::oneshot`, so no socket is opened.

use axum::{
    body::Body,
    http::{header::ACCEPT, Request, StatusCode},
    Router,
};
use discover_core::kernel::TestDependencies;
use discover_core::server::build_app;
use tower::util::ServiceExt;

/// Responses larger than this are a test bug.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

pub fn init_tracing() {
    // Run tests with: RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Router over the given mocks. The mocks stay readable through `deps`.
pub fn test_app(deps: &TestDependencies) -> Router {
    init_tracing();
    build_app(deps.to_server_deps())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("response is not JSON ({}): {}", e, self.body))
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, uri, None).await
}

pub async fn get_with_accept(app: Router, uri: &str, accept: &str) -> TestResponse {
    send(app, uri, Some(accept)).await
}

async fn send(app: Router, uri: &str, accept: Option<&str>) -> TestResponse {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(accept) = accept {
        request = request.header(ACCEPT, accept);
    }
    let request = request.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
