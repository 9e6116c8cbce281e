use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::domains::search::SearchResult;
use crate::server::error::ApiError;

// Embed the search page at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct PageAssets;

const INDEX: &str = "index.html";

/// Replaced with the server-rendered result (or `null`) in index.html.
const BOOTSTRAP_PLACEHOLDER: &str = "__DISCOVER_BOOTSTRAP__";

fn index_template() -> Result<String, ApiError> {
    let file = PageAssets::get(INDEX)
        .ok_or_else(|| ApiError::Internal(format!("{} missing from embedded assets", INDEX)))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|e| ApiError::Internal(format!("{} is not UTF-8: {}", INDEX, e)))
}

/// GET / - the empty search page
pub async fn serve_index() -> Result<Html<String>, ApiError> {
    Ok(Html(
        index_template()?.replace(BOOTSTRAP_PLACEHOLDER, "null"),
    ))
}

/// GET /assets/*file - scripts and styles next to index.html
pub async fn serve_asset(Path(file): Path<String>) -> Response {
    match PageAssets::get(&file) {
        Some(content) if file != INDEX => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        _ => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

/// The search page with `result` embedded, so it renders without a second
/// round trip.
pub fn render_search_page(result: &SearchResult) -> Result<Response, ApiError> {
    let json = serde_json::to_string(result)
        .map_err(|e| ApiError::Internal(format!("failed to serialize result: {}", e)))?;
    let page = index_template()?.replace(BOOTSTRAP_PLACEHOLDER, &escape_script_json(&json));
    Ok(Html(page).into_response())
}

/// Make JSON safe to inline in a `<script>` element. Captions are user
/// content and may contain `</script>`.
fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_close_tag_escaped() {
        let escaped = escape_script_json(r#"{"caption":"</script><b>&"}"#);
        assert!(!escaped.contains("</script>"));
        assert_eq!(
            escaped,
            r#"{"caption":"\u003c/script\u003e\u003cb\u003e\u0026"}"#
        );
        let back: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back["caption"], "</script><b>&");
    }

    #[test]
    fn test_template_has_placeholder() {
        let template = index_template().unwrap();
        assert!(template.contains(BOOTSTRAP_PLACEHOLDER));
    }
}
