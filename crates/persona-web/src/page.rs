//! The form page.
//!
//! A single self-contained HTML document; everything dynamic (mode banner,
//! personality list, replies) is fetched from the JSON API.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// GET /: The form page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
