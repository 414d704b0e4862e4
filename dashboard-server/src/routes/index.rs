//! The dashboard page

use axum::{Router, response::Html, routing::get};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - Static page shell; the data comes from the JSON endpoints
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
