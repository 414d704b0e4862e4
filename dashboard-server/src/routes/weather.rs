//! Weather summary endpoint

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::routes::error_response;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/weather", get(weather))
}

/// GET /api/weather - Fetch and summarize the forecast
///
/// Any upstream failure becomes a bare 500 `{"error": "Failed"}`; the cause
/// is only logged.
async fn weather(State(state): State<AppState>) -> Response {
    match state.forecast.fetch_forecast().await {
        Some(summary) => Json(summary).into_response(),
        None => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed"),
    }
}
