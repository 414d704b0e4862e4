pub mod index;
pub mod schedule;
pub mod weather;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::state::AppState;

/// All endpoints, ready for `with_state`.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(weather::router())
        .merge(schedule::router())
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A fixed error body with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    let body = Json(ErrorResponse {
        error: message.to_string(),
    });
    (status, body).into_response()
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Json<StatusResponse> {
        Json(StatusResponse { status: "ok" })
    }
}

/// Convert anyhow errors to a generic 500; the detail only goes to the log
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:#}", self.0);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed")
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
