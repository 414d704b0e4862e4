//! Schedule list endpoints

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use dashboard_core::{ScheduleEntry, ScheduleList};

use crate::routes::{AppError, StatusResponse, error_response};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schedule", get(list_entries).post(add_entry))
        .route("/api/schedule/delete", post(delete_entry))
}

/// GET /api/schedule - All entries in insertion order
async fn list_entries(State(state): State<AppState>) -> Json<ScheduleList> {
    Json(state.schedule.load())
}

/// POST /api/schedule - Append the request body as a new entry
///
/// A missing or invalid body and a failed write both answer 400
/// `{"error": "err"}`.
async fn add_entry(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleEntry>, JsonRejection>,
) -> Response {
    let entry = match payload {
        Ok(Json(entry)) => entry,
        Err(rejection) => {
            tracing::debug!("Rejected schedule entry: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "err");
        }
    };

    match state.schedule.append(entry) {
        Ok(()) => StatusResponse::ok().into_response(),
        Err(e) => {
            tracing::error!("Failed to save schedule: {}", e);
            error_response(StatusCode::BAD_REQUEST, "err")
        }
    }
}

/// Request body for deleting an entry
#[derive(Deserialize)]
pub struct DeleteRequest {
    pub index: i64,
}

/// POST /api/schedule/delete - Remove the entry at `index`
///
/// Out-of-range indexes are ignored and still answer ok. A body without an
/// integer `index` gets axum's default JSON rejection.
async fn delete_entry(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    state.schedule.remove_at(req.index)?;
    Ok(StatusResponse::ok())
}
