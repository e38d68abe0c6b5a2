//! Pull endpoint.
//!
//! `GET /logs` triggers one fetch-and-flatten cycle against the backend and
//! returns the resulting records. Unlike the push channel, backend failures
//! here surface to the caller instead of being suppressed.

use crate::error::FetchError;
use crate::state::AppState;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use shared::models::LogRecord;

/// Creates the pull endpoint routes.
pub fn logs_routes() -> Router<AppState> {
    Router::new().route("/logs", get(get_logs))
}

/// Handler for the pull endpoint.
///
/// Returns 200 with the ordered JSON array of records, or 502 with an error
/// body if the backend call fails.
async fn get_logs(State(state): State<AppState>) -> Result<Json<Vec<LogRecord>>, FetchError> {
    let records = state.client().fetch_logs().await?;
    Ok(Json(records))
}
