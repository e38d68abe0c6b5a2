//! Error taxonomy for the backend fetch path.
//!
//! Failures fall into two classes: the backend could not be reached at all,
//! or it answered with a non-success status. A response body with an
//! unexpected shape is not an error; it decodes to an empty result in
//! [`crate::loki`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while fetching logs from the backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: the backend could not be reached.
    #[error("Loki backend unreachable: {0}")]
    BackendUnavailable(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("Loki backend returned {status}: {body}")]
    BackendStatus {
        /// HTTP status code the backend returned.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },
}

/// JSON body returned to callers when a fetch fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let error = match &self {
            Self::BackendUnavailable(_) => "backend_unavailable",
            Self::BackendStatus { .. } => "backend_error",
        };

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                error,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
