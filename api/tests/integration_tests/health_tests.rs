//! Integration tests for the health endpoint.

use crate::common::{get_json, test_app};
use axum::http::StatusCode;

#[tokio::test]
async fn test_health_reports_healthy_without_backend() {
    // Health is reachability only, so a dead backend URL must not matter.
    let (app, _state) = test_app("http://127.0.0.1:1");

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "lokirelay-api");
}
