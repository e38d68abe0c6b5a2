//! Integration tests for the push channel.
//!
//! These run the relay on a real listener and drive it with a WebSocket
//! client. Batches are published directly through the app state so the
//! tests stay deterministic instead of waiting out poll intervals.

use crate::common::{serve_on_ephemeral_port, test_app};
use api::AppState;
use futures_util::StreamExt;
use serde_json::{json, Value};
use shared::models::LogRecord;
use std::collections::HashMap;
use std::time::Duration;
use tokio_tungstenite::tungstenite::Message;

/// Serves a relay (with a dead backend; these tests publish by hand) and
/// returns the WebSocket URL of the push channel plus the app state.
async fn spawn_relay() -> (String, AppState) {
    let (app, state) = test_app("http://127.0.0.1:1");
    let base = serve_on_ephemeral_port(app).await;
    let ws_url = format!("{}/ws/logs", base.replace("http://", "ws://"));
    (ws_url, state)
}

/// Waits until the relay sees exactly `count` open subscriptions.
async fn wait_for_subscribers(state: &AppState, count: usize) {
    for _ in 0..200 {
        if state.subscriber_count() == count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "expected {count} subscribers, have {}",
        state.subscriber_count()
    );
}

fn sample_batch() -> Vec<LogRecord> {
    vec![LogRecord {
        timestamp: "1000".to_string(),
        message: "banned IP 1.2.3.4".to_string(),
        labels: HashMap::from([("job".to_string(), "fail2ban".to_string())]),
    }]
}

#[tokio::test]
async fn test_push_delivers_batch_as_json_array() {
    let (ws_url, state) = spawn_relay().await;

    let (mut socket, _) = tokio_tungstenite::connect_async(ws_url.as_str())
        .await
        .expect("connect push channel");
    wait_for_subscribers(&state, 1).await;

    assert_eq!(state.publish(sample_batch()), 1);

    let msg = tokio::time::timeout(Duration::from_secs(2), socket.next())
        .await
        .expect("push within deadline")
        .expect("socket open")
        .expect("frame ok");

    let Message::Text(text) = msg else {
        panic!("expected text frame, got {msg:?}");
    };
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        body,
        json!([{
            "timestamp": "1000",
            "message": "banned IP 1.2.3.4",
            "labels": {"job": "fail2ban"}
        }])
    );
}

#[tokio::test]
async fn test_push_delivers_every_interval_to_open_connection() {
    let (ws_url, state) = spawn_relay().await;

    let (mut socket, _) = tokio_tungstenite::connect_async(ws_url.as_str())
        .await
        .expect("connect push channel");
    wait_for_subscribers(&state, 1).await;

    for tick in 0..3 {
        state.publish(sample_batch());
        let msg = tokio::time::timeout(Duration::from_secs(2), socket.next())
            .await
            .unwrap_or_else(|_| panic!("push {tick} within deadline"))
            .expect("socket open")
            .expect("frame ok");
        assert!(matches!(msg, Message::Text(_)));
    }
}

#[tokio::test]
async fn test_disconnect_closes_only_that_subscription() {
    let (ws_url, state) = spawn_relay().await;

    let (mut leaver, _) = tokio_tungstenite::connect_async(ws_url.as_str())
        .await
        .expect("connect leaver");
    let (mut stayer, _) = tokio_tungstenite::connect_async(ws_url.as_str())
        .await
        .expect("connect stayer");
    wait_for_subscribers(&state, 2).await;

    leaver.close(None).await.expect("close leaver");
    wait_for_subscribers(&state, 1).await;

    // The next publish must neither error nor reach the closed
    // subscription; the surviving one still gets its batch.
    assert_eq!(state.publish(sample_batch()), 1);

    let msg = tokio::time::timeout(Duration::from_secs(2), stayer.next())
        .await
        .expect("push within deadline")
        .expect("socket open")
        .expect("frame ok");
    assert!(matches!(msg, Message::Text(_)));
}

#[tokio::test]
async fn test_late_connection_gets_no_backlog() {
    let (ws_url, state) = spawn_relay().await;

    // Published before anyone connects: dropped, not queued.
    assert_eq!(state.publish(sample_batch()), 0);

    let (mut socket, _) = tokio_tungstenite::connect_async(ws_url.as_str())
        .await
        .expect("connect push channel");
    wait_for_subscribers(&state, 1).await;

    let mut fresh = sample_batch();
    fresh[0].message = "fresh".to_string();
    state.publish(fresh);

    let msg = tokio::time::timeout(Duration::from_secs(2), socket.next())
        .await
        .expect("push within deadline")
        .expect("socket open")
        .expect("frame ok");

    let Message::Text(text) = msg else {
        panic!("expected text frame, got {msg:?}");
    };
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body[0]["message"], "fresh");
}
