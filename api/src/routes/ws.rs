//! Push channel.
//!
//! `GET /ws/logs` upgrades to a WebSocket and registers one subscription.
//! The connection then receives each poll's batch as a single JSON text
//! frame until the peer disconnects or a send fails. There is no backlog: a
//! client connecting mid-interval sees only future pushes.

use crate::state::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use tokio::sync::broadcast::error::RecvError;

/// Creates the push channel routes.
pub fn ws_routes() -> Router<AppState> {
    Router::new().route("/ws/logs", get(handle_ws))
}

async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| ws_connection(socket, state))
}

/// Drives one subscription until it closes.
///
/// A subscription has exactly two states: open, and terminally closed. Any
/// failure on this connection (peer close, send error) ends only this task;
/// the poll loop and other subscriptions are unaffected, since dropping the
/// broadcast receiver is the whole deregistration.
async fn ws_connection(mut socket: WebSocket, state: AppState) {
    let mut batches = state.subscribe();

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Inbound frames carry no protocol; ignore them.
                    Some(Ok(_)) => {}
                }
            }

            batch = batches.recv() => {
                let batch = match batch {
                    Ok(batch) => batch,
                    // Lagged past the channel capacity: skip to the
                    // freshest batch, a missed push is overwritten anyway.
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Subscription lagged, skipping stale batches");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                let json = match serde_json::to_string(&*batch) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize batch");
                        continue;
                    }
                };

                if socket.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    tracing::debug!("Subscription closed");
    let _ = socket.send(Message::Close(None)).await;
}
