//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers
//! and the poll loop.

use crate::config::Config;
use crate::error::FetchError;
use crate::loki::LokiClient;
use shared::models::LogRecord;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Capacity of the broadcast channel between the poll loop and open
/// WebSocket subscriptions. There is no replay: a subscriber that lags past
/// this many batches skips ahead to the freshest one.
const CHANNEL_CAPACITY: usize = 16;

/// Application state shared across all request handlers.
///
/// Holds the backend client and the broadcast channel that fans each poll's
/// batch out to open subscriptions. Subscriptions come and go concurrently
/// while the poll loop publishes; the broadcast channel makes that safe
/// without an explicit registry.
#[derive(Clone)]
pub struct AppState {
    client: LokiClient,
    batches: broadcast::Sender<Arc<Vec<LogRecord>>>,
}

impl AppState {
    /// Creates the application state for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let (batches, _) = broadcast::channel(CHANNEL_CAPACITY);
        Ok(Self {
            client: LokiClient::new(config)?,
            batches,
        })
    }

    /// Returns the backend client.
    #[must_use]
    pub fn client(&self) -> &LokiClient {
        &self.client
    }

    /// Registers a new subscription and returns its receiving end.
    ///
    /// The subscription sees only batches published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Vec<LogRecord>>> {
        self.batches.subscribe()
    }

    /// Publishes one batch to every open subscription.
    ///
    /// Returns the number of subscriptions the batch was delivered to.
    /// Publishing with no subscribers is not an error; the batch is simply
    /// dropped.
    pub fn publish(&self, batch: Vec<LogRecord>) -> usize {
        self.batches.send(Arc::new(batch)).unwrap_or(0)
    }

    /// Number of currently open subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.batches.receiver_count()
    }
}
