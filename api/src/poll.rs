//! Poll loop.
//!
//! Runs for the lifetime of the process: every [`POLL_INTERVAL`] it fetches
//! one batch from the backend and publishes it to all open subscriptions.
//! Backend failures are logged and suppressed; a transient miss is
//! immaterial to a streaming consumer, so the loop never stops on one.

use crate::error::FetchError;
use crate::state::AppState;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Fixed wait between automatic re-queries of the backend.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Outcome of a single poll tick.
///
/// Making this explicit keeps the suppressed-vs-surfaced behavior testable:
/// the loop only ever logs these, but tests can assert on them directly.
#[derive(Debug)]
pub enum TickOutcome {
    /// The batch was fetched and delivered.
    Delivered {
        /// Records in the batch.
        records: usize,
        /// Subscriptions the batch reached.
        subscribers: usize,
    },
    /// The batch was fetched but nobody was listening.
    NoSubscribers {
        /// Records in the dropped batch.
        records: usize,
    },
    /// The backend call failed; nothing was delivered this tick.
    BackendFailure(FetchError),
}

/// Performs one fetch-and-publish cycle.
pub(crate) async fn poll_tick(state: &AppState) -> TickOutcome {
    let batch = match state.client().fetch_logs().await {
        Ok(batch) => batch,
        Err(e) => return TickOutcome::BackendFailure(e),
    };

    let records = batch.len();
    if state.subscriber_count() == 0 {
        return TickOutcome::NoSubscribers { records };
    }

    let subscribers = state.publish(batch);
    TickOutcome::Delivered {
        records,
        subscribers,
    }
}

/// Runs the poll loop until the process shuts down.
///
/// Ticks are spaced [`POLL_INTERVAL`] apart. If a cycle outlasts the
/// interval, the next tick starts only after the cycle completes; there is
/// no overlap and no catch-up burst.
pub async fn run_poll_loop(state: AppState) {
    let mut interval = tokio::time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        match poll_tick(&state).await {
            TickOutcome::Delivered {
                records,
                subscribers,
            } => {
                tracing::debug!(records, subscribers, "Delivered poll batch");
            }
            TickOutcome::NoSubscribers { records } => {
                tracing::trace!(records, "No open subscriptions, dropping batch");
            }
            TickOutcome::BackendFailure(e) => {
                tracing::warn!(error = %e, "Poll failed, retrying next interval");
            }
        }
    }
}
