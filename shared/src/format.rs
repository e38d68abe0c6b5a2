//! Flattening of Loki streams into ordered log records.
//!
//! The query API groups lines by stream; consumers of the relay want one
//! flat list. This module is the pure transform between the two shapes.

use crate::models::{LogRecord, QueryResponse};

/// Flattens a Loki query response into an ordered list of [`LogRecord`]s.
///
/// Order is outer loop over streams (backend order), inner loop over each
/// stream's values (backend order). No cross-stream merge or sort happens
/// here; each record carries the full label set of the stream it came from.
///
/// An empty or shape-deviating response yields an empty list.
///
/// # Example
///
/// ```
/// use shared::format::flatten_streams;
/// use shared::models::QueryResponse;
///
/// let response: QueryResponse = serde_json::from_str(
///     r#"{"data":{"result":[{"stream":{"job":"fail2ban"},"values":[["1000","banned"]]}]}}"#,
/// ).unwrap();
///
/// let records = flatten_streams(response);
/// assert_eq!(records[0].timestamp, "1000");
/// ```
#[must_use]
pub fn flatten_streams(response: QueryResponse) -> Vec<LogRecord> {
    let mut records = Vec::new();

    for stream in response.data.result {
        for (timestamp, message) in stream.values {
            records.push(LogRecord {
                timestamp,
                message,
                labels: stream.stream.clone(),
            });
        }
    }

    records
}
