//! Data models for the relay.
//!
//! Two shapes matter here: the raw nested response Loki hands back from its
//! query API, and the flat [`LogRecord`] the relay actually serves.

mod query;
mod record;

pub use query::{QueryData, QueryResponse, StreamResult};
pub use record::LogRecord;
