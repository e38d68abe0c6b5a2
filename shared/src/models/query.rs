//! Raw Loki query response model.
//!
//! Mirrors the `{data: {result: [{stream, values}]}}` shape of the Loki
//! query API. Every field is defaulted so a response that deviates from the
//! expected shape decodes to an empty result instead of failing: the relay
//! degrades to empty output rather than erroring on malformed bodies.

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level Loki query response.
///
/// Transient: exists only between fetch and flattening.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    /// Response payload.
    #[serde(default)]
    pub data: QueryData,
}

/// The `data` object of a query response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryData {
    /// One entry per matched stream, in backend order.
    #[serde(default)]
    pub result: Vec<StreamResult>,
}

/// One stream in a query response: a label set plus its log lines.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamResult {
    /// The exact label set shared by every line in this stream.
    #[serde(default)]
    pub stream: HashMap<String, String>,

    /// `[timestamp, line]` pairs in backend order.
    #[serde(default)]
    pub values: Vec<(String, String)>,
}
