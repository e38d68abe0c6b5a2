//! Lokirelay Shared Library
//!
//! This crate contains the types and transforms shared between the relay
//! server and the CLI.
//!
//! # Modules
//!
//! - [`models`] - The flat log record and the raw Loki query response
//! - [`format`] - Flattening of Loki streams into ordered log records
//!
//! # Example
//!
//! ```
//! use shared::format::flatten_streams;
//! use shared::models::QueryResponse;
//!
//! let raw = r#"{"data":{"result":[
//!     {"stream":{"job":"fail2ban"},"values":[["1000","banned IP 1.2.3.4"]]}
//! ]}}"#;
//! let response: QueryResponse = serde_json::from_str(raw).unwrap();
//! let records = flatten_streams(response);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "banned IP 1.2.3.4");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod format;
pub mod models;

/// Re-export common dependencies for convenience.
pub use serde;
pub use serde_json;
