//! Flat log record model.
//!
//! Defines the `LogRecord` structure served by both delivery surfaces.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One log line with its stream labels attached.
///
/// This is the unit of output of the relay: the pull endpoint returns an
/// ordered list of these, and the push channel delivers one list per poll.
/// Records are immutable once constructed and compare structurally.
///
/// The timestamp is kept exactly as the backend sends it: a nanosecond
/// Unix epoch rendered as a decimal string. It is never parsed or
/// re-formatted on the way through.
///
/// # Example
///
/// ```
/// use shared::models::LogRecord;
/// use std::collections::HashMap;
///
/// let record = LogRecord {
///     timestamp: "1700000000000000000".to_string(),
///     message: "banned IP 1.2.3.4".to_string(),
///     labels: HashMap::from([("job".to_string(), "fail2ban".to_string())]),
/// };
///
/// assert_eq!(record.labels["job"], "fail2ban");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Backend-native timestamp: nanosecond epoch as text.
    pub timestamp: String,

    /// The log line content.
    pub message: String,

    /// Labels of the stream this line belongs to.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}
