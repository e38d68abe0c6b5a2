//! Loki backend client.
//!
//! One query against the Loki query API, decoded into the shared response
//! model. No retry and no timeout beyond the transport default.

use crate::config::Config;
use crate::error::FetchError;
use shared::format::flatten_streams;
use shared::models::{LogRecord, QueryResponse};

/// Label selector the relay is hard-wired to. The query string is a
/// compile-time constant; only the backend URL is configurable.
pub const LOG_QUERY: &str = r#"{job="fail2ban"}"#;

/// HTTP client for the Loki query API.
#[derive(Debug, Clone)]
pub struct LokiClient {
    http: reqwest::Client,
    base_url: String,
}

impl LokiClient {
    /// Creates a client for the backend configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.loki_url.clone(),
        })
    }

    /// Performs one query against `<base>/loki/api/v1/query` and decodes the
    /// raw response.
    ///
    /// A body that is not JSON, or whose shape deviates from the documented
    /// `{data: {result: [...]}}` layout, decodes to an empty response with a
    /// warning rather than an error.
    ///
    /// # Errors
    ///
    /// - [`FetchError::BackendUnavailable`] on a transport failure
    /// - [`FetchError::BackendStatus`] on a non-success status code
    pub async fn query(&self) -> Result<QueryResponse, FetchError> {
        let response = self
            .http
            .get(format!("{}/loki/api/v1/query", self.base_url))
            .query(&[("query", LOG_QUERY)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::BackendStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Unexpected response shape from Loki, treating as empty");
            QueryResponse::default()
        }))
    }

    /// Fetches and flattens one batch of logs.
    ///
    /// This is the single operation both delivery surfaces go through: the
    /// pull endpoint calls it per request, the poll loop calls it per tick.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`LokiClient::query`].
    pub async fn fetch_logs(&self) -> Result<Vec<LogRecord>, FetchError> {
        let response = self.query().await?;
        Ok(flatten_streams(response))
    }
}
