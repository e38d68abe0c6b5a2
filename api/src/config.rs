//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible
//! defaults. The configuration is constructed once at startup and passed to
//! the components that need it; nothing reads the environment afterwards.

use anyhow::Result;
use std::net::SocketAddr;

/// Server configuration.
///
/// Configuration values can be set via environment variables:
/// - `LOKIRELAY_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `LOKIRELAY_PORT`: The port to listen on (default: 8000)
/// - `LOKI_URL`: Base URL of the Loki backend (default: "http://localhost:3100")
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Base URL of the Loki backend, without a trailing slash.
    pub loki_url: String,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOKIRELAY_PORT` is set but cannot be parsed as a
    /// valid port number.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("LOKIRELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("LOKIRELAY_PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()?
            .unwrap_or(8000);

        let loki_url =
            std::env::var("LOKI_URL").unwrap_or_else(|_| "http://localhost:3100".to_string());

        Ok(Self {
            host,
            port,
            loki_url: loki_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Panics
    ///
    /// Panics if the host and port combination cannot be parsed as a valid
    /// socket address.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address from config")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            loki_url: "http://localhost:3100".to_string(),
        }
    }
}
