//! HTTP client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default for every timeout: 30 seconds.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the shared HTTP client.
///
/// Timeouts apply to every request the client makes and are fixed when the
/// client is built. There is no per-call override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// How long to wait for the TCP (and TLS) connection to come up.
    pub connect_timeout: Duration,

    /// Upper bound on the whole exchange, from send to last body byte.
    pub request_timeout: Duration,

    /// Longest allowed gap between two reads of the response.
    pub read_timeout: Duration,

    /// `User-Agent` header. `None` sends the client library's default.
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_TIMEOUT,
            request_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            user_agent: Some(concat!("joinguard/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl HttpClientConfig {
    /// Sets all three timeouts to the same value.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.request_timeout = timeout;
        self.read_timeout = timeout;
        self
    }
}
