//! HTTP transport abstraction layer for Joinguard.
//!
//! Provides the [`HttpTransport`] trait that the session layer talks to,
//! so the join check never owns a concrete client. The real implementation
//! ([`ReqwestTransport`]) is built once from an [`HttpClientConfig`] and
//! injected; tests inject a mock instead.
//!
//! # Feature Flags
//!
//! - `reqwest` (default) — [`ReqwestTransport`] via `reqwest`
//! - `mock` — exposes `MockHttpTransport` (generated by `mockall`) for use
//!   in other crates' tests

mod config;
mod error;
#[cfg(feature = "reqwest")]
mod http;

pub use config::HttpClientConfig;
pub use error::TransportError;
#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;

use async_trait::async_trait;

/// A completed HTTP exchange: status code plus the whole body as text.
///
/// The body is returned for every status, not just 2xx. Plaintext
/// endpoints often answer errors with a 200 or put the reason in a 4xx
/// body, and the caller is the one who knows how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric HTTP status (200, 404, ...).
    pub status: u16,
    /// The full response body decoded as text.
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a `200` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP requests on behalf of the session layer.
///
/// Implementations are shared (`Arc<dyn HttpTransport>`) across every
/// caller, so they must be `Send + Sync` and handle their own connection
/// pooling. Timeouts are an implementation concern fixed at construction;
/// there is no per-call timeout.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a `GET` to `url` and reads the whole response body.
    ///
    /// # Errors
    /// Any failure to complete the exchange: bad URL, refused connection,
    /// DNS failure, timeout, or a broken body stream.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
