//! HTTP transport implementation using `reqwest`.

use std::io;

use async_trait::async_trait;

use crate::{HttpClientConfig, HttpResponse, HttpTransport, TransportError};

/// An [`HttpTransport`] backed by a pooled [`reqwest::Client`].
///
/// Build it once and share it: cloning is cheap (the client is an `Arc`
/// inside) and every clone uses the same connection pool and timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with the given timeouts and user agent.
    ///
    /// # Errors
    /// [`TransportError::Build`] if the TLS backend can't be initialized.
    pub fn new(config: &HttpClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .read_timeout(config.read_timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        tracing::info!(
            connect_timeout_ms = config.connect_timeout.as_millis() as u64,
            request_timeout_ms = config.request_timeout.as_millis() as u64,
            read_timeout_ms = config.read_timeout.as_millis() as u64,
            "HTTP client initialized"
        );
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|_| TransportError::InvalidUrl(without_query(url).to_string()))?;

        let response = self.client.get(parsed).send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        tracing::debug!(status, body_len = body.len(), "HTTP exchange complete");
        Ok(HttpResponse { status, body })
    }
}

/// Drops everything from the first `?` on. Query strings carry credentials
/// (the join endpoint's `sessionId`), so they never go into an error.
fn without_query(url: &str) -> &str {
    url.split('?').next().unwrap_or_default()
}

/// Sorts a `reqwest` error into our variants, keeping it as the io source.
///
/// The URL is stripped first: `reqwest` prints it, query and all, in the
/// error's `Display`.
fn classify(e: reqwest::Error) -> TransportError {
    let e = e.without_url();
    if e.is_timeout() {
        TransportError::TimedOut(io::Error::new(io::ErrorKind::TimedOut, e))
    } else if e.is_connect() {
        TransportError::ConnectFailed(io::Error::new(io::ErrorKind::ConnectionRefused, e))
    } else if e.is_body() || e.is_decode() {
        TransportError::ReadFailed(io::Error::new(io::ErrorKind::UnexpectedEof, e))
    } else {
        TransportError::RequestFailed(io::Error::other(e))
    }
}
