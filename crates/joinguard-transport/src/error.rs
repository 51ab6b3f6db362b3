use std::io;

/// Errors that can occur in the transport layer.
///
/// The I/O-flavoured variants carry a [`std::io::Error`] as their source.
/// Client-library errors are wrapped into one with a matching
/// [`io::ErrorKind`], so callers can inspect the kind without depending on
/// the client library, and tests can build these errors by hand.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid url {0:?}")]
    InvalidUrl(String),

    /// Establishing the connection failed (refused, DNS, TLS handshake).
    #[error("connect failed: {0}")]
    ConnectFailed(#[source] io::Error),

    /// The connect, request, or read timeout elapsed.
    #[error("timed out: {0}")]
    TimedOut(#[source] io::Error),

    /// Sending the request failed after the connection was up.
    #[error("request failed: {0}")]
    RequestFailed(#[source] io::Error),

    /// Reading or decoding the response body failed.
    #[error("read failed: {0}")]
    ReadFailed(#[source] io::Error),

    /// The client could not be constructed from its configuration.
    #[error("client build failed: {0}")]
    Build(String),
}

impl TransportError {
    /// Convenience for tests and stubs: a refused connection.
    pub fn connection_refused(msg: impl Into<String>) -> Self {
        Self::ConnectFailed(io::Error::new(io::ErrorKind::ConnectionRefused, msg.into()))
    }

    /// Returns `true` for the timeout variant.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }
}
