//! Error types for the session layer.

use joinguard_transport::TransportError;

/// Errors that can occur while verifying joins or talking to a session
/// service.
///
/// The variants split along "whose fault is it":
///
/// - [`InvalidArgument`](Self::InvalidArgument) — the caller's. Detected
///   before any network activity; fix the input, don't retry.
/// - [`Unavailable`](Self::Unavailable) — the network's. The server could
///   not be reached; try again later.
/// - [`Rejected`](Self::Rejected) — the credentials'. The server answered
///   and said no; retrying the same session won't help.
/// - [`Configuration`](Self::Configuration) — the deployment's. An endpoint
///   can't be turned into a request; nothing changes until it's fixed.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A required argument was missing or blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The authentication server could not be reached.
    ///
    /// `source` is the underlying transport failure (refused, timed out,
    /// broken stream), kept intact so callers can inspect it.
    #[error("{message}: {source}")]
    Unavailable {
        message: String,
        #[source]
        source: TransportError,
    },

    /// The server answered, but not with a success.
    ///
    /// `response` is the literal body it sent back, unmodified.
    #[error("authentication rejected, response was {response:?}")]
    Rejected { response: String },

    /// A lookup found no profile for the given name.
    #[error("no profile found for {0:?}")]
    NotFound(String),

    /// A configured endpoint isn't a usable URL.
    ///
    /// Permanent: retrying won't help, the configuration has to change.
    #[error("misconfigured endpoint: {0}")]
    Configuration(String),

    /// The server answered with something we couldn't interpret.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SessionError {
    /// Wraps a transport failure with a short description of what we were
    /// trying to reach.
    pub fn unavailable(message: impl Into<String>, source: TransportError) -> Self {
        Self::Unavailable {
            message: message.into(),
            source,
        }
    }

    /// `true` when the failure is transient (network), as opposed to a bad
    /// input or an explicit rejection.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
