//! Unified error type for Joinguard.

use joinguard_profile::IdError;
use joinguard_session::SessionError;
use joinguard_transport::TransportError;

/// Anything a caller of [`JoinGuard`](crate::JoinGuard) can run into.
///
/// Parsing an id, building the HTTP client and verifying a join each fail
/// in their own crate's type; this folds them together so application code
/// can `?` through all three and match on one enum.
#[derive(Debug, thiserror::Error)]
pub enum JoinGuardError {
    /// A malformed player identifier.
    #[error(transparent)]
    Id(#[from] IdError),

    /// A transport-level error (client build, connect, timeout, read).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A session-level error (bad argument, rejected, unavailable).
    #[error(transparent)]
    Session(#[from] SessionError),
}
