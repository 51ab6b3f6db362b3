//! Error types for the profile layer.
//!
//! Each crate in Joinguard defines its own error enum. An `IdError` always
//! means the caller handed us a bad identifier string; there is nothing
//! transient about it and retrying the same input will fail the same way.

/// Errors produced while parsing a [`PlayerUuid`](crate::PlayerUuid).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    /// The input string was empty.
    #[error("identifier string cannot be empty")]
    Empty,

    /// A compact (separator-free) identifier must be exactly 32 characters.
    ///
    /// `len` is the number of characters actually received, so the log line
    /// is enough to diagnose without re-running.
    #[error("identifier without hyphens must be 32 characters long, got {len}")]
    WrongLength { len: usize },

    /// The input has the right overall shape but isn't a valid identifier:
    /// non-hex digits, separators in the wrong places, wrong group sizes.
    #[error("malformed identifier {input:?}: {reason}")]
    Malformed { input: String, reason: String },
}
