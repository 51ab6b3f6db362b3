//! Session service layer for Joinguard.
//!
//! This crate handles the "join server" handshake and everything around it:
//!
//! 1. **The capability** — what any session service can do
//!    ([`SessionService`] trait)
//! 2. **Join verification** — a decorator that checks joins against the
//!    legacy plaintext endpoint and forwards everything else
//!    ([`LegacyJoinService`])
//! 3. **Profile lookup** — resolving a display name to its canonical
//!    profile ([`ProfileResolver`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Game client runtime (above)  ← owns sessions, injects the service
//!     ↕
//! Session Layer (this crate)   ← verifies joins, delegates the rest
//!     ↕
//! Transport Layer (below)      ← HTTP exchange with timeouts
//! ```

mod config;
mod error;
mod legacy;
mod lookup;
mod service;

pub use config::{
    JoinConfig, LEGACY_JOIN_ENDPOINT, PROFILE_LOOKUP_ENDPOINT, ProfileLookupConfig,
    QueryEncoding,
};
pub use error::SessionError;
pub use legacy::{JoinRequest, LegacyJoinService};
pub use lookup::ProfileResolver;
pub use service::SessionService;
