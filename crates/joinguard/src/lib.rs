//! # Joinguard
//!
//! Legacy join verification for game session services.
//!
//! Joinguard wraps an existing [`SessionService`](joinguard_session::SessionService)
//! and takes over the "join server" handshake: it checks the join against
//! the legacy plaintext endpoint itself, and forwards texture lookups,
//! profile completion, and join-status checks to the wrapped service
//! unchanged. It also ships the identifier parser and a profile resolver.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use joinguard::prelude::*;
//!
//! // Given the runtime's existing session service:
//! // let guard = JoinGuard::builder().build(existing_service)?;
//! // guard.service().join_server(&profile, &token, &server_id).await?;
//! ```

mod builder;
mod error;
mod logging;

pub use builder::{JoinGuard, JoinGuardBuilder};
pub use error::JoinGuardError;
pub use logging::init_tracing;

pub use joinguard_profile as profile;
pub use joinguard_session as session;
pub use joinguard_transport as transport;

pub mod prelude {
    pub use crate::{JoinGuard, JoinGuardBuilder, JoinGuardError, init_tracing};
    pub use joinguard_profile::{
        GameProfile, IdError, PlayerUuid, ProfileProperty, ProfileTexture, TextureType,
    };
    pub use joinguard_session::{
        JoinConfig, LegacyJoinService, ProfileLookupConfig, ProfileResolver, QueryEncoding,
        SessionError, SessionService,
    };
    pub use joinguard_transport::{
        HttpClientConfig, HttpResponse, HttpTransport, ReqwestTransport, TransportError,
    };
}
