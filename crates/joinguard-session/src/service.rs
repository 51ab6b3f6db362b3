//! The session service capability.
//!
//! Joinguard doesn't implement texture or profile retrieval. Whatever game
//! runtime it's plugged into already has a session service for that. What
//! Joinguard needs is a common shape for "a session service", so it can
//! wrap one, and so a real, cached, or fake implementation can be swapped
//! in without touching the wrapper.
//!
//! That shape is the [`SessionService`] trait.

use std::collections::HashMap;
use std::net::IpAddr;

use async_trait::async_trait;
use joinguard_profile::{GameProfile, ProfileTexture, TextureType};

use crate::SessionError;

/// The four operations every session service supports.
///
/// # Trait bounds
///
/// - `Send + Sync` → a service is shared across tasks behind an `Arc` and
///   may be called from several of them at once.
///
/// The trait is dyn-compatible (via `async_trait`), so decorators hold an
/// `Arc<dyn SessionService>` and don't care which implementation is inside.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Tells the session server that `profile` is about to join the server
    /// identified by `server_id`, proving it with `authentication_token`.
    ///
    /// # Returns
    /// - `Ok(())` — the join was accepted
    /// - `Err(SessionError::InvalidArgument)` — missing/blank input
    /// - `Err(SessionError::Unavailable)` — the server couldn't be reached
    /// - `Err(SessionError::Rejected)` — the server refused the join
    /// - `Err(SessionError::Configuration)` — the endpoint is unusable
    async fn join_server(
        &self,
        profile: &GameProfile,
        authentication_token: &str,
        server_id: &str,
    ) -> Result<(), SessionError>;

    /// Asks whether `user` has announced a join to `server_id`.
    ///
    /// Returns the authoritative profile if so, `None` if not. `address`
    /// is the client's IP when the server wants it checked too.
    async fn has_joined_server(
        &self,
        user: &GameProfile,
        server_id: &str,
        address: Option<IpAddr>,
    ) -> Result<Option<GameProfile>, SessionError>;

    /// Returns the textures attached to `profile`, keyed by type.
    ///
    /// With `require_secure`, implementations should drop textures whose
    /// signature doesn't check out.
    async fn get_textures(
        &self,
        profile: &GameProfile,
        require_secure: bool,
    ) -> HashMap<TextureType, ProfileTexture>;

    /// Fills in the properties of `profile` and hands it back.
    ///
    /// May return the same profile unchanged if there's nothing to add.
    async fn fill_profile_properties(
        &self,
        profile: GameProfile,
        require_secure: bool,
    ) -> GameProfile;
}
