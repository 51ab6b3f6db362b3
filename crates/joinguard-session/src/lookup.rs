//! Resolving a display name to its canonical profile.
//!
//! Players type their name however they like; the profile API knows the
//! exact spelling and the id. A lookup is one `GET`:
//!
//! ```text
//! GET https://api.mojang.com/users/profiles/minecraft/<name>
//!
//! 200 {"id":"069a79f444e94726a5befca90e38aaf5","name":"Notch"}
//! 204 / 404        ← no such player
//! ```

use std::sync::Arc;

use joinguard_profile::{GameProfile, PlayerUuid};
use joinguard_transport::{HttpTransport, TransportError};
use serde::Deserialize;

use crate::{ProfileLookupConfig, SessionError};

/// Body of a successful lookup. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct LookupBody {
    id: String,
    name: String,
}

/// Looks up profiles by display name through an injected transport.
pub struct ProfileResolver {
    transport: Arc<dyn HttpTransport>,
    config: ProfileLookupConfig,
}

impl ProfileResolver {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_config(transport, ProfileLookupConfig::default())
    }

    pub fn with_config(transport: Arc<dyn HttpTransport>, config: ProfileLookupConfig) -> Self {
        Self { transport, config }
    }

    /// Resolves `username` to a profile with the canonical name and id.
    ///
    /// # Errors
    /// - [`SessionError::InvalidArgument`] — blank name (no request is made)
    /// - [`SessionError::Unavailable`] — the API couldn't be reached
    /// - [`SessionError::NotFound`] — no player by that name
    /// - [`SessionError::InvalidResponse`] — unexpected status, body, or id
    /// - [`SessionError::Configuration`] — the endpoint isn't a usable base URL
    pub async fn resolve(&self, username: &str) -> Result<GameProfile, SessionError> {
        let name = username.trim();
        if name.is_empty() {
            return Err(SessionError::InvalidArgument("username is blank".into()));
        }

        let url = self.lookup_url(name)?;
        tracing::debug!(%name, %url, "looking up profile");

        let response = self.transport.get(&url).await.map_err(|e| match e {
            TransportError::InvalidUrl(endpoint) => SessionError::Configuration(endpoint),
            e => {
                tracing::error!(%name, error = %e, "cannot contact profile API");
                SessionError::unavailable("cannot contact profile API", e)
            }
        })?;

        match response.status {
            204 | 404 => return Err(SessionError::NotFound(name.to_string())),
            status if !response.is_success() => {
                return Err(SessionError::InvalidResponse(format!(
                    "unexpected status {status}: {}",
                    response.body
                )));
            }
            _ => {}
        }

        let body: LookupBody = serde_json::from_str(&response.body)
            .map_err(|e| SessionError::InvalidResponse(e.to_string()))?;
        let id = PlayerUuid::parse(&body.id)
            .map_err(|e| SessionError::InvalidResponse(e.to_string()))?;

        tracing::info!(%name, resolved = %body.name, %id, "profile resolved");
        Ok(GameProfile::new(Some(id), Some(body.name)))
    }

    /// Appends `name` to the endpoint as an encoded path segment.
    fn lookup_url(&self, name: &str) -> Result<String, SessionError> {
        let invalid = || SessionError::Configuration(self.config.endpoint.clone());

        let mut url = url::Url::parse(&self.config.endpoint).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push(name);
        Ok(url.into())
    }
}
