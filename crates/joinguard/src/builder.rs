//! `JoinGuard` builder.
//!
//! This is the entry point for wiring Joinguard into a game runtime. It
//! ties the layers together: transport → session (decorator + lookup).

use std::sync::Arc;

use joinguard_session::{
    JoinConfig, LegacyJoinService, ProfileLookupConfig, ProfileResolver, SessionService,
};
use joinguard_transport::{HttpClientConfig, HttpTransport, ReqwestTransport};

use crate::JoinGuardError;

/// Builder for configuring a [`JoinGuard`].
///
/// # Example
///
/// ```rust,ignore
/// use joinguard::prelude::*;
///
/// let guard = JoinGuard::builder()
///     .http_config(HttpClientConfig::default())
///     .build(existing_session_service)?;
/// guard.service().join_server(&profile, &token, &server_id).await?;
/// ```
pub struct JoinGuardBuilder {
    http_config: HttpClientConfig,
    join_config: JoinConfig,
    lookup_config: ProfileLookupConfig,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl JoinGuardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            http_config: HttpClientConfig::default(),
            join_config: JoinConfig::default(),
            lookup_config: ProfileLookupConfig::default(),
            transport: None,
        }
    }

    /// Sets the timeouts and user agent of the HTTP client.
    ///
    /// Ignored if [`transport`](Self::transport) is also set.
    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Sets the join endpoint and query encoding.
    pub fn join_config(mut self, config: JoinConfig) -> Self {
        self.join_config = config;
        self
    }

    /// Sets the profile lookup endpoint.
    pub fn lookup_config(mut self, config: ProfileLookupConfig) -> Self {
        self.lookup_config = config;
        self
    }

    /// Uses an existing transport instead of building a `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the guard around `wrapped`.
    ///
    /// The join service and the profile resolver share one transport, and
    /// so one connection pool.
    ///
    /// # Errors
    /// [`JoinGuardError::Transport`] if the HTTP client can't be built.
    pub fn build(self, wrapped: Arc<dyn SessionService>) -> Result<JoinGuard, JoinGuardError> {
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.http_config)?),
        };

        tracing::debug!(endpoint = %self.join_config.endpoint, "building join guard");

        let service = Arc::new(LegacyJoinService::with_config(
            wrapped,
            Arc::clone(&transport),
            self.join_config,
        ));
        let resolver = ProfileResolver::with_config(transport, self.lookup_config);

        Ok(JoinGuard { service, resolver })
    }
}

impl Default for JoinGuardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured join verifier plus a profile resolver.
pub struct JoinGuard {
    service: Arc<LegacyJoinService>,
    resolver: ProfileResolver,
}

impl JoinGuard {
    /// Creates a new builder.
    pub fn builder() -> JoinGuardBuilder {
        JoinGuardBuilder::new()
    }

    /// The decorating session service.
    pub fn service(&self) -> &Arc<LegacyJoinService> {
        &self.service
    }

    /// The decorating session service as a trait object, ready to hand to
    /// a runtime that only knows [`SessionService`].
    pub fn session_service(&self) -> Arc<dyn SessionService> {
        Arc::clone(&self.service) as Arc<dyn SessionService>
    }

    pub fn resolver(&self) -> &ProfileResolver {
        &self.resolver
    }
}
