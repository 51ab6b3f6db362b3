//! Join verification against the legacy plaintext endpoint.
//!
//! [`LegacyJoinService`] is a decorator: it wraps any other
//! [`SessionService`] and replaces exactly one operation, `join_server`.
//! The other three are handed straight to the wrapped service.
//!
//! ## The protocol
//!
//! ```text
//! GET http://session.minecraft.net/game/joinserver.jsp
//!         ?user=<display name>&sessionId=<token>&serverId=<server id>
//!
//! 200 text/plain
//! OK              ← anything else is a rejection
//! ```
//!
//! The check is a whole-body match ignoring ASCII case: `OK`, `ok`, and
//! `Ok` pass; `OK\n`, ` OK`, and `OKAY` don't.

use std::collections::HashMap;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use joinguard_profile::{GameProfile, ProfileTexture, TextureType};
use joinguard_transport::{HttpTransport, TransportError};

use crate::{JoinConfig, SessionError, SessionService};

/// The only body the endpoint sends for an accepted join.
const SUCCESS_BODY: &str = "OK";

/// Stand-in for the session token in log output.
const REDACTED: &str = "<redacted>";

// ---------------------------------------------------------------------------
// JoinRequest
// ---------------------------------------------------------------------------

/// A validated join request, ready to be turned into a URL.
///
/// Borrowing from the caller's arguments keeps this free: it lives for one
/// call and is never stored.
#[derive(Clone, Copy)]
pub struct JoinRequest<'a> {
    pub user: &'a str,
    pub session_id: &'a str,
    pub server_id: &'a str,
}

impl<'a> JoinRequest<'a> {
    /// Validates the three inputs.
    ///
    /// # Errors
    /// [`SessionError::InvalidArgument`] if the profile has no name, or if
    /// the name, token, or server id is blank (empty or all whitespace).
    pub fn new(
        profile: &'a GameProfile,
        session_id: &'a str,
        server_id: &'a str,
    ) -> Result<Self, SessionError> {
        let user = profile
            .name()
            .ok_or_else(|| SessionError::InvalidArgument("profile has no name".into()))?;

        if is_blank(user) {
            return Err(SessionError::InvalidArgument("profile name is blank".into()));
        }
        if is_blank(session_id) {
            return Err(SessionError::InvalidArgument(
                "authentication token is blank".into(),
            ));
        }
        if is_blank(server_id) {
            return Err(SessionError::InvalidArgument("server id is blank".into()));
        }

        Ok(Self {
            user,
            session_id,
            server_id,
        })
    }

    /// The URL that actually goes on the wire.
    pub fn to_url(&self, config: &JoinConfig) -> String {
        let session_id = config.query_encoding.apply(self.session_id);
        self.build_url(config, &session_id)
    }

    /// The same URL with the session token replaced, safe to log.
    pub fn redacted_url(&self, config: &JoinConfig) -> String {
        self.build_url(config, REDACTED)
    }

    fn build_url(&self, config: &JoinConfig, session_id: &str) -> String {
        let encoding = config.query_encoding;
        // Tolerate an endpoint that already carries a query string.
        let separator = if config.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}user={}&sessionId={session_id}&serverId={}",
            config.endpoint,
            encoding.apply(self.user),
            encoding.apply(self.server_id),
        )
    }
}

/// Hand-written so the token never ends up in a `{:?}`.
impl fmt::Debug for JoinRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinRequest")
            .field("user", &self.user)
            .field("session_id", &REDACTED)
            .field("server_id", &self.server_id)
            .finish()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Reads the endpoint's answer.
///
/// Only the exact body `OK` (any ASCII case) counts. An empty body is a
/// rejection like any other.
fn classify_response(body: String) -> Result<(), SessionError> {
    if body.eq_ignore_ascii_case(SUCCESS_BODY) {
        Ok(())
    } else {
        Err(SessionError::Rejected { response: body })
    }
}

// ---------------------------------------------------------------------------
// LegacyJoinService
// ---------------------------------------------------------------------------

/// A [`SessionService`] that verifies joins itself and delegates the rest.
///
/// Holds no mutable state. One instance can be put in an `Arc` and used
/// from any number of tasks at once; each `join_server` call is its own
/// independent exchange.
///
/// # Example
///
/// ```rust,ignore
/// let transport = Arc::new(ReqwestTransport::new(&HttpClientConfig::default())?);
/// let service = LegacyJoinService::new(existing_service, transport);
/// service.join_server(&profile, &token, &server_hash).await?;
/// ```
pub struct LegacyJoinService {
    /// The service we decorate. Shared with whoever built us.
    inner: Arc<dyn SessionService>,

    /// How we reach the endpoint.
    transport: Arc<dyn HttpTransport>,

    config: JoinConfig,
}

impl LegacyJoinService {
    /// Wraps `inner`, verifying joins against the default legacy endpoint.
    pub fn new(inner: Arc<dyn SessionService>, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_config(inner, transport, JoinConfig::default())
    }

    /// Wraps `inner` with a custom endpoint/encoding.
    pub fn with_config(
        inner: Arc<dyn SessionService>,
        transport: Arc<dyn HttpTransport>,
        config: JoinConfig,
    ) -> Self {
        Self {
            inner,
            transport,
            config,
        }
    }
}

impl fmt::Debug for LegacyJoinService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyJoinService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SessionService for LegacyJoinService {
    async fn join_server(
        &self,
        profile: &GameProfile,
        authentication_token: &str,
        server_id: &str,
    ) -> Result<(), SessionError> {
        // Validate first: a bad argument must never cost a network call.
        let request = JoinRequest::new(profile, authentication_token, server_id)?;
        let url = request.to_url(&self.config);

        tracing::info!(
            user = request.user,
            server_id = request.server_id,
            url = %request.redacted_url(&self.config),
            "verifying server join"
        );

        let response = match self.transport.get(&url).await {
            Ok(response) => response,
            Err(TransportError::InvalidUrl(endpoint)) => {
                tracing::error!(%endpoint, "join endpoint is not a usable URL");
                return Err(SessionError::Configuration(endpoint));
            }
            Err(e) => {
                tracing::error!(
                    user = request.user,
                    error = %e,
                    "cannot contact authentication server"
                );
                return Err(SessionError::unavailable(
                    "cannot contact authentication server",
                    e,
                ));
            }
        };

        let status = response.status;
        match classify_response(response.body) {
            Ok(()) => {
                tracing::info!(user = request.user, "server join verified");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(user = request.user, status, error = %e, "server join rejected");
                Err(e)
            }
        }
    }

    async fn has_joined_server(
        &self,
        user: &GameProfile,
        server_id: &str,
        address: Option<IpAddr>,
    ) -> Result<Option<GameProfile>, SessionError> {
        self.inner.has_joined_server(user, server_id, address).await
    }

    async fn get_textures(
        &self,
        profile: &GameProfile,
        require_secure: bool,
    ) -> HashMap<TextureType, ProfileTexture> {
        self.inner.get_textures(profile, require_secure).await
    }

    async fn fill_profile_properties(
        &self,
        profile: GameProfile,
        require_secure: bool,
    ) -> GameProfile {
        self.inner.fill_profile_properties(profile, require_secure).await
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use joinguard_profile::{PlayerUuid, ProfileProperty};
    use joinguard_transport::{HttpResponse, MockHttpTransport};

    use super::*;
    use crate::QueryEncoding;
    use crate::service::MockSessionService;

    // =====================================================================
    // Helpers
    // =====================================================================

    fn alice() -> GameProfile {
        GameProfile::new(
            Some(PlayerUuid::parse("069a79f444e94726a5befca90e38aaf5").unwrap()),
            Some("alice".to_string()),
        )
    }

    /// A transport that must never be called.
    fn untouched_transport() -> MockHttpTransport {
        let mut transport = MockHttpTransport::new();
        transport.expect_get().times(0);
        transport
    }

    /// A transport that answers once with `body`.
    fn transport_returning(body: &'static str) -> MockHttpTransport {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(move |_| Ok(HttpResponse::ok(body)));
        transport
    }

    fn service(inner: MockSessionService, transport: MockHttpTransport) -> LegacyJoinService {
        LegacyJoinService::new(Arc::new(inner), Arc::new(transport))
    }

    /// The wrapped service should never see a join: the decorator owns it.
    fn inner_without_join() -> MockSessionService {
        let mut inner = MockSessionService::new();
        inner.expect_join_server().times(0);
        inner
    }

    // =====================================================================
    // JoinRequest
    // =====================================================================

    #[test]
    fn test_request_url_has_three_raw_params() {
        let profile = alice();
        let request = JoinRequest::new(&profile, "token123", "server1").unwrap();

        assert_eq!(
            request.to_url(&JoinConfig::default()),
            "http://session.minecraft.net/game/joinserver.jsp?user=alice&sessionId=token123&serverId=server1"
        );
    }

    #[test]
    fn test_request_url_raw_does_not_encode() {
        let profile = GameProfile::named("a&b");
        let request = JoinRequest::new(&profile, "t=1", "s 1").unwrap();

        let url = request.to_url(&JoinConfig::default());

        assert!(url.ends_with("?user=a&b&sessionId=t=1&serverId=s 1"), "{url}");
    }

    #[test]
    fn test_request_url_percent_encodes_when_asked() {
        let profile = GameProfile::named("a&b");
        let request = JoinRequest::new(&profile, "t=1", "s 1").unwrap();
        let config = JoinConfig {
            query_encoding: QueryEncoding::Percent,
            ..JoinConfig::default()
        };

        let url = request.to_url(&config);

        assert!(url.ends_with("?user=a%26b&sessionId=t%3D1&serverId=s+1"), "{url}");
    }

    #[test]
    fn test_request_url_appends_to_existing_query() {
        let profile = alice();
        let request = JoinRequest::new(&profile, "tok", "srv").unwrap();
        let config = JoinConfig {
            endpoint: "http://auth.test/join?v=1".into(),
            ..JoinConfig::default()
        };

        assert_eq!(
            request.to_url(&config),
            "http://auth.test/join?v=1&user=alice&sessionId=tok&serverId=srv"
        );
    }

    #[test]
    fn test_redacted_url_and_debug_hide_token() {
        let profile = alice();
        let request = JoinRequest::new(&profile, "secret-token", "server1").unwrap();

        let redacted = request.redacted_url(&JoinConfig::default());
        assert!(!redacted.contains("secret-token"));
        assert!(redacted.contains("sessionId=<redacted>"));
        assert!(!format!("{request:?}").contains("secret-token"));
    }

    #[test]
    fn test_request_rejects_missing_or_blank_inputs() {
        let nameless = GameProfile::default();
        let blank_name = GameProfile::named("  ");
        let profile = alice();

        let cases: [(&GameProfile, &str, &str); 5] = [
            (&nameless, "token", "server"),
            (&blank_name, "token", "server"),
            (&profile, "", "server"),
            (&profile, " \t", "server"),
            (&profile, "token", "   "),
        ];

        for (profile, token, server) in cases {
            let result = JoinRequest::new(profile, token, server);
            assert!(
                matches!(result, Err(SessionError::InvalidArgument(_))),
                "expected InvalidArgument for ({profile:?}, {token:?}, {server:?})"
            );
        }
    }

    // =====================================================================
    // classify_response()
    // =====================================================================

    #[test]
    fn test_classify_accepts_ok_in_any_case() {
        for body in ["OK", "ok", "Ok", "oK"] {
            assert!(classify_response(body.to_string()).is_ok(), "{body:?}");
        }
    }

    #[test]
    fn test_classify_is_whole_body_match() {
        for body in ["", "OK\n", " OK", "OKAY", "not OK", "Bad login"] {
            let result = classify_response(body.to_string());
            assert!(
                matches!(&result, Err(SessionError::Rejected { response }) if response == body),
                "{body:?} should be rejected with its body"
            );
        }
    }

    // =====================================================================
    // join_server()
    // =====================================================================

    #[tokio::test]
    async fn test_join_server_ok_body_succeeds() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|url| {
                url == "http://session.minecraft.net/game/joinserver.jsp?user=alice&sessionId=token123&serverId=server1"
            })
            .times(1)
            .returning(|_| Ok(HttpResponse::ok("OK")));
        let svc = service(inner_without_join(), transport);

        let result = svc.join_server(&alice(), "token123", "server1").await;

        assert!(result.is_ok(), "expected success, got {result:?}");
    }

    #[tokio::test]
    async fn test_join_server_bad_login_is_rejected_with_body() {
        let svc = service(inner_without_join(), transport_returning("Bad login"));

        let result = svc.join_server(&alice(), "token123", "server1").await;

        match result {
            Err(SessionError::Rejected { response }) => assert_eq!(response, "Bad login"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_join_server_empty_body_is_rejected() {
        let svc = service(inner_without_join(), transport_returning(""));

        let result = svc.join_server(&alice(), "token123", "server1").await;

        assert!(matches!(result, Err(SessionError::Rejected { response }) if response.is_empty()));
    }

    #[tokio::test]
    async fn test_join_server_classifies_body_not_status() {
        // The endpoint's status line isn't part of the contract; the body is.
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(500, "ok")));
        let svc = service(inner_without_join(), transport);

        assert!(svc.join_server(&alice(), "t", "s").await.is_ok());
    }

    #[tokio::test]
    async fn test_join_server_connection_error_is_unavailable() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Err(TransportError::connection_refused("connection refused")));
        let svc = service(inner_without_join(), transport);

        let result = svc.join_server(&alice(), "token123", "server1").await;

        match result {
            Err(SessionError::Unavailable { source, .. }) => {
                assert!(matches!(source, TransportError::ConnectFailed(_)));
                assert!(source.to_string().contains("connection refused"));
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_join_server_unusable_endpoint_is_configuration_error() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Err(TransportError::InvalidUrl("not-a-url/join".into())));
        let svc = service(inner_without_join(), transport);

        let result = svc.join_server(&alice(), "token123", "server1").await;

        match result {
            Err(SessionError::Configuration(endpoint)) => {
                assert_eq!(endpoint, "not-a-url/join");
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_join_server_invalid_arguments_never_touch_network() {
        let nameless = GameProfile::default();
        let blank = GameProfile::named(" ");

        let svc = service(inner_without_join(), untouched_transport());

        let results = [
            svc.join_server(&nameless, "token123", "server1").await,
            svc.join_server(&blank, "token123", "server1").await,
            svc.join_server(&alice(), "", "server1").await,
            svc.join_server(&alice(), "token123", " ").await,
        ];

        for result in results {
            assert!(
                matches!(result, Err(SessionError::InvalidArgument(_))),
                "expected InvalidArgument, got {result:?}"
            );
        }
        // `times(0)` on the transport is checked when `svc` drops.
    }

    #[tokio::test]
    async fn test_join_server_concurrent_calls_are_independent() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(8)
            .returning(|url| {
                if url.contains("user=good") {
                    Ok(HttpResponse::ok("OK"))
                } else {
                    Ok(HttpResponse::ok("Bad login"))
                }
            });
        let svc = Arc::new(service(inner_without_join(), transport));

        let mut handles = Vec::new();
        for i in 0..8 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                let name = if i % 2 == 0 { "good" } else { "bad" };
                let profile = GameProfile::named(name);
                (i, svc.join_server(&profile, "tok", "srv").await)
            }));
        }

        for handle in handles {
            let (i, result) = handle.await.unwrap();
            if i % 2 == 0 {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(SessionError::Rejected { .. })));
            }
        }
    }

    // =====================================================================
    // Pass-through operations
    // =====================================================================

    #[tokio::test]
    async fn test_has_joined_server_forwards_once_unchanged() {
        let expected = alice();
        let returned = expected.clone();
        let address = Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)));

        let mut inner = MockSessionService::new();
        inner
            .expect_has_joined_server()
            .withf(move |user, server_id, addr| {
                user.name() == Some("alice") && server_id == "server1" && *addr == address
            })
            .times(1)
            .returning(move |_, _, _| Ok(Some(returned.clone())));
        let svc = service(inner, untouched_transport());

        let result = svc
            .has_joined_server(&GameProfile::named("alice"), "server1", address)
            .await
            .unwrap();

        assert_eq!(result, Some(expected));
    }

    #[tokio::test]
    async fn test_has_joined_server_passes_through_not_joined() {
        let mut inner = MockSessionService::new();
        inner
            .expect_has_joined_server()
            .times(1)
            .returning(|_, _, _| Ok(None));
        let svc = service(inner, untouched_transport());

        let result = svc
            .has_joined_server(&alice(), "server1", None)
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_has_joined_server_propagates_unavailable() {
        let mut inner = MockSessionService::new();
        inner.expect_has_joined_server().times(1).returning(|_, _, _| {
            Err(SessionError::unavailable(
                "session server down",
                TransportError::connection_refused("refused"),
            ))
        });
        let svc = service(inner, untouched_transport());

        let result = svc.has_joined_server(&alice(), "server1", None).await;

        assert!(matches!(result, Err(e) if e.is_unavailable()));
    }

    #[tokio::test]
    async fn test_get_textures_forwards_once_unchanged() {
        let mut textures = HashMap::new();
        textures.insert(
            TextureType::Skin,
            ProfileTexture::new("http://textures.test/texture/abc"),
        );
        let returned = textures.clone();

        let mut inner = MockSessionService::new();
        inner
            .expect_get_textures()
            .withf(|profile, require_secure| profile.name() == Some("alice") && *require_secure)
            .times(1)
            .returning(move |_, _| returned.clone());
        let svc = service(inner, untouched_transport());

        let result = svc.get_textures(&alice(), true).await;

        assert_eq!(result, textures);
    }

    #[tokio::test]
    async fn test_fill_profile_properties_forwards_once_unchanged() {
        let mut filled = alice();
        filled
            .properties
            .push(ProfileProperty::new("textures", "e30="));
        let returned = filled.clone();

        let mut inner = MockSessionService::new();
        inner
            .expect_fill_profile_properties()
            .withf(|profile, require_secure| *profile == alice() && !*require_secure)
            .times(1)
            .returning(move |_, _| returned.clone());
        let svc = service(inner, untouched_transport());

        let result = svc.fill_profile_properties(alice(), false).await;

        assert_eq!(result, filled);
    }
}
