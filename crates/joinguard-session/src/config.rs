//! Endpoint configuration for the session layer.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The legacy plaintext join endpoint.
pub const LEGACY_JOIN_ENDPOINT: &str = "http://session.minecraft.net/game/joinserver.jsp";

/// Base URL for looking up a profile by display name.
pub const PROFILE_LOOKUP_ENDPOINT: &str = "https://api.mojang.com/users/profiles/minecraft";

// ---------------------------------------------------------------------------
// QueryEncoding
// ---------------------------------------------------------------------------

/// How query values are written into the join URL.
///
/// The legacy endpoint has always been sent raw values, and changing that
/// changes the bytes on the wire, so `Raw` is the default. `Percent` is
/// there for deployments that would rather have well-formed URLs.
///
/// Note that even with `Raw`, the HTTP client normalizes the URL before
/// sending (a space becomes `%20`, for example). `Raw` means *we* don't
/// encode; it can't stop the client from producing a valid request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryEncoding {
    /// Values are inserted as-is.
    #[default]
    Raw,
    /// Values are `application/x-www-form-urlencoded`.
    Percent,
}

impl QueryEncoding {
    /// Renders one query value according to this encoding.
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Raw => Cow::Borrowed(value),
            Self::Percent => Cow::Owned(
                url::form_urlencoded::byte_serialize(value.as_bytes()).collect(),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// JoinConfig
// ---------------------------------------------------------------------------

/// Configuration for [`LegacyJoinService`](crate::LegacyJoinService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// The join endpoint, without query string.
    pub endpoint: String,

    /// How `user`, `sessionId`, and `serverId` are written into the URL.
    pub query_encoding: QueryEncoding,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            endpoint: LEGACY_JOIN_ENDPOINT.to_string(),
            query_encoding: QueryEncoding::Raw,
        }
    }
}

// ---------------------------------------------------------------------------
// ProfileLookupConfig
// ---------------------------------------------------------------------------

/// Configuration for [`ProfileResolver`](crate::ProfileResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLookupConfig {
    /// Base URL; the display name is appended as the last path segment.
    pub endpoint: String,
}

impl Default for ProfileLookupConfig {
    fn default() -> Self {
        Self {
            endpoint: PROFILE_LOOKUP_ENDPOINT.to_string(),
        }
    }
}
