//! Profile and texture types.
//!
//! These are owned by whoever runs the game client; Joinguard only reads
//! them (the join check looks at the display name) or passes them through
//! to the wrapped session service untouched.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PlayerUuid;

// ---------------------------------------------------------------------------
// GameProfile
// ---------------------------------------------------------------------------

/// A player's profile: who they are and what's attached to them.
///
/// Both `id` and `name` are optional because session services routinely
/// deal in partial profiles: a freshly typed-in name has no id yet, and a
/// profile looked up by id may not carry a name until it is filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfile {
    /// The player's identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlayerUuid>,

    /// The player's display name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Opaque signed properties (textures blob and friends).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<ProfileProperty>,
}

impl GameProfile {
    /// Creates a profile with an id and a name and no properties.
    pub fn new(id: Option<PlayerUuid>, name: impl Into<Option<String>>) -> Self {
        Self {
            id,
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Shorthand for a profile that only has a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(None, Some(name.into()))
    }

    /// Returns the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A profile is complete when it has both an id and a non-blank name.
    pub fn is_complete(&self) -> bool {
        self.id.is_some() && self.name().is_some_and(|n| !n.trim().is_empty())
    }

    /// Returns every property with the given name, in insertion order.
    pub fn properties_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ProfileProperty> + 'a {
        self.properties.iter().filter(move |p| p.name == name)
    }
}

impl fmt::Display for GameProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().unwrap_or("<unnamed>");
        match &self.id {
            Some(id) => write!(f, "{name} ({id})"),
            None => write!(f, "{name}"),
        }
    }
}

/// A single profile property.
///
/// `signature` is present when the property came from a service that signs
/// its data; callers that need to trust the value should check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl ProfileProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            signature: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Textures
// ---------------------------------------------------------------------------

/// The kinds of texture a profile can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextureType {
    Skin,
    Cape,
    Elytra,
}

impl fmt::Display for TextureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skin => write!(f, "SKIN"),
            Self::Cape => write!(f, "CAPE"),
            Self::Elytra => write!(f, "ELYTRA"),
        }
    }
}

/// A reference to a texture image plus its metadata (e.g. `model=slim`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTexture {
    pub url: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl ProfileTexture {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            metadata: HashMap::new(),
        }
    }

    /// Looks up one metadata entry.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// The texture hash: the last path segment of the URL.
    pub fn hash(&self) -> &str {
        let path = self.url.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/').next().unwrap_or_default()
    }
}
