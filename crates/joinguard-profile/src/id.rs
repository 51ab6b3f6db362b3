//! The player identifier and its two textual forms.
//!
//! Session services hand identifiers around in two spellings:
//!
//! ```text
//! compact:   0f8fad5bd9cb469fa16570867728950e            (32 chars)
//! canonical: 0f8fad5b-d9cb-469f-a165-70867728950e        (36 chars)
//! ```
//!
//! Both denote the same 128 bits. [`PlayerUuid::parse`] accepts either and
//! always produces the same value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::IdError;

/// Length of the compact (separator-free) form.
const COMPACT_LEN: usize = 32;

/// Length of the canonical (hyphenated) form.
const CANONICAL_LEN: usize = 36;

/// Offsets (into the compact form) where the canonical form puts a `-`.
/// These split the 16 bytes into groups of 4-2-2-2-6.
const SEPARATOR_OFFSETS: [usize; 4] = [8, 12, 16, 20];

const SEPARATOR: char = '-';

/// A player's 128-bit identifier.
///
/// A newtype over [`uuid::Uuid`] so the rest of the workspace can't confuse
/// a player id with some other UUID, and so parsing goes through one place.
///
/// Serializes as the canonical string; deserializes through
/// [`PlayerUuid::parse`], so JSON from services that use the compact form
/// (the public profile API does) loads fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerUuid(Uuid);

impl PlayerUuid {
    /// Parses an identifier in compact or canonical form.
    ///
    /// - Anything containing a `-` is treated as canonical and must be the
    ///   exact 8-4-4-4-12 layout.
    /// - Everything else must be exactly 32 hex digits. It is rewritten into
    ///   canonical form (separators at 8, 12, 16, 20) and parsed from there.
    ///
    /// # Errors
    /// - [`IdError::Empty`] — empty input
    /// - [`IdError::WrongLength`] — compact input that isn't 32 characters
    /// - [`IdError::Malformed`] — anything else that doesn't parse
    pub fn parse(input: &str) -> Result<Self, IdError> {
        if input.is_empty() {
            return Err(IdError::Empty);
        }

        if input.contains(SEPARATOR) {
            return parse_canonical(input);
        }

        let len = input.chars().count();
        if len != COMPACT_LEN {
            return Err(IdError::WrongLength { len });
        }
        if !input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::Malformed {
                input: input.to_string(),
                reason: "expected 32 hexadecimal digits".into(),
            });
        }

        parse_canonical(&hyphenate(input))
    }

    /// Returns the compact (no separators, lowercase) rendering.
    pub fn simple(&self) -> String {
        self.0.simple().to_string()
    }
}

/// Inserts separators into a 32-character compact id.
///
/// The caller has already checked the input is 32 ASCII hex digits, so
/// byte offsets and char offsets agree.
fn hyphenate(compact: &str) -> String {
    let mut out = String::with_capacity(CANONICAL_LEN);
    let mut start = 0;
    for offset in SEPARATOR_OFFSETS {
        out.push_str(&compact[start..offset]);
        out.push(SEPARATOR);
        start = offset;
    }
    out.push_str(&compact[start..]);
    out
}

/// Parses the strict 8-4-4-4-12 layout.
///
/// `Uuid::try_parse` also accepts braced and `urn:uuid:` forms, so the
/// length check keeps us to the plain hyphenated spelling.
fn parse_canonical(input: &str) -> Result<PlayerUuid, IdError> {
    if input.len() != CANONICAL_LEN {
        return Err(IdError::Malformed {
            input: input.to_string(),
            reason: format!("expected {CANONICAL_LEN} characters in 8-4-4-4-12 form"),
        });
    }
    Uuid::try_parse(input)
        .map(PlayerUuid)
        .map_err(|e| IdError::Malformed {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

impl fmt::Display for PlayerUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for PlayerUuid {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PlayerUuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlayerUuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
