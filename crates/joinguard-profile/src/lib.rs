//! Player identity types for Joinguard.
//!
//! This crate defines the values that every other layer passes around:
//!
//! - **Identifiers** ([`PlayerUuid`]) — the 128-bit player id, parsed from
//!   either the compact (32 hex chars) or the canonical (hyphenated) form.
//! - **Profiles** ([`GameProfile`], [`ProfileProperty`]) — a player's display
//!   name, id, and opaque signed properties.
//! - **Textures** ([`TextureType`], [`ProfileTexture`]) — skin/cape
//!   references returned by a session service.
//! - **Errors** ([`IdError`]) — what can go wrong while parsing an id.
//!
//! # Architecture
//!
//! The profile layer has no I/O. It sits underneath the session layer,
//! which reads profiles and hands them to the wrapped session service.
//!
//! ```text
//! Transport (HTTP) → Session (join verification) → Profile (values)
//! ```

mod error;
mod id;
mod types;

pub use error::IdError;
pub use id::PlayerUuid;
pub use types::{GameProfile, ProfileProperty, ProfileTexture, TextureType};
