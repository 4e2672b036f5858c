//! Script Hub Core - entity schema and validation
//!
//! This crate provides the types every storage backend speaks:
//! - Users, scripts, news articles and system stats snapshots
//! - Creation drafts that validate into typed creation objects
//! - Partial-update patches
//! - Password hashing and verification

pub mod category;
pub mod error;
pub mod news;
pub mod password;
pub mod script;
pub mod stats;
pub mod user;
mod validate;

pub use category::ScriptCategory;
pub use error::{Error, Result, ValidationError};
pub use news::{NewNewsArticle, NewsArticle, NewsDraft, NewsPatch};
pub use script::{NewScript, Script, ScriptDraft, ScriptPatch, DEFAULT_AUTHOR};
pub use stats::{NewStatsSnapshot, StatsDraft, StatsSnapshot, HISTORY_LIMIT, MAX_FPS};
pub use user::{NewUser, RegisterUser, User};

/// Generate a fresh random entity identifier (UUID v4).
///
/// Random rather than sequential so generated ids never collide with the
/// short numeric ids used by the fixture catalog.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Deserialize a field that distinguishes "absent" from an explicit `null`.
///
/// Used with `#[serde(default, deserialize_with = "double_option")]` so a
/// patch can clear a nullable column.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}
