//! Script Hub Storage Backends
//!
//! Every backend implements the same [`Storage`] contract:
//! - Memory (default): seeded fixture data, volatile
//! - SQLite: embedded persistence
//! - PostgreSQL: shared relational persistence
//!
//! The [`selector`] binds one backend for the whole process.

mod fixtures;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod selector;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use async_trait::async_trait;
use scripthub_core::{
    password, NewNewsArticle, NewScript, NewStatsSnapshot, NewUser, NewsArticle, NewsPatch,
    Script, ScriptCategory, ScriptPatch, StatsSnapshot, User,
};

/// Storage capability contract.
///
/// "Not found" is never an error: getters return `None`, deletes return
/// `false`, and counter/flag operations on a missing id do nothing.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    // Users

    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Hash the password and store the account.
    ///
    /// Fails with [`StorageError::Conflict`] if the username or email is
    /// taken, leaving stored state untouched.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// Check a login attempt against the stored hash
    async fn verify_password(&self, user: &User, attempt: &str) -> bool {
        password::verify_password(&user.password_hash, attempt)
    }

    /// Remove an account. Scripts it owned are kept with no owner.
    async fn delete_user(&self, id: &str) -> Result<bool, StorageError>;

    // Scripts

    /// All scripts, most executed first; ties keep insertion order
    async fn list_scripts(&self) -> Result<Vec<Script>, StorageError>;

    async fn list_scripts_by_category(
        &self,
        category: ScriptCategory,
    ) -> Result<Vec<Script>, StorageError>;

    async fn get_script(&self, id: &str) -> Result<Option<Script>, StorageError>;

    async fn create_script(&self, script: NewScript) -> Result<Script, StorageError>;

    async fn update_script(
        &self,
        id: &str,
        patch: ScriptPatch,
    ) -> Result<Option<Script>, StorageError>;

    async fn delete_script(&self, id: &str) -> Result<bool, StorageError>;

    /// Bump the execution counter by one and stamp `last_executed`
    async fn increment_execution(&self, id: &str) -> Result<(), StorageError>;

    async fn toggle_favorite(&self, id: &str) -> Result<(), StorageError>;

    /// Case-insensitive substring search over name, description and code
    async fn search_scripts(&self, query: &str) -> Result<Vec<Script>, StorageError>;

    // News

    /// All articles, newest publication first
    async fn list_news(&self) -> Result<Vec<NewsArticle>, StorageError>;

    async fn list_news_by_category(&self, category: &str)
        -> Result<Vec<NewsArticle>, StorageError>;

    async fn get_news(&self, id: &str) -> Result<Option<NewsArticle>, StorageError>;

    async fn create_news(&self, article: NewNewsArticle) -> Result<NewsArticle, StorageError>;

    async fn update_news(
        &self,
        id: &str,
        patch: NewsPatch,
    ) -> Result<Option<NewsArticle>, StorageError>;

    async fn delete_news(&self, id: &str) -> Result<bool, StorageError>;

    // System stats

    /// Most recent snapshot, if any was recorded
    async fn current_stats(&self) -> Result<Option<StatsSnapshot>, StorageError>;

    async fn record_stats(&self, stats: NewStatsSnapshot) -> Result<StatsSnapshot, StorageError>;

    /// Retained snapshots, oldest first, at most [`scripthub_core::HISTORY_LIMIT`]
    async fn stats_history(&self) -> Result<Vec<StatsSnapshot>, StorageError>;

    /// Entity counts
    async fn counts(&self) -> Result<StorageStats, StorageError>;
}

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{field} is already taken: {value}")]
    Conflict { field: &'static str, value: String },

    #[error("Referenced user does not exist: {0}")]
    InvalidReference(String),

    #[error("Password error: {0}")]
    Password(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage is already initialized")]
    AlreadyInitialized,
}

impl From<scripthub_core::Error> for StorageError {
    fn from(e: scripthub_core::Error) -> Self {
        match e {
            scripthub_core::Error::PasswordHash(msg) => StorageError::Password(msg),
            other => StorageError::Serialization(other.to_string()),
        }
    }
}

/// Entity counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStats {
    pub users: usize,
    pub scripts: usize,
    pub news: usize,
    pub snapshots: usize,
}

/// Build a `LIKE` pattern matching `query` anywhere, with wildcards in
/// the query itself taken literally (escape character `\`).
#[cfg(any(feature = "sqlite", feature = "postgres"))]
pub(crate) fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStorage;
pub use selector::BackendKind;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStorage;

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("Fish"), "%fish%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern(""), "%%");
    }
}
