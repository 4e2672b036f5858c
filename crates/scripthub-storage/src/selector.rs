//! Process-wide storage selection
//!
//! The backend is chosen once, at startup, from the database URL:
//! - unset or blank: seeded in-memory store
//! - `postgres://` / `postgresql://`: PostgreSQL
//! - `sqlite:` prefix or a `.db` / `.sqlite` / `.sqlite3` path: SQLite
//!
//! [`init`] binds the choice for the lifetime of the process; [`global`]
//! hands it out to callers.

use crate::{MemoryStorage, Storage, StorageError};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Environment variable holding the database URL
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

static STORAGE: OnceCell<Arc<dyn Storage>> = OnceCell::const_new();

/// Which backend to construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    /// Database file path, or `:memory:`
    Sqlite(String),
    /// Connection URL
    Postgres(String),
}

impl BackendKind {
    /// Decide the backend from an optional database URL
    pub fn from_database_url(url: Option<&str>) -> Result<Self, StorageError> {
        let url = match url.map(strip_quotes) {
            Some(url) if !url.is_empty() => url,
            _ => return Ok(BackendKind::Memory),
        };

        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok(BackendKind::Postgres(url.to_string()));
        }

        if let Some(rest) = url.strip_prefix("sqlite:") {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            let path = if path.is_empty() || path == ":memory:" {
                ":memory:"
            } else {
                path
            };
            return Ok(BackendKind::Sqlite(path.to_string()));
        }

        if [".db", ".sqlite", ".sqlite3"]
            .iter()
            .any(|ext| url.ends_with(ext))
        {
            return Ok(BackendKind::Sqlite(url.to_string()));
        }

        Err(StorageError::Config(format!(
            "unsupported database URL scheme: {}",
            redact(url)
        )))
    }

    /// Read [`DATABASE_URL_ENV`] and decide the backend
    pub fn from_env() -> Result<Self, StorageError> {
        let url = std::env::var(DATABASE_URL_ENV).ok();
        Self::from_database_url(url.as_deref())
    }

    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Memory => "memory",
            BackendKind::Sqlite(_) => "sqlite",
            BackendKind::Postgres(_) => "postgres",
        }
    }
}

/// Construct the backend described by `kind`
pub async fn connect(kind: &BackendKind) -> Result<Arc<dyn Storage>, StorageError> {
    match kind {
        BackendKind::Memory => Ok(Arc::new(MemoryStorage::new())),

        #[cfg(feature = "sqlite")]
        BackendKind::Sqlite(path) => {
            let storage = if path == ":memory:" {
                crate::SqliteStorage::in_memory()?
            } else {
                crate::SqliteStorage::new(path)?
            };
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "sqlite"))]
        BackendKind::Sqlite(_) => Err(StorageError::Config(
            "SQLite support is not compiled in (enable the `sqlite` feature)".into(),
        )),

        #[cfg(feature = "postgres")]
        BackendKind::Postgres(url) => Ok(Arc::new(crate::PostgresStorage::new(url).await?)),

        #[cfg(not(feature = "postgres"))]
        BackendKind::Postgres(_) => Err(StorageError::Config(
            "PostgreSQL support is not compiled in (enable the `postgres` feature)".into(),
        )),
    }
}

/// Bind the process-wide storage. Fails if it is already bound.
pub async fn init(kind: BackendKind) -> Result<Arc<dyn Storage>, StorageError> {
    if STORAGE.initialized() {
        return Err(StorageError::AlreadyInitialized);
    }

    let storage = connect(&kind).await?;
    STORAGE
        .set(storage.clone())
        .map_err(|_| StorageError::AlreadyInitialized)?;

    info!(backend = storage.backend_name(), "Storage initialized");
    Ok(storage)
}

/// Bind the process-wide storage from [`DATABASE_URL_ENV`]
pub async fn init_from_env() -> Result<Arc<dyn Storage>, StorageError> {
    init(BackendKind::from_env()?).await
}

/// The process-wide storage, if [`init`] has run
pub fn global() -> Option<Arc<dyn Storage>> {
    STORAGE.get().cloned()
}

fn strip_quotes(url: &str) -> &str {
    let url = url.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = url
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    url
}

/// Hide credentials before a URL reaches an error message or log
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme), Some(at)) if at > scheme => {
            format!("{}://***{}", &url[..scheme], &url[at..])
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_when_unset() {
        assert_eq!(
            BackendKind::from_database_url(None).unwrap(),
            BackendKind::Memory
        );
        assert_eq!(
            BackendKind::from_database_url(Some("  ")).unwrap(),
            BackendKind::Memory
        );
        assert_eq!(
            BackendKind::from_database_url(Some("\"\"")).unwrap(),
            BackendKind::Memory
        );
    }

    #[test]
    fn test_postgres_urls() {
        let kind =
            BackendKind::from_database_url(Some("postgres://hub:pw@localhost/hub")).unwrap();
        assert_eq!(
            kind,
            BackendKind::Postgres("postgres://hub:pw@localhost/hub".into())
        );

        let quoted = BackendKind::from_database_url(Some("'postgresql://db/hub'")).unwrap();
        assert_eq!(quoted, BackendKind::Postgres("postgresql://db/hub".into()));
        assert_eq!(quoted.name(), "postgres");
    }

    #[test]
    fn test_sqlite_urls() {
        let cases = [
            ("sqlite:hub.db", "hub.db"),
            ("sqlite://data/hub.db", "data/hub.db"),
            ("sqlite::memory:", ":memory:"),
            ("sqlite:", ":memory:"),
            ("./hub.sqlite", "./hub.sqlite"),
            ("/var/lib/hub.sqlite3", "/var/lib/hub.sqlite3"),
        ];
        for (url, path) in cases {
            assert_eq!(
                BackendKind::from_database_url(Some(url)).unwrap(),
                BackendKind::Sqlite(path.into()),
                "{}",
                url
            );
        }
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = BackendKind::from_database_url(Some("mysql://root:hunter2@db/hub")).unwrap_err();
        assert!(matches!(err, StorageError::Config(_)));
        assert!(!err.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn test_connect_memory() {
        let storage = connect(&BackendKind::Memory).await.unwrap();
        assert_eq!(storage.backend_name(), "memory");
        assert_eq!(storage.counts().await.unwrap().scripts, 55);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_connect_sqlite() {
        let storage = connect(&BackendKind::Sqlite(":memory:".into()))
            .await
            .unwrap();
        assert_eq!(storage.backend_name(), "sqlite");
        assert_eq!(storage.counts().await.unwrap().news, 2);
    }

    #[tokio::test]
    async fn test_init_binds_once() {
        let first = init(BackendKind::Memory).await.unwrap();
        let second = init(BackendKind::Memory).await;
        assert!(matches!(second, Err(StorageError::AlreadyInitialized)));

        let bound = global().unwrap();
        assert!(Arc::ptr_eq(&first, &bound));
    }
}
