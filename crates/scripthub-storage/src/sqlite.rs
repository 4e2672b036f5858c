//! SQLite storage backend

use crate::{fixtures, like_pattern, Storage, StorageError, StorageStats};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use parking_lot::Mutex;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use scripthub_core::{
    new_id, password, NewNewsArticle, NewScript, NewStatsSnapshot, NewUser, NewsArticle,
    NewsPatch, Script, ScriptCategory, ScriptPatch, StatsSnapshot, User, HISTORY_LIMIT,
};
use std::path::Path;
use tracing::{debug, info};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS scripts (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        code TEXT NOT NULL,
        author TEXT NOT NULL DEFAULT 'User',
        user_id TEXT REFERENCES users(id) ON DELETE SET NULL,
        is_public INTEGER NOT NULL DEFAULT 1,
        is_favorite INTEGER NOT NULL DEFAULT 0,
        execution_count INTEGER NOT NULL DEFAULT 0,
        last_executed INTEGER,
        created_at INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_scripts_category ON scripts(category);
    CREATE INDEX IF NOT EXISTS idx_scripts_execution_count ON scripts(execution_count);

    CREATE TABLE IF NOT EXISTS news_articles (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        summary TEXT NOT NULL,
        image_url TEXT,
        source TEXT NOT NULL,
        category TEXT NOT NULL,
        published_at INTEGER NOT NULL,
        created_at INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS system_stats (
        id TEXT PRIMARY KEY,
        cpu_usage INTEGER NOT NULL,
        gpu_usage INTEGER NOT NULL,
        ram_usage INTEGER NOT NULL,
        fps INTEGER NOT NULL,
        timestamp INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS user_sessions (
        sid TEXT PRIMARY KEY,
        sess TEXT NOT NULL,
        expire INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_session_expire ON user_sessions(expire);
"#;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at, updated_at";

const SCRIPT_COLUMNS: &str = "id, name, description, category, code, author, user_id, \
     is_public, is_favorite, execution_count, last_executed, created_at";

const NEWS_COLUMNS: &str =
    "id, title, content, summary, image_url, source, category, published_at, created_at";

const STATS_COLUMNS: &str = "id, cpu_usage, gpu_usage, ram_usage, fps, timestamp";

/// SQLite storage backend
///
/// Embedded persistence for single-node setups. Timestamps are stored as
/// epoch milliseconds; `rowid` records insertion order.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open (or create) the database at `path`, seeding empty tables
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(db_err)?;
        Self::with_connection(conn, true)
    }

    /// Create a seeded in-memory database
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::with_connection(conn, true)
    }

    /// Create an in-memory database with no data at all
    pub fn empty_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::with_connection(conn, false)
    }

    fn with_connection(conn: Connection, seed: bool) -> Result<Self, StorageError> {
        register_functions(&conn)?;
        let storage = Self {
            conn: Mutex::new(conn),
        };

        storage.init_schema()?;
        if seed {
            storage.seed()?;
        }
        Ok(storage)
    }

    fn init_schema(&self) -> Result<(), StorageError> {
        let conn = self.conn.lock();
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(db_err)?;
        conn.execute_batch(SCHEMA).map_err(db_err)?;
        Ok(())
    }

    /// Insert the demo catalog into whichever tables are still empty
    fn seed(&self) -> Result<(), StorageError> {
        let now = now();
        let mut conn = self.conn.lock();
        let tx = conn.transaction().map_err(db_err)?;

        if table_is_empty(&tx, "scripts")? {
            for script in fixtures::scripts(now) {
                insert_script(&tx, &script).map_err(db_err)?;
            }
            info!("Seeded script catalog");
        }
        if table_is_empty(&tx, "news_articles")? {
            for article in fixtures::news(now) {
                insert_news(&tx, &article).map_err(db_err)?;
            }
        }
        if table_is_empty(&tx, "system_stats")? {
            insert_stats(&tx, &fixtures::initial_stats(now)).map_err(db_err)?;
        }

        tx.commit().map_err(db_err)
    }

    fn query_scripts(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Script>, StorageError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql).map_err(db_err)?;
        let rows = stmt.query_map(params, script_from_row).map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    fn query_news(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<NewsArticle>, StorageError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql).map_err(db_err)?;
        let rows = stmt.query_map(params, news_from_row).map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    fn query_user(&self, column: &str, value: &str) -> Result<Option<User>, StorageError> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!("SELECT {} FROM users WHERE {} = ?1", USER_COLUMNS, column),
            params![value],
            user_from_row,
        )
        .optional()
        .map_err(db_err)
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        self.query_user("id", id)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        self.query_user("username", username)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        self.query_user("email", email)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let password_hash = password::hash_password(user.password())?;
        let now = now();
        let created = User {
            id: new_id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let conn = self.conn.lock();
        for (field, value) in [("username", &created.username), ("email", &created.email)] {
            if exists(&conn, &format!("SELECT 1 FROM users WHERE {} = ?1", field), value)? {
                return Err(StorageError::Conflict {
                    field,
                    value: value.clone(),
                });
            }
        }

        conn.execute(
            &format!(
                "INSERT INTO users ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                USER_COLUMNS
            ),
            params![
                created.id,
                created.username,
                created.email,
                created.password_hash,
                millis(created.created_at),
                millis(created.updated_at),
            ],
        )
        .map_err(db_err)?;

        debug!(user_id = %created.id, "User created");
        Ok(created)
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StorageError> {
        let conn = self.conn.lock();
        // Owned scripts are orphaned by the foreign key
        let affected = conn
            .execute("DELETE FROM users WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(affected > 0)
    }

    async fn list_scripts(&self) -> Result<Vec<Script>, StorageError> {
        self.query_scripts(
            &format!(
                "SELECT {} FROM scripts ORDER BY execution_count DESC, rowid ASC",
                SCRIPT_COLUMNS
            ),
            [],
        )
    }

    async fn list_scripts_by_category(
        &self,
        category: ScriptCategory,
    ) -> Result<Vec<Script>, StorageError> {
        self.query_scripts(
            &format!(
                "SELECT {} FROM scripts WHERE category = ?1 ORDER BY rowid",
                SCRIPT_COLUMNS
            ),
            params![category.as_str()],
        )
    }

    async fn get_script(&self, id: &str) -> Result<Option<Script>, StorageError> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!("SELECT {} FROM scripts WHERE id = ?1", SCRIPT_COLUMNS),
            params![id],
            script_from_row,
        )
        .optional()
        .map_err(db_err)
    }

    async fn create_script(&self, script: NewScript) -> Result<Script, StorageError> {
        let created = script.into_script(new_id(), now());

        let conn = self.conn.lock();
        if let Some(owner) = &created.user_id {
            if !exists(&conn, "SELECT 1 FROM users WHERE id = ?1", owner)? {
                return Err(StorageError::InvalidReference(owner.clone()));
            }
        }
        insert_script(&conn, &created).map_err(db_err)?;

        Ok(created)
    }

    async fn update_script(
        &self,
        id: &str,
        patch: ScriptPatch,
    ) -> Result<Option<Script>, StorageError> {
        let patch = patch.normalize();
        let conn = self.conn.lock();
        if let Some(Some(owner)) = &patch.user_id {
            if !exists(&conn, "SELECT 1 FROM users WHERE id = ?1", owner)? {
                return Err(StorageError::InvalidReference(owner.clone()));
            }
        }

        let (set_owner, owner) = match patch.user_id {
            Some(owner) => (true, owner),
            None => (false, None),
        };

        conn.query_row(
            &format!(
                r#"
                UPDATE scripts SET
                    name = COALESCE(?2, name),
                    description = COALESCE(?3, description),
                    category = COALESCE(?4, category),
                    code = COALESCE(?5, code),
                    author = COALESCE(?6, author),
                    user_id = CASE WHEN ?7 THEN ?8 ELSE user_id END,
                    is_public = COALESCE(?9, is_public)
                WHERE id = ?1
                RETURNING {}
                "#,
                SCRIPT_COLUMNS
            ),
            params![
                id,
                patch.name,
                patch.description,
                patch.category.map(|c| c.as_str()),
                patch.code,
                patch.author,
                set_owner,
                owner,
                patch.is_public,
            ],
            script_from_row,
        )
        .optional()
        .map_err(db_err)
    }

    async fn delete_script(&self, id: &str) -> Result<bool, StorageError> {
        let conn = self.conn.lock();
        let affected = conn
            .execute("DELETE FROM scripts WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(affected > 0)
    }

    async fn increment_execution(&self, id: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock();
        conn.execute(
            "UPDATE scripts SET execution_count = execution_count + 1, last_executed = ?2 \
             WHERE id = ?1",
            params![id, millis(now())],
        )
        .map_err(db_err)?;
        Ok(())
    }

    async fn toggle_favorite(&self, id: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock();
        conn.execute(
            "UPDATE scripts SET is_favorite = 1 - is_favorite WHERE id = ?1",
            params![id],
        )
        .map_err(db_err)?;
        Ok(())
    }

    async fn search_scripts(&self, query: &str) -> Result<Vec<Script>, StorageError> {
        self.query_scripts(
            &format!(
                r#"
                SELECT {} FROM scripts
                WHERE unicode_lower(name) LIKE ?1 ESCAPE '\'
                   OR unicode_lower(description) LIKE ?1 ESCAPE '\'
                   OR unicode_lower(code) LIKE ?1 ESCAPE '\'
                ORDER BY rowid
                "#,
                SCRIPT_COLUMNS
            ),
            params![like_pattern(query)],
        )
    }

    async fn list_news(&self) -> Result<Vec<NewsArticle>, StorageError> {
        self.query_news(
            &format!(
                "SELECT {} FROM news_articles ORDER BY published_at DESC, rowid ASC",
                NEWS_COLUMNS
            ),
            [],
        )
    }

    async fn list_news_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<NewsArticle>, StorageError> {
        self.query_news(
            &format!(
                "SELECT {} FROM news_articles WHERE category = ?1 ORDER BY rowid",
                NEWS_COLUMNS
            ),
            params![category],
        )
    }

    async fn get_news(&self, id: &str) -> Result<Option<NewsArticle>, StorageError> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!("SELECT {} FROM news_articles WHERE id = ?1", NEWS_COLUMNS),
            params![id],
            news_from_row,
        )
        .optional()
        .map_err(db_err)
    }

    async fn create_news(&self, article: NewNewsArticle) -> Result<NewsArticle, StorageError> {
        let mut created = article.into_article(new_id(), now());
        created.published_at = created.published_at.trunc_subsecs(3);

        let conn = self.conn.lock();
        insert_news(&conn, &created).map_err(db_err)?;
        Ok(created)
    }

    async fn update_news(
        &self,
        id: &str,
        patch: NewsPatch,
    ) -> Result<Option<NewsArticle>, StorageError> {
        let patch = patch.normalize();
        let (set_image, image_url) = match patch.image_url {
            Some(url) => (true, url),
            None => (false, None),
        };

        let conn = self.conn.lock();
        conn.query_row(
            &format!(
                r#"
                UPDATE news_articles SET
                    title = COALESCE(?2, title),
                    content = COALESCE(?3, content),
                    summary = COALESCE(?4, summary),
                    image_url = CASE WHEN ?5 THEN ?6 ELSE image_url END,
                    source = COALESCE(?7, source),
                    category = COALESCE(?8, category)
                WHERE id = ?1
                RETURNING {}
                "#,
                NEWS_COLUMNS
            ),
            params![
                id,
                patch.title,
                patch.content,
                patch.summary,
                set_image,
                image_url,
                patch.source,
                patch.category,
            ],
            news_from_row,
        )
        .optional()
        .map_err(db_err)
    }

    async fn delete_news(&self, id: &str) -> Result<bool, StorageError> {
        let conn = self.conn.lock();
        let affected = conn
            .execute("DELETE FROM news_articles WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(affected > 0)
    }

    async fn current_stats(&self) -> Result<Option<StatsSnapshot>, StorageError> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!(
                "SELECT {} FROM system_stats ORDER BY rowid DESC LIMIT 1",
                STATS_COLUMNS
            ),
            [],
            stats_from_row,
        )
        .optional()
        .map_err(db_err)
    }

    async fn record_stats(&self, stats: NewStatsSnapshot) -> Result<StatsSnapshot, StorageError> {
        let snapshot = stats.into_snapshot(new_id(), now());

        let mut conn = self.conn.lock();
        let tx = conn.transaction().map_err(db_err)?;
        insert_stats(&tx, &snapshot).map_err(db_err)?;
        tx.execute(
            "DELETE FROM system_stats WHERE rowid NOT IN \
             (SELECT rowid FROM system_stats ORDER BY rowid DESC LIMIT ?1)",
            params![HISTORY_LIMIT as i64],
        )
        .map_err(db_err)?;
        tx.commit().map_err(db_err)?;

        Ok(snapshot)
    }

    async fn stats_history(&self) -> Result<Vec<StatsSnapshot>, StorageError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM system_stats ORDER BY rowid ASC",
                STATS_COLUMNS
            ))
            .map_err(db_err)?;
        let rows = stmt.query_map([], stats_from_row).map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    async fn counts(&self) -> Result<StorageStats, StorageError> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT (SELECT COUNT(*) FROM users), (SELECT COUNT(*) FROM scripts), \
             (SELECT COUNT(*) FROM news_articles), (SELECT COUNT(*) FROM system_stats)",
            [],
            |row| {
                Ok(StorageStats {
                    users: row.get::<_, i64>(0)? as usize,
                    scripts: row.get::<_, i64>(1)? as usize,
                    news: row.get::<_, i64>(2)? as usize,
                    snapshots: row.get::<_, i64>(3)? as usize,
                })
            },
        )
        .map_err(db_err)
    }
}

fn db_err(e: rusqlite::Error) -> StorageError {
    StorageError::Database(e.to_string())
}

/// Current time at the precision the database keeps
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn millis(t: DateTime<Utc>) -> i64 {
    t.timestamp_millis()
}

fn timestamp(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let ms: i64 = row.get(idx)?;
    Utc.timestamp_millis_opt(ms).single().ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, "timestamp out of range".into())
    })
}

fn table_is_empty(conn: &Connection, table: &str) -> Result<bool, StorageError> {
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .map_err(db_err)?;
    Ok(count == 0)
}

fn exists(conn: &Connection, sql: &str, value: &str) -> Result<bool, StorageError> {
    conn.query_row(sql, params![value], |_| Ok(()))
        .optional()
        .map(|found| found.is_some())
        .map_err(db_err)
}

fn insert_script(conn: &Connection, script: &Script) -> rusqlite::Result<usize> {
    conn.execute(
        &format!(
            "INSERT INTO scripts ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            SCRIPT_COLUMNS
        ),
        params![
            script.id,
            script.name,
            script.description,
            script.category.as_str(),
            script.code,
            script.author,
            script.user_id,
            script.is_public,
            script.is_favorite,
            script.execution_count as i64,
            script.last_executed.map(millis),
            millis(script.created_at),
        ],
    )
}

fn insert_news(conn: &Connection, article: &NewsArticle) -> rusqlite::Result<usize> {
    conn.execute(
        &format!(
            "INSERT INTO news_articles ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            NEWS_COLUMNS
        ),
        params![
            article.id,
            article.title,
            article.content,
            article.summary,
            article.image_url,
            article.source,
            article.category,
            millis(article.published_at),
            millis(article.created_at),
        ],
    )
}

fn insert_stats(conn: &Connection, snapshot: &StatsSnapshot) -> rusqlite::Result<usize> {
    conn.execute(
        &format!(
            "INSERT INTO system_stats ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            STATS_COLUMNS
        ),
        params![
            snapshot.id,
            snapshot.cpu_usage,
            snapshot.gpu_usage,
            snapshot.ram_usage,
            snapshot.fps,
            millis(snapshot.timestamp),
        ],
    )
}

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: timestamp(row, 4)?,
        updated_at: timestamp(row, 5)?,
    })
}

fn script_from_row(row: &Row) -> rusqlite::Result<Script> {
    let category: String = row.get(3)?;
    let category = category
        .parse::<ScriptCategory>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    let last_executed = match row.get::<_, Option<i64>>(10)? {
        Some(_) => Some(timestamp(row, 10)?),
        None => None,
    };

    Ok(Script {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        category,
        code: row.get(4)?,
        author: row.get(5)?,
        user_id: row.get(6)?,
        is_public: row.get(7)?,
        is_favorite: row.get(8)?,
        execution_count: row.get::<_, i64>(9)?.max(0) as u64,
        last_executed,
        created_at: timestamp(row, 11)?,
    })
}

/// Built-in `lower()` only folds ASCII; searches fold full Unicode case.
fn register_functions(conn: &Connection) -> Result<(), StorageError> {
    conn.create_scalar_function(
        "unicode_lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|text| text.to_lowercase()))
        },
    )
    .map_err(db_err)
}

fn news_from_row(row: &Row) -> rusqlite::Result<NewsArticle> {
    Ok(NewsArticle {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        summary: row.get(3)?,
        image_url: row.get(4)?,
        source: row.get(5)?,
        category: row.get(6)?,
        published_at: timestamp(row, 7)?,
        created_at: timestamp(row, 8)?,
    })
}

fn stats_from_row(row: &Row) -> rusqlite::Result<StatsSnapshot> {
    Ok(StatsSnapshot {
        id: row.get(0)?,
        cpu_usage: row.get(1)?,
        gpu_usage: row.get(2)?,
        ram_usage: row.get(3)?,
        fps: row.get(4)?,
        timestamp: timestamp(row, 5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripthub_core::{RegisterUser, ScriptDraft};

    fn script(name: &str) -> NewScript {
        ScriptDraft {
            name: name.into(),
            description: "Clicks the nearest fishing spot".into(),
            category: "fishing".into(),
            code: "Loop { Click }".into(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_seeded_in_memory() {
        let storage = SqliteStorage::in_memory().unwrap();
        let counts = storage.counts().await.unwrap();
        assert_eq!(counts.scripts, 55);
        assert_eq!(counts.news, 2);
        assert_eq!(counts.snapshots, 1);

        let top = storage.list_scripts().await.unwrap();
        assert_eq!(top[0].name, "High Alchemy Pro");

        let news = storage.list_news().await.unwrap();
        assert_eq!(news[0].id, "1");
    }

    #[tokio::test]
    async fn test_roundtrip_preserves_fields() {
        let storage = SqliteStorage::empty_in_memory().unwrap();
        let created = storage.create_script(script("Fisher")).await.unwrap();
        let loaded = storage.get_script(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded, created);

        storage.increment_execution(&created.id).await.unwrap();
        storage.toggle_favorite(&created.id).await.unwrap();
        let loaded = storage.get_script(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded.execution_count, 1);
        assert!(loaded.is_favorite);
        assert!(loaded.last_executed.is_some());
    }

    #[tokio::test]
    async fn test_persistence_and_idempotent_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hub.db");

        let id = {
            let storage = SqliteStorage::new(&path).unwrap();
            let created = storage.create_script(script("Persistent")).await.unwrap();
            storage
                .create_user(
                    RegisterUser::new("keeper", "keeper@example.com", "hunter22")
                        .validate()
                        .unwrap(),
                )
                .await
                .unwrap();
            created.id
        };

        // Reopening must not duplicate the catalog
        let storage = SqliteStorage::new(&path).unwrap();
        let counts = storage.counts().await.unwrap();
        assert_eq!(counts.scripts, 56);
        assert_eq!(counts.users, 1);
        assert!(storage.get_script(&id).await.unwrap().is_some());

        let user = storage.get_user_by_username("keeper").await.unwrap().unwrap();
        assert!(storage.verify_password(&user, "hunter22").await);
    }

    #[tokio::test]
    async fn test_update_clears_owner() {
        let storage = SqliteStorage::empty_in_memory().unwrap();
        let user = storage
            .create_user(
                RegisterUser::new("author", "author@example.com", "secret1")
                    .validate()
                    .unwrap(),
            )
            .await
            .unwrap();
        let created = storage.create_script(script("Owned")).await.unwrap();

        let owned = storage
            .update_script(
                &created.id,
                ScriptPatch {
                    user_id: Some(Some(user.id.clone())),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(owned.user_id.as_deref(), Some(user.id.as_str()));
        assert_eq!(owned.name, "Owned");

        let cleared = storage
            .update_script(
                &created.id,
                ScriptPatch {
                    user_id: Some(None),
                    is_public: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cleared.user_id, None);
        assert!(!cleared.is_public);

        let err = storage
            .update_script(
                &created.id,
                ScriptPatch {
                    user_id: Some(Some("ghost".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let storage = SqliteStorage::empty_in_memory().unwrap();
        storage.create_script(script("Plain")).await.unwrap();
        let odd = ScriptDraft {
            name: "Drop 100% of logs".into(),
            description: "d".into(),
            category: "woodcutting".into(),
            code: "c".into(),
            ..Default::default()
        };
        storage
            .create_script(odd.validate().unwrap())
            .await
            .unwrap();

        let found = storage.search_scripts("100%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert!(storage.search_scripts("_").await.unwrap().is_empty());
        assert_eq!(storage.search_scripts("").await.unwrap().len(), 2);
    }
}
