//! PostgreSQL storage backend

use crate::{fixtures, like_pattern, Storage, StorageError, StorageStats};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use scripthub_core::{
    new_id, password, NewNewsArticle, NewScript, NewStatsSnapshot, NewUser, NewsArticle,
    NewsPatch, Script, ScriptCategory, ScriptPatch, StatsSnapshot, User, HISTORY_LIMIT,
};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Executor, Postgres, Row, Transaction};
use tracing::{debug, info};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );

    CREATE TABLE IF NOT EXISTS scripts (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        seq BIGSERIAL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        code TEXT NOT NULL,
        author TEXT NOT NULL DEFAULT 'User',
        user_id TEXT REFERENCES users(id) ON DELETE SET NULL,
        is_public BOOLEAN NOT NULL DEFAULT TRUE,
        is_favorite INTEGER NOT NULL DEFAULT 0,
        execution_count BIGINT NOT NULL DEFAULT 0,
        last_executed TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );

    CREATE INDEX IF NOT EXISTS idx_scripts_category ON scripts(category);
    CREATE INDEX IF NOT EXISTS idx_scripts_execution_count ON scripts(execution_count DESC);

    CREATE TABLE IF NOT EXISTS news_articles (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        seq BIGSERIAL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        summary TEXT NOT NULL,
        image_url TEXT,
        source TEXT NOT NULL,
        category TEXT NOT NULL,
        published_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );

    CREATE TABLE IF NOT EXISTS system_stats (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        seq BIGSERIAL,
        cpu_usage INTEGER NOT NULL,
        gpu_usage INTEGER NOT NULL,
        ram_usage INTEGER NOT NULL,
        fps INTEGER NOT NULL,
        timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );

    CREATE TABLE IF NOT EXISTS user_sessions (
        sid TEXT PRIMARY KEY,
        sess JSONB NOT NULL,
        expire TIMESTAMP(6) NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_session_expire ON user_sessions(expire);
"#;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at, updated_at";

const SCRIPT_COLUMNS: &str = "id, name, description, category, code, author, user_id, \
     is_public, is_favorite, execution_count, last_executed, created_at";

const NEWS_COLUMNS: &str =
    "id, title, content, summary, image_url, source, category, published_at, created_at";

const STATS_COLUMNS: &str = "id, cpu_usage, gpu_usage, ram_usage, fps, timestamp";

/// PostgreSQL storage backend
///
/// Shared relational persistence. `seq` columns record insertion order.
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Connect, create the schema and seed empty tables
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let storage = Self { pool };
        storage.init_schema().await?;
        storage.seed().await?;

        Ok(storage)
    }

    /// Create with an existing connection pool
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> Result<(), StorageError> {
        // Plain &str runs over the simple protocol, which allows many statements
        self.pool.execute(SCHEMA).await.map_err(db_err)?;
        Ok(())
    }

    /// Insert the demo catalog into whichever tables are still empty
    pub async fn seed(&self) -> Result<(), StorageError> {
        let now = now();
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        if table_is_empty(&mut tx, "scripts").await? {
            for script in fixtures::scripts(now) {
                insert_script(&mut tx, &script).await?;
            }
            info!("Seeded script catalog");
        }
        if table_is_empty(&mut tx, "news_articles").await? {
            for article in fixtures::news(now) {
                insert_news(&mut tx, &article).await?;
            }
        }
        if table_is_empty(&mut tx, "system_stats").await? {
            insert_stats(&mut tx, &fixtures::initial_stats(now)).await?;
        }

        tx.commit().await.map_err(db_err)
    }

    async fn fetch_scripts(
        &self,
        sql: &str,
        bind: Option<String>,
    ) -> Result<Vec<Script>, StorageError> {
        let mut query = sqlx::query(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(db_err)?;
        rows.iter().map(script_from_row).collect()
    }

    async fn fetch_news(
        &self,
        sql: &str,
        bind: Option<String>,
    ) -> Result<Vec<NewsArticle>, StorageError> {
        let mut query = sqlx::query(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(db_err)?;
        rows.iter().map(news_from_row).collect()
    }

    async fn fetch_user(&self, column: &str, value: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE {} = $1",
            USER_COLUMNS, column
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(user_from_row).transpose()
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        self.fetch_user("id", id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        self.fetch_user("username", username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        self.fetch_user("email", email).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let password_hash = password::hash_password(user.password())?;
        let now = now();

        let row = sqlx::query(&format!(
            "INSERT INTO users ({}) VALUES ($1, $2, $3, $4, $5, $5) RETURNING {}",
            USER_COLUMNS, USER_COLUMNS
        ))
        .bind(new_id())
        .bind(user.username())
        .bind(user.email())
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let field = match unique_violation(&e) {
                Some(constraint) if constraint.contains("email") => "email",
                Some(_) => "username",
                None => return db_err(e),
            };
            let value = if field == "email" {
                user.email()
            } else {
                user.username()
            };
            StorageError::Conflict {
                field,
                value: value.to_string(),
            }
        })?;

        let created = user_from_row(&row)?;
        debug!(user_id = %created.id, "User created");
        Ok(created)
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_scripts(&self) -> Result<Vec<Script>, StorageError> {
        self.fetch_scripts(
            &format!(
                "SELECT {} FROM scripts ORDER BY execution_count DESC, seq ASC",
                SCRIPT_COLUMNS
            ),
            None,
        )
        .await
    }

    async fn list_scripts_by_category(
        &self,
        category: ScriptCategory,
    ) -> Result<Vec<Script>, StorageError> {
        self.fetch_scripts(
            &format!(
                "SELECT {} FROM scripts WHERE category = $1 ORDER BY seq",
                SCRIPT_COLUMNS
            ),
            Some(category.as_str().to_string()),
        )
        .await
    }

    async fn get_script(&self, id: &str) -> Result<Option<Script>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM scripts WHERE id = $1",
            SCRIPT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(script_from_row).transpose()
    }

    async fn create_script(&self, script: NewScript) -> Result<Script, StorageError> {
        let created = script.into_script(new_id(), now());

        let mut tx = self.pool.begin().await.map_err(db_err)?;
        insert_script(&mut tx, &created).await?;
        tx.commit().await.map_err(db_err)?;

        Ok(created)
    }

    async fn update_script(
        &self,
        id: &str,
        patch: ScriptPatch,
    ) -> Result<Option<Script>, StorageError> {
        let patch = patch.normalize();
        let (set_owner, owner) = match patch.user_id {
            Some(owner) => (true, owner),
            None => (false, None),
        };

        let row = sqlx::query(&format!(
            r#"
            UPDATE scripts SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                code = COALESCE($5, code),
                author = COALESCE($6, author),
                user_id = CASE WHEN $7 THEN $8 ELSE user_id END,
                is_public = COALESCE($9, is_public)
            WHERE id = $1
            RETURNING {}
            "#,
            SCRIPT_COLUMNS
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.category.map(|c| c.as_str()))
        .bind(patch.code)
        .bind(patch.author)
        .bind(set_owner)
        .bind(owner.clone())
        .bind(patch.is_public)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| reference_err(e, owner.as_deref()))?;

        row.as_ref().map(script_from_row).transpose()
    }

    async fn delete_script(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM scripts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn increment_execution(&self, id: &str) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE scripts SET execution_count = execution_count + 1, last_executed = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn toggle_favorite(&self, id: &str) -> Result<(), StorageError> {
        sqlx::query("UPDATE scripts SET is_favorite = 1 - is_favorite WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn search_scripts(&self, query: &str) -> Result<Vec<Script>, StorageError> {
        self.fetch_scripts(
            &format!(
                r#"
                SELECT {} FROM scripts
                WHERE lower(name) LIKE $1 ESCAPE '\'
                   OR lower(description) LIKE $1 ESCAPE '\'
                   OR lower(code) LIKE $1 ESCAPE '\'
                ORDER BY seq
                "#,
                SCRIPT_COLUMNS
            ),
            Some(like_pattern(query)),
        )
        .await
    }

    async fn list_news(&self) -> Result<Vec<NewsArticle>, StorageError> {
        self.fetch_news(
            &format!(
                "SELECT {} FROM news_articles ORDER BY published_at DESC, seq ASC",
                NEWS_COLUMNS
            ),
            None,
        )
        .await
    }

    async fn list_news_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<NewsArticle>, StorageError> {
        self.fetch_news(
            &format!(
                "SELECT {} FROM news_articles WHERE category = $1 ORDER BY seq",
                NEWS_COLUMNS
            ),
            Some(category.to_string()),
        )
        .await
    }

    async fn get_news(&self, id: &str) -> Result<Option<NewsArticle>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM news_articles WHERE id = $1",
            NEWS_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(news_from_row).transpose()
    }

    async fn create_news(&self, article: NewNewsArticle) -> Result<NewsArticle, StorageError> {
        let mut created = article.into_article(new_id(), now());
        created.published_at = created.published_at.trunc_subsecs(6);

        let mut tx = self.pool.begin().await.map_err(db_err)?;
        insert_news(&mut tx, &created).await?;
        tx.commit().await.map_err(db_err)?;

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

        let row = sqlx::query(&format!(
            r#"
            UPDATE news_articles SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                summary = COALESCE($4, summary),
                image_url = CASE WHEN $5 THEN $6 ELSE image_url END,
                source = COALESCE($7, source),
                category = COALESCE($8, category)
            WHERE id = $1
            RETURNING {}
            "#,
            NEWS_COLUMNS
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.summary)
        .bind(set_image)
        .bind(image_url)
        .bind(patch.source)
        .bind(patch.category)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(news_from_row).transpose()
    }

    async fn delete_news(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn current_stats(&self) -> Result<Option<StatsSnapshot>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM system_stats ORDER BY seq DESC LIMIT 1",
            STATS_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(stats_from_row).transpose()
    }

    async fn record_stats(&self, stats: NewStatsSnapshot) -> Result<StatsSnapshot, StorageError> {
        let snapshot = stats.into_snapshot(new_id(), now());

        let mut tx = self.pool.begin().await.map_err(db_err)?;
        insert_stats(&mut tx, &snapshot).await?;
        sqlx::query(
            "DELETE FROM system_stats WHERE seq NOT IN \
             (SELECT seq FROM system_stats ORDER BY seq DESC LIMIT $1)",
        )
        .bind(HISTORY_LIMIT as i64)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
        tx.commit().await.map_err(db_err)?;

        Ok(snapshot)
    }

    async fn stats_history(&self) -> Result<Vec<StatsSnapshot>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM system_stats ORDER BY seq ASC",
            STATS_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(stats_from_row).collect()
    }

    async fn counts(&self) -> Result<StorageStats, StorageError> {
        let row = sqlx::query(
            "SELECT (SELECT COUNT(*) FROM users) AS users, \
             (SELECT COUNT(*) FROM scripts) AS scripts, \
             (SELECT COUNT(*) FROM news_articles) AS news, \
             (SELECT COUNT(*) FROM system_stats) AS snapshots",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(StorageStats {
            users: row.get::<i64, _>("users") as usize,
            scripts: row.get::<i64, _>("scripts") as usize,
            news: row.get::<i64, _>("news") as usize,
            snapshots: row.get::<i64, _>("snapshots") as usize,
        })
    }
}

fn db_err(e: sqlx::Error) -> StorageError {
    StorageError::Database(e.to_string())
}

/// Name of the violated unique constraint, if that is what `e` is
fn unique_violation(e: &sqlx::Error) -> Option<String> {
    let db = e.as_database_error()?;
    if db.is_unique_violation() {
        Some(db.constraint().unwrap_or_default().to_string())
    } else {
        None
    }
}

fn reference_err(e: sqlx::Error, owner: Option<&str>) -> StorageError {
    match (e.as_database_error(), owner) {
        (Some(db), Some(owner)) if db.is_foreign_key_violation() => {
            StorageError::InvalidReference(owner.to_string())
        }
        _ => db_err(e),
    }
}

/// Current time at the precision the database keeps
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn usage(row: &PgRow, column: &str) -> Result<u8, StorageError> {
    let value: i32 = row.try_get(column).map_err(db_err)?;
    u8::try_from(value)
        .map_err(|_| StorageError::Serialization(format!("{} out of range: {}", column, value)))
}

async fn table_is_empty(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
) -> Result<bool, StorageError> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&mut **tx)
        .await
        .map_err(db_err)?;
    Ok(count == 0)
}

async fn insert_script(
    tx: &mut Transaction<'_, Postgres>,
    script: &Script,
) -> Result<(), StorageError> {
    sqlx::query(&format!(
        "INSERT INTO scripts ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         ON CONFLICT (id) DO NOTHING",
        SCRIPT_COLUMNS
    ))
    .bind(&script.id)
    .bind(&script.name)
    .bind(&script.description)
    .bind(script.category.as_str())
    .bind(&script.code)
    .bind(&script.author)
    .bind(&script.user_id)
    .bind(script.is_public)
    .bind(i32::from(script.is_favorite))
    .bind(script.execution_count as i64)
    .bind(script.last_executed)
    .bind(script.created_at)
    .execute(&mut **tx)
    .await
    .map_err(|e| reference_err(e, script.user_id.as_deref()))?;
    Ok(())
}

async fn insert_news(
    tx: &mut Transaction<'_, Postgres>,
    article: &NewsArticle,
) -> Result<(), StorageError> {
    sqlx::query(&format!(
        "INSERT INTO news_articles ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         ON CONFLICT (id) DO NOTHING",
        NEWS_COLUMNS
    ))
    .bind(&article.id)
    .bind(&article.title)
    .bind(&article.content)
    .bind(&article.summary)
    .bind(&article.image_url)
    .bind(&article.source)
    .bind(&article.category)
    .bind(article.published_at)
    .bind(article.created_at)
    .execute(&mut **tx)
    .await
    .map_err(db_err)?;
    Ok(())
}

async fn insert_stats(
    tx: &mut Transaction<'_, Postgres>,
    snapshot: &StatsSnapshot,
) -> Result<(), StorageError> {
    sqlx::query(&format!(
        "INSERT INTO system_stats ({}) VALUES ($1, $2, $3, $4, $5, $6) \
         ON CONFLICT (id) DO NOTHING",
        STATS_COLUMNS
    ))
    .bind(&snapshot.id)
    .bind(i32::from(snapshot.cpu_usage))
    .bind(i32::from(snapshot.gpu_usage))
    .bind(i32::from(snapshot.ram_usage))
    .bind(i32::try_from(snapshot.fps).map_err(|_| {
        StorageError::Serialization(format!("fps out of range: {}", snapshot.fps))
    })?)
    .bind(snapshot.timestamp)
    .execute(&mut **tx)
    .await
    .map_err(db_err)?;
    Ok(())
}

fn user_from_row(row: &PgRow) -> Result<User, StorageError> {
    Ok(User {
        id: row.try_get("id").map_err(db_err)?,
        username: row.try_get("username").map_err(db_err)?,
        email: row.try_get("email").map_err(db_err)?,
        password_hash: row.try_get("password_hash").map_err(db_err)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
        updated_at: row.try_get("updated_at").map_err(db_err)?,
    })
}

fn script_from_row(row: &PgRow) -> Result<Script, StorageError> {
    let category: String = row.try_get("category").map_err(db_err)?;
    let favorite: i32 = row.try_get("is_favorite").map_err(db_err)?;
    let count: i64 = row.try_get("execution_count").map_err(db_err)?;

    Ok(Script {
        id: row.try_get("id").map_err(db_err)?,
        name: row.try_get("name").map_err(db_err)?,
        description: row.try_get("description").map_err(db_err)?,
        category: category.parse::<ScriptCategory>()?,
        code: row.try_get("code").map_err(db_err)?,
        author: row.try_get("author").map_err(db_err)?,
        user_id: row.try_get("user_id").map_err(db_err)?,
        is_public: row.try_get("is_public").map_err(db_err)?,
        is_favorite: favorite != 0,
        execution_count: count.max(0) as u64,
        last_executed: row.try_get("last_executed").map_err(db_err)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
    })
}

fn news_from_row(row: &PgRow) -> Result<NewsArticle, StorageError> {
    Ok(NewsArticle {
        id: row.try_get("id").map_err(db_err)?,
        title: row.try_get("title").map_err(db_err)?,
        content: row.try_get("content").map_err(db_err)?,
        summary: row.try_get("summary").map_err(db_err)?,
        image_url: row.try_get("image_url").map_err(db_err)?,
        source: row.try_get("source").map_err(db_err)?,
        category: row.try_get("category").map_err(db_err)?,
        published_at: row.try_get("published_at").map_err(db_err)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
    })
}

fn stats_from_row(row: &PgRow) -> Result<StatsSnapshot, StorageError> {
    let fps: i32 = row.try_get("fps").map_err(db_err)?;
    Ok(StatsSnapshot {
        id: row.try_get("id").map_err(db_err)?,
        cpu_usage: usage(row, "cpu_usage")?,
        gpu_usage: usage(row, "gpu_usage")?,
        ram_usage: usage(row, "ram_usage")?,
        fps: u32::try_from(fps)
            .map_err(|_| StorageError::Serialization(format!("fps out of range: {}", fps)))?,
        timestamp: row.try_get("timestamp").map_err(db_err)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripthub_core::{RegisterUser, ScriptDraft};

    // These tests need a running PostgreSQL instance
    // Run with: TEST_DATABASE_URL=postgres://... cargo test --features postgres -- --ignored

    async fn storage() -> PostgresStorage {
        let url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/scripthub_test".into());
        PostgresStorage::new(&url).await.unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn test_postgres_script_lifecycle() {
        let storage = storage().await;
        let created = storage
            .create_script(
                ScriptDraft {
                    name: "Postgres Fisher".into(),
                    description: "d".into(),
                    category: "fishing".into(),
                    code: "c".into(),
                    ..Default::default()
                }
                .validate()
                .unwrap(),
            )
            .await
            .unwrap();

        storage.increment_execution(&created.id).await.unwrap();
        storage.toggle_favorite(&created.id).await.unwrap();
        let loaded = storage.get_script(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded.execution_count, 1);
        assert!(loaded.is_favorite);

        assert!(storage.delete_script(&created.id).await.unwrap());
        assert!(!storage.delete_script(&created.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore]
    async fn test_postgres_duplicate_user() {
        let storage = storage().await;
        let name = format!("pg{}", &new_id()[..8]);
        let register = || {
            RegisterUser::new(name.clone(), format!("{}@example.com", name), "secret1")
                .validate()
                .unwrap()
        };

        let user = storage.create_user(register()).await.unwrap();
        let err = storage.create_user(register()).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict { .. }));

        assert!(storage.delete_user(&user.id).await.unwrap());
    }
}
