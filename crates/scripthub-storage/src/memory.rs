//! In-memory storage backend

use crate::{fixtures, Storage, StorageError, StorageStats};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use scripthub_core::{
    new_id, password, NewNewsArticle, NewScript, NewStatsSnapshot, NewUser, NewsArticle,
    NewsPatch, Script, ScriptCategory, ScriptPatch, StatsSnapshot, User, HISTORY_LIMIT,
};
use std::cmp::Reverse;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// A stored record plus its insertion sequence number
struct Entry<T> {
    seq: u64,
    value: T,
}

/// In-memory storage backend
///
/// Used when no database is configured. Data is lost when the process
/// exits. Lock order is users before scripts.
pub struct MemoryStorage {
    /// Single lock so the uniqueness check and the insert are atomic
    users: RwLock<HashMap<String, User>>,
    scripts: DashMap<String, Entry<Script>>,
    news: DashMap<String, Entry<NewsArticle>>,
    /// Oldest first, capped at `HISTORY_LIMIT`
    stats: Mutex<VecDeque<StatsSnapshot>>,
    next_seq: AtomicU64,
}

impl MemoryStorage {
    /// Create a store seeded with the demo catalog
    pub fn new() -> Self {
        let storage = Self::empty();
        let now = Utc::now();

        for script in fixtures::scripts(now) {
            storage.insert_script(script);
        }
        for article in fixtures::news(now) {
            storage.insert_news(article);
        }
        storage.push_stats(fixtures::initial_stats(now));

        info!(
            scripts = storage.scripts.len(),
            news = storage.news.len(),
            "Memory storage initialized"
        );
        storage
    }

    /// Create a store with no data at all
    pub fn empty() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            scripts: DashMap::new(),
            news: DashMap::new(),
            stats: Mutex::new(VecDeque::with_capacity(HISTORY_LIMIT + 1)),
            next_seq: AtomicU64::new(0),
        }
    }

    fn seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    fn insert_script(&self, script: Script) {
        let seq = self.seq();
        self.scripts
            .insert(script.id.clone(), Entry { seq, value: script });
    }

    fn insert_news(&self, article: NewsArticle) {
        let seq = self.seq();
        self.news
            .insert(article.id.clone(), Entry { seq, value: article });
    }

    fn push_stats(&self, snapshot: StatsSnapshot) {
        let mut history = self.stats.lock();
        history.push_back(snapshot);
        while history.len() > HISTORY_LIMIT {
            history.pop_front();
        }
    }

    /// Scripts matching `filter`, in insertion order
    fn scripts_where(&self, filter: impl Fn(&Script) -> bool) -> Vec<(u64, Script)> {
        let mut found: Vec<(u64, Script)> = self
            .scripts
            .iter()
            .filter(|e| filter(&e.value))
            .map(|e| (e.seq, e.value.clone()))
            .collect();
        found.sort_by_key(|(seq, _)| *seq);
        found
    }

    fn news_where(&self, filter: impl Fn(&NewsArticle) -> bool) -> Vec<(u64, NewsArticle)> {
        let mut found: Vec<(u64, NewsArticle)> = self
            .news
            .iter()
            .filter(|e| filter(&e.value))
            .map(|e| (e.seq, e.value.clone()))
            .collect();
        found.sort_by_key(|(seq, _)| *seq);
        found
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        // Hash outside the lock; it is deliberately slow
        let password_hash = password::hash_password(user.password())?;

        let mut users = self.users.write();
        if users.values().any(|u| u.username == user.username()) {
            return Err(StorageError::Conflict {
                field: "username",
                value: user.username().to_string(),
            });
        }
        if users.values().any(|u| u.email == user.email()) {
            return Err(StorageError::Conflict {
                field: "email",
                value: user.email().to_string(),
            });
        }

        let now = Utc::now();
        let created = User {
            id: new_id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id.clone(), created.clone());

        debug!(user_id = %created.id, "User created");
        Ok(created)
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StorageError> {
        let mut users = self.users.write();
        if users.remove(id).is_none() {
            return Ok(false);
        }

        for mut entry in self.scripts.iter_mut() {
            if entry.value.user_id.as_deref() == Some(id) {
                entry.value.user_id = None;
            }
        }
        Ok(true)
    }

    async fn list_scripts(&self) -> Result<Vec<Script>, StorageError> {
        let mut scripts = self.scripts_where(|_| true);
        // Stable sort keeps insertion order among equal counts
        scripts.sort_by_key(|(_, s)| Reverse(s.execution_count));
        Ok(scripts.into_iter().map(|(_, s)| s).collect())
    }

    async fn list_scripts_by_category(
        &self,
        category: ScriptCategory,
    ) -> Result<Vec<Script>, StorageError> {
        Ok(self
            .scripts_where(|s| s.category == category)
            .into_iter()
            .map(|(_, s)| s)
            .collect())
    }

    async fn get_script(&self, id: &str) -> Result<Option<Script>, StorageError> {
        Ok(self.scripts.get(id).map(|e| e.value.clone()))
    }

    async fn create_script(&self, script: NewScript) -> Result<Script, StorageError> {
        // Hold the user map so the owner cannot vanish before the insert
        let users = self.users.read();
        if let Some(owner) = script.user_id() {
            if !users.contains_key(owner) {
                return Err(StorageError::InvalidReference(owner.to_string()));
            }
        }

        let created = script.into_script(new_id(), Utc::now());
        self.insert_script(created.clone());
        Ok(created)
    }

    async fn update_script(
        &self,
        id: &str,
        patch: ScriptPatch,
    ) -> Result<Option<Script>, StorageError> {
        let patch = patch.normalize();
        let users = self.users.read();
        if let Some(Some(owner)) = &patch.user_id {
            if !users.contains_key(owner) {
                return Err(StorageError::InvalidReference(owner.clone()));
            }
        }

        Ok(self.scripts.get_mut(id).map(|mut entry| {
            patch.apply(&mut entry.value);
            entry.value.clone()
        }))
    }

    async fn delete_script(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.scripts.remove(id).is_some())
    }

    async fn increment_execution(&self, id: &str) -> Result<(), StorageError> {
        if let Some(mut entry) = self.scripts.get_mut(id) {
            entry.value.execution_count += 1;
            entry.value.last_executed = Some(Utc::now());
        }
        Ok(())
    }

    async fn toggle_favorite(&self, id: &str) -> Result<(), StorageError> {
        if let Some(mut entry) = self.scripts.get_mut(id) {
            entry.value.is_favorite = !entry.value.is_favorite;
        }
        Ok(())
    }

    async fn search_scripts(&self, query: &str) -> Result<Vec<Script>, StorageError> {
        let needle = query.to_lowercase();
        Ok(self
            .scripts_where(|s| s.matches(&needle))
            .into_iter()
            .map(|(_, s)| s)
            .collect())
    }

    async fn list_news(&self) -> Result<Vec<NewsArticle>, StorageError> {
        let mut news = self.news_where(|_| true);
        news.sort_by_key(|(_, a)| Reverse(a.published_at));
        Ok(news.into_iter().map(|(_, a)| a).collect())
    }

    async fn list_news_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<NewsArticle>, StorageError> {
        Ok(self
            .news_where(|a| a.category == category)
            .into_iter()
            .map(|(_, a)| a)
            .collect())
    }

    async fn get_news(&self, id: &str) -> Result<Option<NewsArticle>, StorageError> {
        Ok(self.news.get(id).map(|e| e.value.clone()))
    }

    async fn create_news(&self, article: NewNewsArticle) -> Result<NewsArticle, StorageError> {
        let created = article.into_article(new_id(), Utc::now());
        self.insert_news(created.clone());
        Ok(created)
    }

    async fn update_news(
        &self,
        id: &str,
        patch: NewsPatch,
    ) -> Result<Option<NewsArticle>, StorageError> {
        let patch = patch.normalize();
        Ok(self.news.get_mut(id).map(|mut entry| {
            patch.apply(&mut entry.value);
            entry.value.clone()
        }))
    }

    async fn delete_news(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.news.remove(id).is_some())
    }

    async fn current_stats(&self) -> Result<Option<StatsSnapshot>, StorageError> {
        Ok(self.stats.lock().back().cloned())
    }

    async fn record_stats(&self, stats: NewStatsSnapshot) -> Result<StatsSnapshot, StorageError> {
        let snapshot = stats.into_snapshot(new_id(), Utc::now());
        self.push_stats(snapshot.clone());
        Ok(snapshot)
    }

    async fn stats_history(&self) -> Result<Vec<StatsSnapshot>, StorageError> {
        Ok(self.stats.lock().iter().cloned().collect())
    }

    async fn counts(&self) -> Result<StorageStats, StorageError> {
        Ok(StorageStats {
            users: self.users.read().len(),
            scripts: self.scripts.len(),
            news: self.news.len(),
            snapshots: self.stats.lock().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripthub_core::{NewsDraft, RegisterUser, ScriptDraft, StatsDraft};

    fn script(name: &str, category: &str) -> NewScript {
        ScriptDraft {
            name: name.into(),
            description: format!("{} description", name),
            category: category.into(),
            code: "F1::Send, {Space}".into(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    fn reading(cpu: i64) -> NewStatsSnapshot {
        StatsDraft {
            cpu_usage: cpu,
            gpu_usage: 10,
            ram_usage: 20,
            fps: 60,
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_seeded_once() {
        let storage = MemoryStorage::new();
        let counts = storage.counts().await.unwrap();
        assert_eq!(counts.scripts, 55);
        assert_eq!(counts.news, 2);
        assert_eq!(counts.snapshots, 1);
        assert_eq!(counts.users, 0);

        let current = storage.current_stats().await.unwrap().unwrap();
        assert_eq!(current.cpu_usage, 42);
        assert_eq!(current.fps, 117);

        let empty = MemoryStorage::empty();
        assert_eq!(empty.counts().await.unwrap(), StorageStats::default());
        assert!(empty.current_stats().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeded_list_is_sorted() {
        let storage = MemoryStorage::new();
        let scripts = storage.list_scripts().await.unwrap();
        assert!(scripts
            .windows(2)
            .all(|w| w[0].execution_count >= w[1].execution_count));
        assert_eq!(scripts[0].name, "High Alchemy Pro");
    }

    #[tokio::test]
    async fn test_ties_keep_insertion_order() {
        let storage = MemoryStorage::empty();
        let first = storage.create_script(script("First", "utility")).await.unwrap();
        let second = storage.create_script(script("Second", "utility")).await.unwrap();
        let third = storage.create_script(script("Third", "utility")).await.unwrap();

        let ids: Vec<String> = storage
            .list_scripts()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id.clone(), third.id.clone()]);

        storage.increment_execution(&third.id).await.unwrap();
        let top = storage.list_scripts().await.unwrap();
        assert_eq!(top[0].id, third.id);
    }

    #[tokio::test]
    async fn test_created_ids_are_fresh() {
        let storage = MemoryStorage::new();
        let created = storage.create_script(script("Mine", "mining")).await.unwrap();
        assert!(created.id.parse::<u32>().is_err());
        assert_eq!(storage.counts().await.unwrap().scripts, 56);
    }

    #[tokio::test]
    async fn test_unknown_owner_rejected() {
        let storage = MemoryStorage::empty();
        let draft = ScriptDraft {
            name: "Owned".into(),
            description: "d".into(),
            category: "magic".into(),
            code: "c".into(),
            user_id: Some("ghost".into()),
            ..Default::default()
        };

        let err = storage
            .create_script(draft.validate().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidReference(ref id) if id == "ghost"));
        assert_eq!(storage.counts().await.unwrap().scripts, 0);
    }

    #[tokio::test]
    async fn test_delete_user_orphans_scripts() {
        let storage = MemoryStorage::empty();
        let user = storage
            .create_user(
                RegisterUser::new("owner", "owner@example.com", "secret1")
                    .validate()
                    .unwrap(),
            )
            .await
            .unwrap();

        let draft = ScriptDraft {
            name: "Owned".into(),
            description: "d".into(),
            category: "magic".into(),
            code: "c".into(),
            user_id: Some(user.id.clone()),
            ..Default::default()
        };
        let owned = storage
            .create_script(draft.validate().unwrap())
            .await
            .unwrap();
        assert_eq!(owned.user_id.as_deref(), Some(user.id.as_str()));

        assert!(storage.delete_user(&user.id).await.unwrap());
        assert!(!storage.delete_user(&user.id).await.unwrap());

        let orphan = storage.get_script(&owned.id).await.unwrap().unwrap();
        assert_eq!(orphan.user_id, None);
    }

    #[tokio::test]
    async fn test_news_sorted_by_publication() {
        let storage = MemoryStorage::new();
        let older = NewsDraft {
            title: "Old patch notes".into(),
            content: "c".into(),
            summary: "s".into(),
            source: "Wiki".into(),
            category: "patch".into(),
            published_at: Some(Utc::now() - chrono::Duration::days(30)),
            ..Default::default()
        };
        storage
            .create_news(older.validate().unwrap())
            .await
            .unwrap();

        let news = storage.list_news().await.unwrap();
        assert_eq!(news.len(), 3);
        assert_eq!(news[0].id, "1");
        assert_eq!(news[2].title, "Old patch notes");

        let patches = storage.list_news_by_category("patch").await.unwrap();
        assert_eq!(patches.len(), 1);
    }

    #[tokio::test]
    async fn test_history_is_fifo() {
        let storage = MemoryStorage::empty();
        for cpu in 0..=100 {
            storage.record_stats(reading(cpu)).await.unwrap();
        }
        storage.record_stats(reading(7)).await.unwrap();

        let history = storage.stats_history().await.unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT);
        // 0 and 1 were evicted
        assert_eq!(history[0].cpu_usage, 2);
        assert_eq!(history.last().unwrap().cpu_usage, 7);
        assert_eq!(
            storage.current_stats().await.unwrap().unwrap().id,
            history.last().unwrap().id
        );
    }

    #[tokio::test]
    async fn test_concurrent_increments() {
        let storage = std::sync::Arc::new(MemoryStorage::empty());
        let created = storage.create_script(script("Busy", "combat")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let storage = storage.clone();
            let id = created.id.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..25 {
                    storage.increment_execution(&id).await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let script = storage.get_script(&created.id).await.unwrap().unwrap();
        assert_eq!(script.execution_count, 200);
    }
}
