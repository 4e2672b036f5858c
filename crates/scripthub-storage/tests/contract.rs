//! Behavior every storage backend must share

use chrono::{Duration, SubsecRound, Utc};
use scripthub_core::{
    NewScript, NewsDraft, NewsPatch, RegisterUser, ScriptDraft, ScriptPatch, StatsDraft,
    HISTORY_LIMIT,
};
use scripthub_storage::{MemoryStorage, Storage, StorageError};

fn script(name: &str, category: &str, description: &str) -> NewScript {
    ScriptDraft {
        name: name.into(),
        description: description.into(),
        category: category.into(),
        code: format!("; {}\nF1::Send, {{Space}}", name),
        ..Default::default()
    }
    .validate()
    .unwrap()
}

fn register(username: &str, email: &str) -> scripthub_core::NewUser {
    RegisterUser::new(username, email, "correct horse")
        .validate()
        .unwrap()
}

async fn unique_accounts(storage: &dyn Storage) {
    let user = storage
        .create_user(register("zezima", "zezima@example.com"))
        .await
        .unwrap();
    assert_eq!(user.username, "zezima");
    assert_ne!(user.password_hash, "correct horse");

    let err = storage
        .create_user(register("zezima", "other@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict { field: "username", .. }));

    let err = storage
        .create_user(register("other", "zezima@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict { field: "email", .. }));

    assert_eq!(storage.counts().await.unwrap().users, 1);
    assert!(storage.get_user_by_username("other").await.unwrap().is_none());

    let by_email = storage
        .get_user_by_email("zezima@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
    assert_eq!(storage.get_user(&user.id).await.unwrap().unwrap(), user);
}

async fn password_roundtrip(storage: &dyn Storage) {
    let user = storage
        .create_user(register("lynx", "lynx@example.com"))
        .await
        .unwrap();

    assert!(storage.verify_password(&user, "correct horse").await);
    assert!(!storage.verify_password(&user, "Correct horse").await);
    assert!(!storage.verify_password(&user, "").await);
}

async fn most_executed_first(storage: &dyn Storage) {
    let fishing = storage
        .create_script(script("Elite Fishing Bot Pro", "fishing", "Fishes"))
        .await
        .unwrap();
    let combat = storage
        .create_script(script("Combat Trainer", "combat", "Trains"))
        .await
        .unwrap();

    for _ in 0..5 {
        storage.increment_execution(&combat.id).await.unwrap();
    }
    let names: Vec<String> = storage
        .list_scripts()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Combat Trainer", "Elite Fishing Bot Pro"]);

    for _ in 0..6 {
        storage.increment_execution(&fishing.id).await.unwrap();
    }
    let listed = storage.list_scripts().await.unwrap();
    assert_eq!(listed[0].id, fishing.id);
    assert_eq!(listed[0].execution_count, 6);
    assert_eq!(listed[1].execution_count, 5);
    assert!(listed[0].last_executed.is_some());
}

async fn favorite_toggles(storage: &dyn Storage) {
    let created = storage
        .create_script(script("Banker", "banking", "Banks"))
        .await
        .unwrap();
    assert!(!created.is_favorite);

    storage.toggle_favorite(&created.id).await.unwrap();
    assert!(storage.get_script(&created.id).await.unwrap().unwrap().is_favorite);

    storage.toggle_favorite(&created.id).await.unwrap();
    assert!(!storage.get_script(&created.id).await.unwrap().unwrap().is_favorite);
}

async fn delete_once(storage: &dyn Storage) {
    let created = storage
        .create_script(script("Dropper", "utility", "Drops"))
        .await
        .unwrap();

    assert!(storage.delete_script(&created.id).await.unwrap());
    assert!(!storage.delete_script(&created.id).await.unwrap());
    assert!(storage.get_script(&created.id).await.unwrap().is_none());
}

async fn missing_ids_are_noops(storage: &dyn Storage) {
    storage.increment_execution("missing").await.unwrap();
    storage.toggle_favorite("missing").await.unwrap();

    assert!(storage.get_script("missing").await.unwrap().is_none());
    assert!(storage.get_news("missing").await.unwrap().is_none());
    assert!(storage.get_user("missing").await.unwrap().is_none());
    assert!(!storage.delete_news("missing").await.unwrap());
    assert!(!storage.delete_user("missing").await.unwrap());

    let patch = ScriptPatch {
        name: Some("Renamed".into()),
        ..Default::default()
    };
    assert!(storage.update_script("missing", patch).await.unwrap().is_none());
    assert_eq!(storage.counts().await.unwrap().scripts, 0);
}

async fn search_ignores_case(storage: &dyn Storage) {
    storage
        .create_script(script("Elite Fishing Bot Pro", "fishing", "Catches lobsters"))
        .await
        .unwrap();
    storage
        .create_script(script("Lobster Helper", "cooking", "Cooks FISH quickly"))
        .await
        .unwrap();
    storage
        .create_script(script("Oak Cutter", "woodcutting", "Chops oaks"))
        .await
        .unwrap();

    for query in ["fish", "FISH", "Fish"] {
        let names: Vec<String> = storage
            .search_scripts(query)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Elite Fishing Bot Pro", "Lobster Helper"], "{}", query);
    }

    assert!(storage.search_scripts("dragon").await.unwrap().is_empty());
    assert_eq!(storage.search_scripts("").await.unwrap().len(), 3);

    let woodcutting = storage
        .list_scripts_by_category("woodcutting".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(woodcutting.len(), 1);
    assert_eq!(woodcutting[0].name, "Oak Cutter");
}

async fn search_folds_unicode_case(storage: &dyn Storage) {
    storage
        .create_script(script("ÉLITE Fishing", "fishing", "Fishes"))
        .await
        .unwrap();
    storage
        .create_script(script("Oak Cutter", "woodcutting", "Chops ÖAKS"))
        .await
        .unwrap();

    for (query, expected) in [("élite", "ÉLITE Fishing"), ("öaks", "Oak Cutter")] {
        let found = storage.search_scripts(query).await.unwrap();
        assert_eq!(found.len(), 1, "{}", query);
        assert_eq!(found[0].name, expected);
    }
}

async fn last_executed_tracks_latest_call(storage: &dyn Storage) {
    let created = storage
        .create_script(script("Runecrafter", "runecrafting", "Crafts runes"))
        .await
        .unwrap();

    // Backends may store milliseconds only
    let before = Utc::now().trunc_subsecs(3);
    storage.increment_execution(&created.id).await.unwrap();
    let first = storage
        .get_script(&created.id)
        .await
        .unwrap()
        .unwrap()
        .last_executed
        .unwrap();
    assert!(first >= before);
    assert!(first <= Utc::now());

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let before = Utc::now().trunc_subsecs(3);
    storage.increment_execution(&created.id).await.unwrap();
    let second = storage.get_script(&created.id).await.unwrap().unwrap();
    let latest = second.last_executed.unwrap();
    assert!(latest >= before);
    assert!(latest > first);
    assert_eq!(second.execution_count, 2);
}

async fn patches_are_normalized(storage: &dyn Storage) {
    let created = storage
        .create_script(script("Miner", "mining", "Mines"))
        .await
        .unwrap();
    let renamed = storage
        .update_script(
            &created.id,
            ScriptPatch {
                name: Some("  Iron Miner  ".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "Iron Miner");

    let draft = NewsDraft {
        title: "Wilderness event".into(),
        content: "c".into(),
        summary: "s".into(),
        source: "Official".into(),
        category: "event".into(),
        ..Default::default()
    };
    let article = storage
        .create_news(draft.validate().unwrap())
        .await
        .unwrap();
    storage
        .update_news(
            &article.id,
            NewsPatch {
                category: Some("Update".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    let updates = storage.list_news_by_category("update").await.unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].id, article.id);
    assert!(storage
        .list_news_by_category("event")
        .await
        .unwrap()
        .is_empty());
}

async fn update_keeps_absent_fields(storage: &dyn Storage) {
    let created = storage
        .create_script(script("Alcher", "magic", "Casts high alchemy"))
        .await
        .unwrap();
    storage.increment_execution(&created.id).await.unwrap();

    let patch = ScriptPatch {
        description: Some("Casts high alchemy on noted items".into()),
        ..Default::default()
    };
    let updated = storage
        .update_script(&created.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Alcher");
    assert_eq!(updated.description, "Casts high alchemy on noted items");
    assert_eq!(updated.code, created.code);
    assert_eq!(updated.execution_count, 1);
    assert_eq!(updated.created_at, created.created_at);
}

async fn deleting_owner_orphans_scripts(storage: &dyn Storage) {
    let user = storage
        .create_user(register("owner", "owner@example.com"))
        .await
        .unwrap();
    let draft = ScriptDraft {
        name: "Owned".into(),
        description: "d".into(),
        category: "agility".into(),
        code: "c".into(),
        user_id: Some(user.id.clone()),
        ..Default::default()
    };
    let owned = storage
        .create_script(draft.validate().unwrap())
        .await
        .unwrap();

    assert!(storage.delete_user(&user.id).await.unwrap());

    let orphan = storage.get_script(&owned.id).await.unwrap().unwrap();
    assert_eq!(orphan.user_id, None);
    assert_eq!(orphan.name, "Owned");

    let dangling = ScriptDraft {
        name: "Dangling".into(),
        description: "d".into(),
        category: "agility".into(),
        code: "c".into(),
        user_id: Some(user.id.clone()),
        ..Default::default()
    };
    let err = storage
        .create_script(dangling.validate().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidReference(_)));
}

async fn news_newest_first(storage: &dyn Storage) {
    let now = Utc::now();
    for (title, category, days_ago) in [
        ("Old event", "event", 10),
        ("Fresh update", "update", 0),
        ("Last week", "update", 7),
    ] {
        let draft = NewsDraft {
            title: title.into(),
            content: "c".into(),
            summary: "s".into(),
            source: "Official".into(),
            category: category.into(),
            published_at: Some(now - Duration::days(days_ago)),
            ..Default::default()
        };
        storage
            .create_news(draft.validate().unwrap())
            .await
            .unwrap();
    }

    let titles: Vec<String> = storage
        .list_news()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["Fresh update", "Last week", "Old event"]);

    let updates = storage.list_news_by_category("update").await.unwrap();
    assert_eq!(updates.len(), 2);

    let patched = storage
        .update_news(
            &updates[0].id,
            NewsPatch {
                image_url: Some(Some("https://example.com/banner.png".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        patched.image_url.as_deref(),
        Some("https://example.com/banner.png")
    );
    assert_eq!(patched.published_at, updates[0].published_at);
}

async fn history_is_bounded(storage: &dyn Storage) {
    assert!(storage.current_stats().await.unwrap().is_none());

    let total = HISTORY_LIMIT + 5;
    for i in 0..total {
        let reading = StatsDraft {
            cpu_usage: (i % 100) as i64,
            gpu_usage: 50,
            ram_usage: 50,
            fps: i as i64,
        };
        storage
            .record_stats(reading.validate().unwrap())
            .await
            .unwrap();
    }

    let history = storage.stats_history().await.unwrap();
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].fps, 5);
    assert_eq!(history[HISTORY_LIMIT - 1].fps as usize, total - 1);

    let current = storage.current_stats().await.unwrap().unwrap();
    assert_eq!(current.id, history[HISTORY_LIMIT - 1].id);
}

macro_rules! contract {
    ($backend:ident, $make:expr) => {
        mod $backend {
            use super::*;

            #[tokio::test]
            async fn unique_accounts() {
                super::unique_accounts(&$make).await;
            }

            #[tokio::test]
            async fn password_roundtrip() {
                super::password_roundtrip(&$make).await;
            }

            #[tokio::test]
            async fn most_executed_first() {
                super::most_executed_first(&$make).await;
            }

            #[tokio::test]
            async fn favorite_toggles() {
                super::favorite_toggles(&$make).await;
            }

            #[tokio::test]
            async fn delete_once() {
                super::delete_once(&$make).await;
            }

            #[tokio::test]
            async fn missing_ids_are_noops() {
                super::missing_ids_are_noops(&$make).await;
            }

            #[tokio::test]
            async fn search_ignores_case() {
                super::search_ignores_case(&$make).await;
            }

            #[tokio::test]
            async fn search_folds_unicode_case() {
                super::search_folds_unicode_case(&$make).await;
            }

            #[tokio::test]
            async fn last_executed_tracks_latest_call() {
                super::last_executed_tracks_latest_call(&$make).await;
            }

            #[tokio::test]
            async fn patches_are_normalized() {
                super::patches_are_normalized(&$make).await;
            }

            #[tokio::test]
            async fn update_keeps_absent_fields() {
                super::update_keeps_absent_fields(&$make).await;
            }

            #[tokio::test]
            async fn deleting_owner_orphans_scripts() {
                super::deleting_owner_orphans_scripts(&$make).await;
            }

            #[tokio::test]
            async fn news_newest_first() {
                super::news_newest_first(&$make).await;
            }

            #[tokio::test]
            async fn history_is_bounded() {
                super::history_is_bounded(&$make).await;
            }
        }
    };
}

contract!(memory, MemoryStorage::empty());

#[cfg(feature = "sqlite")]
contract!(
    sqlite,
    scripthub_storage::SqliteStorage::empty_in_memory().unwrap()
);
