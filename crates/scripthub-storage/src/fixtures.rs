//! Demo catalog loaded into a fresh store
//!
//! Ids are short decimal strings; ids generated at runtime are UUIDs, so
//! the two never collide.

mod catalog;

use chrono::{DateTime, Duration, Utc};
use scripthub_core::{NewsArticle, Script, ScriptCategory, StatsSnapshot};

pub(crate) struct ScriptFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ScriptCategory,
    pub author: &'static str,
    pub execution_count: u64,
    pub favorite: bool,
    pub last_run_mins_ago: Option<i64>,
    pub age_days: i64,
    pub code: &'static str,
}

impl ScriptFixture {
    fn to_script(&self, now: DateTime<Utc>) -> Script {
        Script {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            code: self.code.to_string(),
            author: self.author.to_string(),
            user_id: None,
            is_public: true,
            is_favorite: self.favorite,
            execution_count: self.execution_count,
            last_executed: self.last_run_mins_ago.map(|m| now - Duration::minutes(m)),
            created_at: now - Duration::days(self.age_days),
        }
    }
}

/// The sample script catalog, in insertion order
pub(crate) fn scripts(now: DateTime<Utc>) -> Vec<Script> {
    catalog::SCRIPTS.iter().map(|f| f.to_script(now)).collect()
}

pub(crate) fn news(now: DateTime<Utc>) -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: "1".into(),
            title: "Desert Treasure II - The Fallen Empire Released!".into(),
            content: "Players can now embark on the epic Desert Treasure II quest, \
                      facing four new bosses across the desert and beyond."
                .into(),
            summary: "The highly anticipated grandmaster quest is now live".into(),
            image_url: None,
            source: "Official".into(),
            category: "update".into(),
            published_at: now,
            created_at: now,
        },
        NewsArticle {
            id: "2".into(),
            title: "Christmas Event 2024 Now Live".into(),
            content: "The annual Christmas event has arrived. Visit the festive \
                      camp to help save Christmas and unlock seasonal cosmetics."
                .into(),
            summary: "Help save Christmas in Gielinor and earn exclusive holiday rewards!"
                .into(),
            image_url: None,
            source: "Wiki".into(),
            category: "event".into(),
            published_at: now - Duration::hours(5),
            created_at: now,
        },
    ]
}

pub(crate) fn initial_stats(now: DateTime<Utc>) -> StatsSnapshot {
    StatsSnapshot {
        id: "1".into(),
        cpu_usage: 42,
        gpu_usage: 58,
        ram_usage: 62,
        fps: 117,
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        let now = Utc::now();
        let scripts = scripts(now);
        assert_eq!(scripts.len(), 55);

        let ids: HashSet<_> = scripts.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), scripts.len(), "fixture ids must be unique");

        for script in &scripts {
            assert!(!script.name.is_empty());
            assert!(!script.code.is_empty());
            assert!(script.created_at < now);
            assert!(script.last_executed.map_or(true, |t| t < now));
        }
    }

    #[test]
    fn test_catalog_covers_every_category() {
        let scripts = scripts(Utc::now());
        for category in ScriptCategory::ALL {
            assert!(
                scripts.iter().any(|s| s.category == category),
                "no fixture for {}",
                category
            );
        }
    }

    #[test]
    fn test_news_ordering_inputs() {
        let now = Utc::now();
        let news = news(now);
        assert_eq!(news.len(), 2);
        assert!(news[0].published_at > news[1].published_at);
    }
}
