//! News articles

use crate::error::ValidationError;
use crate::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const TITLE_MAX: usize = 200;

/// A stored news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub image_url: Option<String>,
    /// Where the article came from: wiki, update page, community
    pub source: String,
    /// Free-form tag: update, event, leak, patch
    pub category: String,
    /// Fixed at creation
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Article payload as submitted by the seed or admin process
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub image_url: Option<String>,
    pub source: String,
    pub category: String,
    /// Defaults to the time of validation
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsDraft {
    pub fn validate(self) -> Result<NewNewsArticle, ValidationError> {
        let mut errors = ValidationError::new();

        let title = self.title.trim().to_string();
        validate::required(&mut errors, "title", &title);
        validate::max_len(&mut errors, "title", &title, TITLE_MAX);
        validate::required(&mut errors, "content", &self.content);
        validate::required(&mut errors, "summary", &self.summary);
        validate::required(&mut errors, "source", &self.source);
        validate::required(&mut errors, "category", &self.category);
        errors.finish()?;

        Ok(NewNewsArticle {
            title,
            content: self.content,
            summary: self.summary,
            image_url: self.image_url.filter(|url| !url.trim().is_empty()),
            source: self.source.trim().to_string(),
            category: self.category.trim().to_lowercase(),
            published_at: self.published_at.unwrap_or_else(Utc::now),
        })
    }
}

/// A validated article, ready for a storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNewsArticle {
    title: String,
    content: String,
    summary: String,
    image_url: Option<String>,
    source: String,
    category: String,
    published_at: DateTime<Utc>,
}

impl NewNewsArticle {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn into_article(self, id: String, created_at: DateTime<Utc>) -> NewsArticle {
        NewsArticle {
            id,
            title: self.title,
            content: self.content,
            summary: self.summary,
            image_url: self.image_url,
            source: self.source,
            category: self.category,
            published_at: self.published_at,
            created_at,
        }
    }
}

/// Partial update of an article. `published_at` cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub image_url: Option<Option<String>>,
    pub source: Option<String>,
    pub category: Option<String>,
}

impl NewsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Normalize fields the same way [`NewsDraft::validate`] does
    pub fn normalize(mut self) -> Self {
        self.title = self.title.map(|title| title.trim().to_string());
        self.source = self.source.map(|source| source.trim().to_string());
        self.category = self
            .category
            .map(|category| category.trim().to_lowercase());
        if let Some(Some(url)) = &self.image_url {
            if url.trim().is_empty() {
                self.image_url = Some(None);
            }
        }
        self
    }

    /// Check the fields that are present, returning the normalized patch
    pub fn validate(self) -> Result<Self, ValidationError> {
        let patch = self.normalize();
        let mut errors = ValidationError::new();

        if let Some(title) = &patch.title {
            validate::required(&mut errors, "title", title);
            validate::max_len(&mut errors, "title", title, TITLE_MAX);
        }
        for (field, value) in [
            ("content", &patch.content),
            ("summary", &patch.summary),
            ("source", &patch.source),
            ("category", &patch.category),
        ] {
            if let Some(value) = value {
                validate::required(&mut errors, field, value);
            }
        }

        errors.finish()?;
        Ok(patch)
    }

    pub fn apply(self, article: &mut NewsArticle) {
        if let Some(title) = self.title {
            article.title = title;
        }
        if let Some(content) = self.content {
            article.content = content;
        }
        if let Some(summary) = self.summary {
            article.summary = summary;
        }
        if let Some(image_url) = self.image_url {
            article.image_url = image_url;
        }
        if let Some(source) = self.source {
            article.source = source;
        }
        if let Some(category) = self.category {
            article.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validate() {
        let article = NewsDraft {
            title: "Desert Treasure II Released".into(),
            content: "Players can now embark on the quest".into(),
            summary: "Grandmaster quest is live".into(),
            image_url: Some("  ".into()),
            source: "Official".into(),
            category: "Update".into(),
            published_at: None,
        }
        .validate()
        .unwrap();

        assert_eq!(article.category(), "update");
        assert_eq!(article.image_url(), None);
        assert!(article.published_at() <= Utc::now());
    }

    #[test]
    fn test_draft_reports_every_field() {
        let err = NewsDraft::default().validate().unwrap_err();
        for field in ["title", "content", "summary", "source", "category"] {
            assert!(err.has(field), "missing violation for {}", field);
        }
    }

    #[test]
    fn test_patch_keeps_published_at() {
        let published = Utc::now() - chrono::Duration::days(3);
        let mut article = NewsDraft {
            title: "t".into(),
            content: "c".into(),
            summary: "s".into(),
            source: "Wiki".into(),
            category: "event".into(),
            published_at: Some(published),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .into_article("n1".into(), Utc::now());

        NewsPatch {
            title: Some("New title".into()),
            image_url: Some(Some("https://example.com/a.png".into())),
            ..Default::default()
        }
        .apply(&mut article);

        assert_eq!(article.title, "New title");
        assert_eq!(article.image_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(article.published_at, published);
    }

    #[test]
    fn test_patch_normalizes_like_draft() {
        let patch = NewsPatch {
            title: Some(" Leagues V ".into()),
            category: Some(" Update ".into()),
            image_url: Some(Some("  ".into())),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("Leagues V"));
        assert_eq!(patch.category.as_deref(), Some("update"));
        assert_eq!(patch.image_url, Some(None));

        let err = NewsPatch {
            category: Some("   ".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.has("category"));
    }
}
