//! Automation scripts

use crate::category::ScriptCategory;
use crate::error::ValidationError;
use crate::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded when a draft names none
pub const DEFAULT_AUTHOR: &str = "User";

const NAME_MAX: usize = 100;
const AUTHOR_MAX: usize = 50;

/// A stored script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ScriptCategory,
    pub code: String,
    pub author: String,
    /// Owning account; seed scripts have none
    pub user_id: Option<String>,
    pub is_public: bool,
    /// Persisted and serialized as 0/1
    #[serde(with = "flag")]
    pub is_favorite: bool,
    pub execution_count: u64,
    pub last_executed: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Script {
    /// Case-insensitive substring match over name, description and code.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.code.to_lowercase().contains(needle)
    }
}

/// Script payload as submitted by an upload or generator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub code: String,
    pub author: Option<String>,
    pub user_id: Option<String>,
    pub is_public: Option<bool>,
}

impl ScriptDraft {
    /// Check every field, returning all violations at once
    pub fn validate(self) -> Result<NewScript, ValidationError> {
        let mut errors = ValidationError::new();

        let name = self.name.trim().to_string();
        validate::required(&mut errors, "name", &name);
        validate::max_len(&mut errors, "name", &name, NAME_MAX);
        validate::required(&mut errors, "description", &self.description);
        validate::required(&mut errors, "code", &self.code);

        let category = match self.category.parse::<ScriptCategory>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.add("category", format!("unknown category '{}'", self.category));
                None
            }
        };

        let author = match self.author.map(|a| a.trim().to_string()) {
            Some(a) if !a.is_empty() => a,
            _ => DEFAULT_AUTHOR.to_string(),
        };
        validate::max_len(&mut errors, "author", &author, AUTHOR_MAX);

        if let Some(user_id) = &self.user_id {
            validate::required(&mut errors, "userId", user_id);
        }

        errors.finish()?;

        Ok(NewScript {
            name,
            description: self.description,
            // Present whenever `errors` was empty
            category: category.unwrap_or(ScriptCategory::Utility),
            code: self.code,
            author,
            user_id: self.user_id,
            is_public: self.is_public.unwrap_or(true),
        })
    }
}

/// A validated script, ready for a storage backend.
///
/// Only obtainable through [`ScriptDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScript {
    name: String,
    description: String,
    category: ScriptCategory,
    code: String,
    author: String,
    user_id: Option<String>,
    is_public: bool,
}

impl NewScript {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ScriptCategory {
        self.category
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Materialize a never-run, non-favorite script
    pub fn into_script(self, id: String, created_at: DateTime<Utc>) -> Script {
        Script {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            code: self.code,
            author: self.author,
            user_id: self.user_id,
            is_public: self.is_public,
            is_favorite: false,
            execution_count: 0,
            last_executed: None,
            created_at,
        }
    }
}

/// Partial update of a script.
///
/// The execution counter and favorite flag are not patchable; they only
/// change through their dedicated storage operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ScriptCategory>,
    pub code: Option<String>,
    pub author: Option<String>,
    /// `Some(None)` clears the owner
    #[serde(default, deserialize_with = "crate::double_option")]
    pub user_id: Option<Option<String>>,
    pub is_public: Option<bool>,
}

impl ScriptPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Trim names the same way [`ScriptDraft::validate`] does
    pub fn normalize(mut self) -> Self {
        self.name = self.name.map(|name| name.trim().to_string());
        self.author = self.author.map(|author| author.trim().to_string());
        self
    }

    /// Check the fields that are present, returning the normalized patch
    pub fn validate(self) -> Result<Self, ValidationError> {
        let patch = self.normalize();
        let mut errors = ValidationError::new();

        if let Some(name) = &patch.name {
            validate::required(&mut errors, "name", name);
            validate::max_len(&mut errors, "name", name, NAME_MAX);
        }
        if let Some(description) = &patch.description {
            validate::required(&mut errors, "description", description);
        }
        if let Some(code) = &patch.code {
            validate::required(&mut errors, "code", code);
        }
        if let Some(author) = &patch.author {
            validate::required(&mut errors, "author", author);
            validate::max_len(&mut errors, "author", author, AUTHOR_MAX);
        }
        if let Some(Some(user_id)) = &patch.user_id {
            validate::required(&mut errors, "userId", user_id);
        }

        errors.finish()?;
        Ok(patch)
    }

    /// Apply present fields, leaving the rest untouched
    pub fn apply(self, script: &mut Script) {
        if let Some(name) = self.name {
            script.name = name;
        }
        if let Some(description) = self.description {
            script.description = description;
        }
        if let Some(category) = self.category {
            script.category = category;
        }
        if let Some(code) = self.code {
            script.code = code;
        }
        if let Some(author) = self.author {
            script.author = author;
        }
        if let Some(user_id) = self.user_id {
            script.user_id = user_id;
        }
        if let Some(is_public) = self.is_public {
            script.is_public = is_public;
        }
    }
}

/// Serialize a boolean as 0/1, accepting either form when deserializing
mod flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            Int(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bool(b) => Ok(b),
            Repr::Int(0) => Ok(false),
            Repr::Int(1) => Ok(true),
            Repr::Int(n) => Err(D::Error::custom(format!("invalid flag value {}", n))),
        }
    }
}
