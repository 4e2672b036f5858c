//! User accounts

use crate::error::ValidationError;
use crate::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The password hash stays inside the process: it is skipped when
/// serializing and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Registration payload as submitted
#[derive(Clone, Default, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check every field, returning all violations at once
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_string();

        let mut errors = ValidationError::new();
        validate::username(&mut errors, &username);
        validate::email(&mut errors, &email);
        validate::password(&mut errors, &self.password);
        errors.finish()?;

        Ok(NewUser {
            username,
            email,
            password: self.password,
        })
    }
}

impl std::fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// A validated registration, ready for a storage backend.
///
/// Only obtainable through [`RegisterUser::validate`]. Carries the plaintext
/// password until the backend hashes it.
#[derive(Clone)]
pub struct NewUser {
    username: String,
    email: String,
    password: String,
}

impl NewUser {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration() {
        let user = RegisterUser::new(" gielinor_gamer ", "gamer@example.com", "secret1")
            .validate()
            .unwrap();
        assert_eq!(user.username(), "gielinor_gamer");
        assert_eq!(user.email(), "gamer@example.com");
        assert_eq!(user.password(), "secret1");
    }

    #[test]
    fn test_reports_every_field() {
        let err = RegisterUser::new("a!", "not-an-email", "123")
            .validate()
            .unwrap_err();
        assert!(err.has("username"));
        assert!(err.has("email"));
        assert!(err.has("password"));
    }

    #[test]
    fn test_password_minimum() {
        let err = RegisterUser::new("player_one", "p1@example.com", "12345")
            .validate()
            .unwrap_err();
        assert!(err.has("password"));
        assert!(!err.has("username"));

        assert!(RegisterUser::new("player_one", "p1@example.com", "123456")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_hash_not_serialized_or_debugged() {
        let now = Utc::now();
        let user = User {
            id: "u1".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("passwordHash"));
        assert!(!format!("{:?}", user).contains("argon2id"));
    }

    #[test]
    fn test_plaintext_not_debugged() {
        let draft = RegisterUser::new("alice", "alice@example.com", "topsecret");
        assert!(!format!("{:?}", draft).contains("topsecret"));
        let user = draft.validate().unwrap();
        assert!(!format!("{:?}", user).contains("topsecret"));
    }
}
