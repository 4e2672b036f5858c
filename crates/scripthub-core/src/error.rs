//! Error types for Script Hub Core

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown script category: {0}")]
    UnknownCategory(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Result type alias for Script Hub Core operations
pub type Result<T> = std::result::Result<T, Error>;

/// A rejected creation payload or patch.
///
/// Holds every violated field, not just the first one found, so callers can
/// report all problems in one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `field` has at least one violation
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for `field` (empty if the field is valid)
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> &BTreeMap<&'static str, Vec<String>> {
        &self.fields
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected error
    pub fn finish(self) -> std::result::Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        let mut sep = ": ";
        for (field, messages) in &self.fields {
            for message in messages {
                write!(f, "{}{}: {}", sep, field, message)?;
                sep = "; ";
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_fields() {
        let mut err = ValidationError::new();
        err.add("username", "too short");
        err.add("email", "invalid email address");
        err.add("username", "invalid characters");

        assert!(err.has("username"));
        assert!(err.has("email"));
        assert!(!err.has("password"));
        assert_eq!(err.messages("username").len(), 2);
        assert!(err.messages("password").is_empty());

        let text = err.to_string();
        assert!(text.starts_with("Validation failed: "));
        assert!(text.contains("email: invalid email address"));
    }

    #[test]
    fn test_finish() {
        assert!(ValidationError::new().finish().is_ok());

        let mut err = ValidationError::new();
        err.add("name", "required");
        assert!(err.finish().is_err());
    }
}
