//! Field-level validation rules shared by drafts and patches

use crate::error::ValidationError;

pub(crate) const USERNAME_MIN: usize = 3;
pub(crate) const USERNAME_MAX: usize = 20;
pub(crate) const PASSWORD_MIN: usize = 6;
pub(crate) const EMAIL_MAX: usize = 255;

pub(crate) fn required(errors: &mut ValidationError, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "is required");
    }
}

pub(crate) fn max_len(errors: &mut ValidationError, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("must be at most {} characters", max));
    }
}

pub(crate) fn username(errors: &mut ValidationError, value: &str) {
    let len = value.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        errors.add(
            "username",
            format!("must be {}-{} characters", USERNAME_MIN, USERNAME_MAX),
        );
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.add("username", "may only contain letters, numbers and underscores");
    }
}

pub(crate) fn email(errors: &mut ValidationError, value: &str) {
    if value.len() > EMAIL_MAX || !is_email(value) {
        errors.add("email", "must be a valid email address");
    }
}

pub(crate) fn password(errors: &mut ValidationError, value: &str) {
    if value.chars().count() < PASSWORD_MIN {
        errors.add(
            "password",
            format!("must be at least {} characters", PASSWORD_MIN),
        );
    }
}

pub(crate) fn percentage(errors: &mut ValidationError, field: &'static str, value: i64) {
    if !(0..=100).contains(&value) {
        errors.add(field, "must be between 0 and 100");
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_syntax() {
        assert!(is_email("alice@example.com"));
        assert!(is_email("a.b+tag@mail.example.org"));

        assert!(!is_email(""));
        assert!(!is_email("alice"));
        assert!(!is_email("alice@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("alice@example"));
        assert!(!is_email("alice@example..com"));
        assert!(!is_email("alice@@example.com"));
        assert!(!is_email("ali ce@example.com"));
    }

    #[test]
    fn test_username_rules() {
        let mut errors = ValidationError::new();
        username(&mut errors, "ok_name_1");
        assert!(errors.is_empty());

        username(&mut errors, "ab");
        assert!(errors.has("username"));

        let mut errors = ValidationError::new();
        username(&mut errors, "bad-name!");
        assert_eq!(errors.messages("username").len(), 1);

        let mut errors = ValidationError::new();
        username(&mut errors, &"x".repeat(21));
        assert!(errors.has("username"));
    }
}
