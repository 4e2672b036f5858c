//! Password hashing and verification using argon2id.

use crate::error::{Error, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::warn;

/// Hash a password using argon2id with a random salt.
///
/// Returns a PHC string that embeds the salt and parameters.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored argon2id hash.
///
/// A mismatch is `false`, and so is a stored hash that cannot be parsed.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "Stored password hash is malformed");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("mysecret").unwrap();
        assert!(verify_password(&hash, "mysecret"));
        assert!(!verify_password(&hash, "wrongpassword"));
    }

    #[test]
    fn test_salted() {
        let h1 = hash_password("same-password").unwrap();
        let h2 = hash_password("same-password").unwrap();
        assert_ne!(h1, h2);
        assert!(verify_password(&h1, "same-password"));
        assert!(verify_password(&h2, "same-password"));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("hunter22").unwrap();
        assert!(!hash.contains("hunter22"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_malformed_hash_is_false() {
        assert!(!verify_password("not-a-phc-string", "anything"));
        assert!(!verify_password("", ""));
    }
}
