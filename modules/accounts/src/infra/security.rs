//! Argon2id adapter for the `PasswordHasher` port.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier as _};

use crate::domain::ports::PasswordHasher;

/// Argon2id with default parameters and a fresh random salt per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, stored: &str) -> bool {
        // A malformed stored hash is a verification failure, not an error.
        match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_never_plaintext() {
        let hasher = Argon2Hasher;
        let a = hasher.hash("correct horse battery staple").unwrap();
        let b = hasher.hash("correct horse battery staple").unwrap();
        assert_ne!(a, "correct horse battery staple");
        assert_ne!(a, b, "same input must hash differently per call");
    }

    #[test]
    fn verify_accepts_matching_password() {
        let hasher = Argon2Hasher;
        let stored = hasher.hash("hunter2hunter2").unwrap();
        assert!(hasher.verify("hunter2hunter2", &stored));
        assert!(!hasher.verify("wrong password", &stored));
    }

    #[test]
    fn malformed_stored_hash_fails_verification() {
        let hasher = Argon2Hasher;
        assert!(!hasher.verify("anything", "not-a-phc-string"));
        assert!(!hasher.verify("anything", ""));
    }
}
