//! Admin authentication
//!
//! A single process-wide secret guards the admin endpoints. The secret is
//! verified against an optional argon2 digest seeded from deployment
//! configuration; when no digest is configured (or verification cannot
//! proceed) the candidate is compared against the plain-text fallback
//! secret instead.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use parking_lot::RwLock;

use crate::utils::AppError;

/// Process-wide admin password state.
///
/// `update` replaces the in-memory digest only; the change does not
/// survive a restart and is not propagated to other replicas. Callers
/// that need durability must persist the new digest externally (e.g. as
/// `ADMIN_PASSWORD_HASH`).
pub struct PasswordManager {
    fallback: String,
    digest: RwLock<Option<String>>,
}

impl PasswordManager {
    pub fn new(fallback: String, initial_digest: Option<String>) -> Self {
        Self {
            fallback,
            digest: RwLock::new(initial_digest),
        }
    }

    /// Verify a candidate secret.
    ///
    /// With no digest configured this is an exact string comparison
    /// against the fallback secret. With a digest, argon2 verification
    /// runs first; on mismatch or a malformed digest the fallback
    /// comparison is the secondary check.
    pub fn verify(&self, candidate: &str) -> bool {
        let digest = self.digest.read().clone();

        let Some(digest) = digest else {
            return candidate == self.fallback;
        };

        match PasswordHash::new(&digest) {
            Ok(parsed) => {
                if Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok()
                {
                    true
                } else {
                    candidate == self.fallback
                }
            }
            Err(e) => {
                tracing::warn!("Stored password digest is malformed: {}", e);
                candidate == self.fallback
            }
        }
    }

    /// Hash a new secret and replace the process-wide digest.
    pub fn update(&self, new_secret: &str) -> Result<(), AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(new_secret.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        *self.digest.write() = Some(hash.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_compare_without_digest() {
        let auth = PasswordManager::new("admin123".into(), None);
        assert!(auth.verify("admin123"));
        assert!(!auth.verify("letmein"));
    }

    #[test]
    fn update_replaces_digest() {
        let auth = PasswordManager::new("admin123".into(), None);
        auth.update("s3cret-pass").unwrap();
        assert!(auth.verify("s3cret-pass"));
        assert!(!auth.verify("wrong"));
        // Fallback still works as the secondary check
        assert!(auth.verify("admin123"));
    }

    #[test]
    fn malformed_digest_falls_back() {
        let auth = PasswordManager::new("admin123".into(), Some("not-a-digest".into()));
        assert!(auth.verify("admin123"));
        assert!(!auth.verify("other"));
    }

    #[test]
    fn configured_digest_verifies() {
        let auth = PasswordManager::new("admin123".into(), None);
        auth.update("first").unwrap();
        auth.update("second").unwrap();
        assert!(auth.verify("second"));
        assert!(!auth.verify("first"));
    }
}
