use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Credential hasher backed by Argon2id.
///
/// Passwords are low-entropy secrets, so a salted, slow, adaptive hash is
/// used rather than a general-purpose digest. The PHC output string embeds
/// the algorithm, cost parameters, and salt, so verification needs no
/// side-channel state and cost tuning never invalidates stored hashes.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// A fresh random salt is drawn from the OS RNG per call, so hashing the
    /// same password twice yields two distinct stored values.
    ///
    /// # Errors
    /// * `HashingFailed` - the underlying derivation could not complete; a
    ///   weak or empty hash is never produced silently
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Re-derives with the salt and parameters embedded in the stored hash
    /// and compares in constant time. A stored hash that fails to parse
    /// returns `false` rather than an error: a corrupted hash must not be
    /// distinguishable from a wrong password by the caller.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("correct horse").expect("Failed to hash");

        assert!(hasher.verify("correct horse", &hash));
        assert!(!hasher.verify("battery staple", &hash));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("hunter2").expect("Failed to hash");
        let second = hasher.hash("hunter2").expect("Failed to hash");

        // Distinct salts produce distinct stored values, both verifiable.
        assert_ne!(first, second);
        assert!(hasher.verify("hunter2", &first));
        assert!(hasher.verify("hunter2", &second));
    }

    #[test]
    fn test_malformed_stored_hash_is_just_a_mismatch() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("hunter2", "not-a-phc-string"));
        assert!(!hasher.verify("hunter2", ""));
    }
}
