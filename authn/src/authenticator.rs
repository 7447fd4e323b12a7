use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// One instance is built at startup from the configured secret and token
/// horizon, then shared read-only across request tasks.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token for the authenticated subject
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - process-wide token signing key
    /// * `token_ttl_hours` - expiry horizon for issued tokens
    pub fn new(secret: &[u8], token_ttl_hours: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(secret, token_ttl_hours),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match the stored hash
    /// * `Token` - token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Verify a presented token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - signature, expiry, or algorithm check failed
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_service.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET, 24);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate("my_password", &hash, "alice@example.com")
            .expect("Authentication failed");
        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .verify_token(&result.access_token)
            .expect("Token verification failed");
        assert_eq!(claims.sub, "alice@example.com");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let authenticator = Authenticator::new(SECRET, 24);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "alice@example.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupted_stored_hash_looks_like_mismatch() {
        let authenticator = Authenticator::new(SECRET, 24);

        let result = authenticator.authenticate("my_password", "garbage", "alice@example.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_garbage_token() {
        let authenticator = Authenticator::new(SECRET, 24);

        let result = authenticator.verify_token("invalid.token.here");
        assert!(result.is_err());
    }
}
