use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, time-bounded bearer tokens.
///
/// HS256 (HMAC-SHA256) under a single process-wide secret configured at
/// startup. Tokens are stateless: nothing is persisted and nothing can be
/// revoked; validity is decided entirely by signature and expiry.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl_hours: i64,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - signing key; should be at least 32 bytes for HS256 and
    ///   come from the environment, never from source
    /// * `ttl_hours` - expiry horizon stamped into every issued token
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl_hours,
        }
    }

    /// Issue a token asserting `subject`, expiring `ttl_hours` from now.
    ///
    /// Pure computation; no side effects.
    ///
    /// # Errors
    /// * `IssueFailed` - signing or serialization failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_subject(subject, self.ttl_hours);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    /// Verify a presented token and return its claims.
    ///
    /// Signature integrity is checked before expiry. A token signed under a
    /// different key, tampered with, or structurally malformed fails as
    /// `InvalidSignature`; a token whose header names another algorithm
    /// fails as `AlgorithmMismatch` so a downgrade can never slip through.
    ///
    /// # Errors
    /// * `InvalidSignature` - bad signature, tampered, or malformed
    /// * `Expired` - the expiry timestamp has passed
    /// * `AlgorithmMismatch` - header algorithm differs from the configured one
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        TokenError::AlgorithmMismatch
                    }
                    _ => TokenError::InvalidSignature,
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_then_verify_returns_subject() {
        let service = TokenService::new(SECRET, 24);

        let token = service.issue("alice@example.com").expect("Failed to issue");
        let claims = service.verify(&token).expect("Failed to verify");

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Horizon far enough in the past to clear the default clock leeway.
        let service = TokenService::new(SECRET, -2);

        let token = service.issue("alice@example.com").expect("Failed to issue");

        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_signed_under_other_key_is_rejected() {
        let issuer = TokenService::new(b"another_secret_key_32_bytes_long!!", 24);
        let verifier = TokenService::new(SECRET, 24);

        let token = issuer.issue("alice@example.com").expect("Failed to issue");

        assert_eq!(verifier.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let service = TokenService::new(SECRET, 24);

        let token = service.issue("alice@example.com").expect("Failed to issue");
        let other = service.issue("mallory@example.com").expect("Failed to issue");

        // Graft the signature of one token onto the payload of another.
        let payload: Vec<&str> = token.split('.').collect();
        let signature = other.split('.').nth(2).unwrap();
        let forged = format!("{}.{}.{}", payload[0], payload[1], signature);

        assert_eq!(service.verify(&forged), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let service = TokenService::new(SECRET, 24);

        assert_eq!(
            service.verify("not.a.token"),
            Err(TokenError::InvalidSignature)
        );
        assert_eq!(service.verify(""), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let service = TokenService::new(SECRET, 24);

        let claims = Claims::for_subject("alice@example.com", 24);
        let header = Header::new(Algorithm::HS384);
        let downgraded = encode(&header, &claims, &EncodingKey::from_secret(SECRET))
            .expect("Failed to encode");

        assert_eq!(
            service.verify(&downgraded),
            Err(TokenError::AlgorithmMismatch)
        );
    }
}
