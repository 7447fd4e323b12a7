use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload: a self-contained assertion of a subject identity.
///
/// Fixed shape on purpose. The subject is the user's email, and every token
/// carries its issue and expiry timestamps; validity is a pure function of
/// (token, current time, current key).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the email the token asserts)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `subject` expiring `ttl_hours` from now.
    pub fn for_subject(subject: &str, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(ttl_hours);

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject_sets_horizon() {
        let claims = Claims::for_subject("alice@example.com", 24);

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }
}
