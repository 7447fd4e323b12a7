use thiserror::Error;

/// Error type for password hashing.
///
/// Verification has no error variant: a malformed stored hash must look like
/// a plain mismatch to the caller, so `verify` returns `bool`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
