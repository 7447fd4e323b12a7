use thiserror::Error;

/// Error type for token operations.
///
/// Every verification failure is terminal for the request; the HTTP layer
/// maps all of them to one uniform 401 body and only logs the kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to issue token: {0}")]
    IssueFailed(String),

    #[error("Token signature is invalid or token is malformed")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token algorithm does not match the configured algorithm")]
    AlgorithmMismatch,
}
