//! Authentication core for the user API.
//!
//! Three pieces, kept free of I/O so the HTTP service can call them from any
//! request task:
//! - Password hashing and verification (Argon2id)
//! - Token issuance and verification (HS256 JWT, fixed claims)
//! - An [`Authenticator`] coordinating both for the login flow
//!
//! # Examples
//!
//! ```
//! use authn::Authenticator;
//!
//! let auth = Authenticator::new(b"a_signing_secret_of_32_bytes_min!", 24);
//!
//! // Signup: hash the password for storage.
//! let hash = auth.hash_password("hunter2").unwrap();
//!
//! // Login: verify the password and issue a token for the subject.
//! let result = auth.authenticate("hunter2", &hash, "alice@example.com").unwrap();
//!
//! // Every protected request: verify the presented token.
//! let claims = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
