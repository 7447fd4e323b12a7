use std::fmt;
use std::str::FromStr;

use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// The password hash is stored alongside the row but never leaves the
/// service in a response body.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub age: i32,
    pub password_hash: String,
}

/// User unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is not a valid integer identifier
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type.
///
/// The email is the login key, so it is validated once at the boundary and
/// carried as a proven-valid value from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user.
#[derive(Debug)]
pub struct SignupCommand {
    pub name: String,
    pub email: EmailAddress,
    pub age: i32,
    /// Plain text password; hashed by the service before it reaches the store
    pub password: String,
}

impl SignupCommand {
    pub fn new(name: String, email: EmailAddress, age: i32, password: String) -> Self {
        Self {
            name,
            email,
            age,
            password,
        }
    }
}

/// Command to update an existing user.
///
/// All fields are optional to support partial updates. The password hash is
/// deliberately not updatable through this path.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub age: Option<i32>,
}
