use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user: hash the password, persist the row.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - email is already registered; under concurrent
    ///   signups for the same email the store's uniqueness constraint decides
    ///   the winner
    /// * `Password` - hashing failed
    /// * `DatabaseError` - store operation failed
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by email (the login key).
    ///
    /// # Errors
    /// * `NotFound` - no user with this email
    /// * `DatabaseError` - store operation failed
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update name, email, and/or age of an existing user.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `EmailAlreadyExists` - new email is already registered
    /// * `DatabaseError` - store operation failed
    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Delete an existing user.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user table.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new user row; the store assigns the identifier.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - unique constraint violation on email
    /// * `DatabaseError` - store operation failed
    async fn insert(
        &self,
        name: &str,
        email: &EmailAddress,
        age: i32,
        password_hash: &str,
    ) -> Result<User, UserError>;

    /// Retrieve user by identifier; `None` if not found.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email; `None` if not found.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Apply the provided fields to an existing row in one statement.
    ///
    /// # Errors
    /// * `NotFound` - no row affected
    /// * `EmailAlreadyExists` - unique constraint violation on email
    /// * `DatabaseError` - store operation failed
    async fn update(&self, id: &UserId, changes: &UpdateUserCommand) -> Result<User, UserError>;

    /// Remove a row, reporting `NotFound` when nothing was affected.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
