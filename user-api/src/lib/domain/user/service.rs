use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns the signup hashing step; everything else delegates to the
/// repository. Existence is decided by affected rows in the repository, so
/// no operation here needs a lookup round trip before mutating.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: authn::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: authn::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError> {
        // The plaintext never reaches the store.
        let password_hash = self.password_hasher.hash(&command.password)?;

        self.repository
            .insert(&command.name, &command.email, command.age, &password_hash)
            .await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound(email.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        self.repository.update(id, &command).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn insert(
                &self,
                name: &str,
                email: &EmailAddress,
                age: i32,
                password_hash: &str,
            ) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, id: &UserId, changes: &UpdateUserCommand) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn sample_user(id: i64) -> User {
        User {
            id: UserId(id),
            name: "Alice".to_string(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            age: 30,
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_hashes_before_insert() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_insert()
            .withf(|name, email, age, password_hash| {
                name == "Alice"
                    && email.as_str() == "alice@example.com"
                    && *age == 30
                    // The store only ever sees a PHC hash, never the plaintext.
                    && password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|name, email, age, password_hash| {
                Ok(User {
                    id: UserId(1),
                    name: name.to_string(),
                    email: email.clone(),
                    age,
                    password_hash: password_hash.to_string(),
                })
            });

        let service = UserService::new(Arc::new(repository));

        let command = SignupCommand::new(
            "Alice".to_string(),
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            30,
            "pass_word!".to_string(),
        );

        let user = service.signup(command).await.expect("signup failed");
        assert_eq!(user.id, UserId(1));
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_insert().times(1).returning(|_, email, _, _| {
            Err(UserError::EmailAlreadyExists(email.to_string()))
        });

        let service = UserService::new(Arc::new(repository));

        let command = SignupCommand::new(
            "Alice".to_string(),
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            30,
            "pass_word!".to_string(),
        );

        let result = service.signup(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId(7);
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(Some(sample_user(7))));

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user(&user_id).await.expect("lookup failed");
        assert_eq!(user.id, user_id);
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId(404)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let email = EmailAddress::new("ghost@example.com".to_string()).unwrap();
        let result = service.get_user_by_email(&email).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![sample_user(1), sample_user(2)]));

        let service = UserService::new(Arc::new(repository));

        let users = service.list_users().await.expect("list failed");
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_update_user_passes_changes_through() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_update()
            .withf(|id, changes| {
                *id == UserId(7) && changes.name.as_deref() == Some("Bob") && changes.email.is_none()
            })
            .times(1)
            .returning(|_, _| {
                let mut user = sample_user(7);
                user.name = "Bob".to_string();
                Ok(user)
            });

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            name: Some("Bob".to_string()),
            email: None,
            age: None,
        };

        let user = service
            .update_user(&UserId(7), command)
            .await
            .expect("update failed");
        assert_eq!(user.name, "Bob");
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(UserError::NotFound(id.to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.delete_user(&UserId(404)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
