use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape; converted to the domain entity so a stored email that no
/// longer validates surfaces as a typed error instead of leaking through.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    age: i32,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            name: row.name,
            email: EmailAddress::new(row.email)?,
            age: row.age,
            password_hash: row.password_hash,
        })
    }
}

fn map_insert_error(e: sqlx::Error, email: &EmailAddress) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
            return UserError::EmailAlreadyExists(email.as_str().to_string());
        }
    }
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(
        &self,
        name: &str,
        email: &EmailAddress,
        age: i32,
        password_hash: &str,
    ) -> Result<User, UserError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, age, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, age, password_hash
            "#,
        )
        .bind(name)
        .bind(email.as_str())
        .bind(age)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, email))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, age, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, age, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, age, password_hash
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, id: &UserId, changes: &UpdateUserCommand) -> Result<User, UserError> {
        // Single statement: absent fields keep their value, a missing row
        // comes back as no result rather than needing a lookup first.
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                age = COALESCE($4, age)
            WHERE id = $1
            RETURNING id, name, email, age, password_hash
            "#,
        )
        .bind(id.0)
        .bind(changes.name.as_deref())
        .bind(changes.email.as_ref().map(|e| e.as_str()))
        .bind(changes.age)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key")
                {
                    if let Some(email) = &changes.email {
                        return UserError::EmailAlreadyExists(email.as_str().to_string());
                    }
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        row.ok_or(UserError::NotFound(id.to_string()))?.try_into()
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
