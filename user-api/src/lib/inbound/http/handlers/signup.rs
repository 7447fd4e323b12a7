use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    name: String,
    email: String,
    age: i32,
    password: String,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupCommand, EmailError> {
        let email = EmailAddress::new(self.email)?;
        Ok(SignupCommand::new(self.name, email, self.age, self.password))
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
