use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use super::INVALID_CREDENTIALS_MSG;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Credential verification and token issuance.
///
/// Every credential failure — unknown email, wrong password, even an email
/// that does not parse — answers with the same 401 body, so the response
/// never reveals whether the subject exists.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let email =
        EmailAddress::new(body.email).map_err(|_| unauthorized())?;

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => unauthorized(),
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, user.email.as_str())
        .map_err(|e| match e {
            authn::AuthenticationError::InvalidCredentials => unauthorized(),
            authn::AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            authn::AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
            user: (&user).into(),
        },
    ))
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized(INVALID_CREDENTIALS_MSG.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: UserData,
}
