use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::INVALID_CREDENTIALS_MSG;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified identity into downstream handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject {
    /// Email the presented token asserts
    pub email: String,
}

/// Bearer-token gate over the protected route group.
///
/// Extracts the token, verifies it, and either attaches the verified subject
/// to request extensions or rejects with 401 before any handler runs. Every
/// rejection uses one uniform body; the specific failure kind is only logged.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        unauthorized()
    })?;

    let claims = state.authenticator.verify_token(token).map_err(|kind| {
        tracing::warn!(%kind, "Token verification failed");
        unauthorized()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedSubject { email: claims.sub });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(INVALID_CREDENTIALS_MSG.to_string()).into_response()
}

/// Accepts only the exact `Bearer <token>` shape.
fn extract_bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
