//! Auth routes — signup, signin, logout, and the bearer-token extractor.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::model::User;
use crate::services::auth as auth_svc;
use crate::services::session;
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let token = header.strip_prefix("Bearer ").unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(app_state.storage.as_ref(), token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

pub(crate) fn auth_error_to_status(err: auth_svc::AuthError) -> StatusCode {
    match err {
        auth_svc::AuthError::InvalidEmail
        | auth_svc::AuthError::EmailTaken
        | auth_svc::AuthError::UsernameTaken => StatusCode::BAD_REQUEST,
        auth_svc::AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        auth_svc::AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SigninBody {
    pub username: String,
    pub password: String,
}

/// Authenticated identity handed back to the client: the profile plus the
/// session token it must present as a bearer credential.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// `POST /auth/signup` — register and open a session.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, Json<AuthResponse>), StatusCode> {
    let user = auth_svc::signup(
        state.storage.as_ref(),
        auth_svc::NewUser {
            email: body.email,
            username: body.username,
            full_name: body.full_name,
            password: body.password,
        },
    )
    .await
    .map_err(auth_error_to_status)?;

    let session = session::create_session(state.storage.as_ref(), user.id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((StatusCode::CREATED, Json(AuthResponse { user, token: session.token })))
}

/// `POST /auth/signin` — authenticate and open a session.
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SigninBody>,
) -> Result<Json<AuthResponse>, StatusCode> {
    let (user, session) = auth_svc::signin(state.storage.as_ref(), &body.username, &body.password)
        .await
        .map_err(auth_error_to_status)?;
    Ok(Json(AuthResponse { user, token: session.token }))
}

/// `POST /api/auth/logout` — destroy the session.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    if let Err(e) = session::delete_session(state.storage.as_ref(), &auth.token).await {
        tracing::error!(error = %e, "logout failed to delete session");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    StatusCode::NO_CONTENT
}

/// `GET /api/auth/me` — return the current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
