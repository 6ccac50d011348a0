use axum::{
    extract::{FromRef, State},
    http::header::SET_COOKIE,
    response::AppendHeaders,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, CredentialsRequest},
        password::{hash_password, verify_password},
        repo::User,
        token::TokenKeys,
    },
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

type AuthReply = (AppendHeaders<[(axum::http::HeaderName, String); 1]>, Json<AuthResponse>);

fn issue_session(state: &AppState, user: &User) -> Result<AuthReply, ApiError> {
    let keys = TokenKeys::from_ref(state);
    let token = keys.sign(user.id).map_err(ApiError::Internal)?;
    let cookie = keys.session_cookie(&token);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            token,
            user_id: user.id,
        }),
    ))
}

#[instrument(skip(state, payload))]
async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<AuthReply, ApiError> {
    if payload.login.is_empty() || payload.password.is_empty() {
        return Err(ApiError::InvalidInput(
            "login and password must not be empty".into(),
        ));
    }

    let hash = hash_password(&payload.password).map_err(ApiError::Internal)?;

    // No existence pre-check: the unique constraint on login decides the
    // winner when two registrations race.
    let user = User::create(&state.db, &payload.login, &hash)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::AlreadyExists(_) => {
                warn!(login = %payload.login, "login already taken");
                ApiError::AlreadyExists("Login already taken".into())
            }
            other => other,
        })?;

    info!(user_id = %user.id, login = %user.login, "user registered");
    issue_session(&state, &user)
}

#[instrument(skip(state, payload))]
async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<AuthReply, ApiError> {
    let user = User::find_by_login(&state.db, &payload.login)
        .await?
        .ok_or_else(|| {
            warn!(login = %payload.login, "signin for unknown login");
            ApiError::InvalidCredentials
        })?;

    let ok = verify_password(&payload.password, &user.password_hash)
        .map_err(ApiError::Internal)?;
    if !ok {
        warn!(user_id = %user.id, "signin with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(user_id = %user.id, "user signed in");
    issue_session(&state, &user)
}
