//! Staff authentication: register, login, refresh, logout, me.
//!
//! Access tokens are short-lived JWTs; refresh tokens are opaque and
//! rotated on every use, with only their SHA-256 hash stored.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use atrium_core::error::CoreError;
use atrium_core::roles::Role;
use atrium_core::types::DbId;
use atrium_db::models::profile::{NewProfile, PublicProfile};
use atrium_db::repositories::{ProfileRepo, SessionRepo};

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token,
};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    /// Defaults to `sales_rep`.
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub profile: PublicProfile,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked: bool,
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PublicProfile>>)> {
    if !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "email must be a valid email address".into(),
        )));
    }
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = match &input.role {
        Some(r) => Role::parse(r)?,
        None => Role::SalesRep,
    };
    // Admin and manager accounts are provisioned by an admin, not minted
    // through the public endpoint.
    if role.is_manager() {
        return Err(AppError::Core(CoreError::Forbidden(
            "this role cannot be self-registered".into(),
        )));
    }
    let role = role.as_str().to_string();

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("password hashing failed: {e}")))?;

    let profile = ProfileRepo::create(
        &state.pool,
        &NewProfile {
            email: input.email.to_lowercase(),
            password_hash,
            full_name: input.full_name,
            phone: input.phone,
            role,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(profile.public())),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<TokenPair>>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let profile = ProfileRepo::find_by_email(&state.pool, &input.email.to_lowercase())
        .await?
        .ok_or_else(invalid)?;

    let ok = verify_password(&input.password, &profile.password_hash)
        .map_err(|e| AppError::InternalError(format!("password verification failed: {e}")))?;
    if !ok {
        return Err(invalid());
    }

    let (access_token, refresh_token) = issue_tokens(&state, profile.id, &profile.role).await?;
    tracing::info!(profile_id = profile.id, "Login succeeded");

    Ok(Json(DataResponse::new(TokenPair {
        access_token,
        refresh_token,
        profile: profile.public(),
    })))
}

/// POST /api/v1/auth/refresh
///
/// Rotates the refresh token: the presented token's session is revoked and
/// a fresh pair is issued.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<TokenPair>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_by_hash(&state.pool, &token_hash)
        .await?
        .filter(|s| s.is_active(Utc::now()))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let profile = ProfileRepo::find_by_id(&state.pool, session.profile_id)
        .await?
        .filter(|p| p.active)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Profile is no longer active".into()))
        })?;

    SessionRepo::revoke(&state.pool, &token_hash).await?;
    let (access_token, refresh_token) = issue_tokens(&state, profile.id, &profile.role).await?;

    Ok(Json(DataResponse::new(TokenPair {
        access_token,
        refresh_token,
        profile: profile.public(),
    })))
}

/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<LogoutResponse>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);
    let revoked = SessionRepo::revoke(&state.pool, &token_hash).await?;
    Ok(Json(DataResponse::new(LogoutResponse { revoked })))
}

/// GET /api/v1/auth/me
pub async fn me(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<PublicProfile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, user.profile_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.profile_id,
        }))?;
    Ok(Json(DataResponse::new(profile.public())))
}

/// Mint an access token plus a stored refresh token for a profile.
async fn issue_tokens(
    state: &AppState,
    profile_id: DbId,
    role: &str,
) -> AppResult<(String, String)> {
    let access_token = generate_access_token(profile_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("token generation failed: {e}")))?;

    let refresh_token = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days);
    SessionRepo::create(
        &state.pool,
        profile_id,
        &hash_refresh_token(&refresh_token),
        expires_at,
    )
    .await?;

    Ok((access_token, refresh_token))
}
