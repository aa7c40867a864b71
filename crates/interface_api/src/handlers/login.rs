//! Demo login handler

use axum::{extract::State, Json};
use tracing::info;

use crate::auth;
use crate::dto::auth::{LoginRequest, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::AppState;

/// Authenticates a demo account and issues a session token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = auth::authenticate(&request.email, &request.password)
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let token = auth::create_token(
        user,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(user = %user.email, role = %user.role, "login");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: UserResponse::from(user),
    }))
}
