//! Authentication handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::models::AuthenticatedUser;
use shared::types::Role;

use crate::error::AppError;
use crate::services::AuthService;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AuthenticatedUser,
}

/// Login endpoint handler
///
/// The returned user is held client-side; no token is issued.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let auth_service = AuthService::new(state.store.clone());
    let user = auth_service
        .authenticate(&body.email, &body.password, body.role)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}
