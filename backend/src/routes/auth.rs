//! Authentication routes
//!
//! # Performance Optimizations
//!
//! - Uses pre-computed signing keys from AppState (no per-request key decoding)
//! - Password verification runs on blocking thread pool (doesn't block async runtime)

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use super::extract::ApiJson;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use student_records_shared::types::{AuthResponse, CurrentUser, LoginRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(current_user))
}

/// Login with username and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response =
        AuthService::login(state.users(), state.tokens(), &req.username, &req.password).await?;
    Ok(Json(response))
}

/// Identity asserted by the presented token
///
/// GET /api/auth/me
///
/// # Authentication
/// Requires valid Bearer token in Authorization header.
async fn current_user(auth_user: AuthUser) -> Json<CurrentUser> {
    Json(CurrentUser {
        username: auth_user.username,
    })
}
