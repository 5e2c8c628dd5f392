// handlers/public/auth/login.rs - POST /auth/login handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Json, Response},
};
use serde::Deserialize;

use crate::auth::LoginCredentials;
use crate::error::ApiError;
use crate::handlers::utils::session_response;
use crate::state::AppState;

/// Login payload. Missing fields deserialize as empty and fail field validation.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /auth/login - Authenticate an admin and start a session
///
/// Expected Input:
/// ```json
/// { "email": "booker@agency.test", "password": "..." }
/// ```
///
/// Expected Output (Success), with `token` and `session` cookies set:
/// ```json
/// { "success": true, "user": { "role": "admin", "email": "booker@agency.test" } }
/// ```
///
/// Errors: 400 for malformed input, 401 for bad credentials (same message
/// whether or not the email exists), 500 for anything else.
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected login body: {}", rejection.body_text());
        ApiError::bad_request("Request body must be JSON with email and password")
    })?;

    let credentials = LoginCredentials::parse(&payload.email, &payload.password)?;
    let issued = state.issuer().login(&credentials).await?;

    session_response(&state, issued)
}
