// handlers/protected/auth/verify.rs - GET /api/auth/verify handler

use axum::response::Json;

use crate::error::ApiError;
use crate::middleware::RequestContext;
use crate::types::UserResponse;

/// GET /api/auth/verify - Echo the identity behind the current session
///
/// Reads the identity resolved by the context middleware from the bearer
/// header or `token` cookie.
///
/// ```json
/// { "user": { "role": "admin", "email": "booker@agency.test" } }
/// ```
pub async fn verify_get(context: RequestContext) -> Result<Json<UserResponse>, ApiError> {
    let user = context
        .identity
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    Ok(Json(UserResponse { user }))
}
