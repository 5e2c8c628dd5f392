// handlers/admin/session.rs - POST /api/admin/session/refresh handler

use axum::{extract::State, response::Response};

use crate::error::ApiError;
use crate::handlers::utils::session_response;
use crate::middleware::AdminSession;
use crate::state::AppState;

/// POST /api/admin/session/refresh - Re-issue the current admin's token
///
/// Sits behind `require_admin`; the `AdminSession` extractor repeats the
/// check so the handler stays safe if mounted elsewhere. Sets fresh cookies
/// and returns `{ success, user }`.
pub async fn refresh_post(
    State(state): State<AppState>,
    AdminSession(identity): AdminSession,
) -> Result<Response, ApiError> {
    let issued = state.issuer().refresh(&identity).await?;
    tracing::info!("Admin '{}' refreshed session", issued.identity.email);

    session_response(&state, issued)
}
