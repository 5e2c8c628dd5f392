// handlers/public/auth/logout.rs - POST /auth/logout handler

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};
use serde_json::json;

use crate::middleware::RequestContext;
use crate::state::AppState;

/// POST /auth/logout - Expire both session cookies
///
/// Tokens are stateless, so this only tells the browser to drop them. A bearer
/// token held elsewhere stays valid until it expires.
pub async fn logout_post(State(state): State<AppState>, context: RequestContext) -> impl IntoResponse {
    if let Some(identity) = &context.identity {
        tracing::info!("Admin '{}' logged out", identity.email);
    }

    let [token_cookie, session_cookie] = state.cookies.cleared_cookies();

    (
        AppendHeaders([(SET_COOKIE, token_cookie), (SET_COOKIE, session_cookie)]),
        Json(json!({ "success": true })),
    )
}
