use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json, Response},
};

use crate::auth::IssuedSession;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::SessionResponse;

/// 200 `{ success, user }` with the `token` and `session` cookies set
pub fn session_response(state: &AppState, issued: IssuedSession) -> Result<Response, ApiError> {
    let [token_cookie, session_cookie] = state
        .cookies
        .session_cookies(&issued.token, &issued.identity)?;

    Ok((
        AppendHeaders([(SET_COOKIE, token_cookie), (SET_COOKIE, session_cookie)]),
        Json(SessionResponse {
            success: true,
            user: issued.identity,
        }),
    )
        .into_response())
}
