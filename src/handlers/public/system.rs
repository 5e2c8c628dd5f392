// handlers/public/system.rs - service info, health and 404 fallback

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - service name, version and route overview
pub async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "Agency Console API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "login": "POST /auth/login (public)",
                "logout": "POST /auth/logout (public)",
                "verify": "GET /api/auth/verify (session required)",
                "refresh": "POST /api/admin/session/refresh (admin only)",
                "health": "GET /health (public)"
            }
        }
    }))
}

/// GET /health - admin store reachability
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.store.ping().await.map_err(ApiError::from)?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "environment": state.config.environment,
            "signing": state.signer.is_configured(),
        }
    })))
}

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    ApiError::not_found("Route not found")
}
