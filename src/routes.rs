use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::{require_admin, resolve_context};
use crate::state::AppState;

/// Full application router. Every request passes through session resolution first.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.cors_origins);

    Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        .merge(auth_public_routes())
        // Session required
        .merge(auth_routes())
        // Admin gate
        .merge(admin_routes())
        .fallback(handlers::public::not_found)
        // Global middleware
        .layer(middleware::from_fn_with_state(state.clone(), resolve_context))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/auth/login", post(auth::login_post))
        .route("/auth/logout", post(auth::logout_post))
}

fn auth_routes() -> Router<AppState> {
    use handlers::protected::auth;

    Router::new().route("/api/auth/verify", get(auth::verify_get))
}

fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/api/admin/session/refresh", post(admin::session_refresh))
        .route_layer(middleware::from_fn(require_admin))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
