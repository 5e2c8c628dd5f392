use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::auth::RequestContext;
use crate::auth::Identity;
use crate::error::ApiError;

/// Admin check shared by the extractor and the route-group middleware
pub fn authorize(context: &RequestContext) -> Result<&Identity, ApiError> {
    match &context.identity {
        Some(identity) if identity.is_admin() => Ok(identity),
        Some(identity) => {
            tracing::warn!("Non-admin role '{}' rejected for '{}'", identity.role, identity.email);
            Err(ApiError::unauthorized("Admin access required"))
        }
        None => Err(ApiError::unauthorized("Authentication required")),
    }
}

/// Extractor that only succeeds for an admin identity
#[derive(Clone, Debug)]
pub struct AdminSession(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let context = match RequestContext::from_request_parts(parts, state).await {
            Ok(context) => context,
            Err(never) => match never {},
        };

        authorize(&context).cloned().map(AdminSession)
    }
}

/// Route-group guard: rejects before the handler runs unless the request carries an admin identity
pub async fn require_admin(request: Request, next: Next) -> Response {
    let context = request
        .extensions()
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_default();

    match authorize(&context) {
        Ok(_) => next.run(request).await,
        Err(api_error) => api_error.into_response(),
    }
}
