use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{cookies::find_cookie, Identity, TokenSigner, TOKEN_COOKIE};
use crate::state::AppState;

/// Per-request authentication result. `identity` is `None` for anonymous requests.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub identity: Option<Identity>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolve the request's session token, if any, to an identity.
    /// Invalid or expired tokens resolve to anonymous.
    pub fn from_headers(headers: &HeaderMap, signer: &TokenSigner) -> Self {
        let identity = extract_token(headers).and_then(|token| signer.verify(token));
        Self { identity }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Middleware that resolves the session for every request and stores it in
/// the request extensions. Never rejects.
pub async fn resolve_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = RequestContext::from_headers(request.headers(), &state.signer);
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Reads the context stored by [`resolve_context`]; anonymous when the layer is absent
#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Bearer token from the Authorization header, falling back to the `token` cookie.
/// The readable `session` cookie is never consulted.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).or_else(|| find_cookie(headers, TOKEN_COOKIE).filter(|t| !t.is_empty()))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = auth_str.trim_start().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Duration;

    fn signer() -> TokenSigner {
        TokenSigner::new(Some("test-secret"), Duration::days(7))
    }

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let map = headers(&[
            (header::AUTHORIZATION, "Bearer from-header"),
            (header::COOKIE, "token=from-cookie"),
        ]);
        assert_eq!(extract_token(&map), Some("from-header"));
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        for value in ["bearer lower", "BEARER upper", "BeArEr mixed"] {
            let map = headers(&[
                (header::AUTHORIZATION, value),
                (header::COOKIE, "token=from-cookie"),
            ]);
            let expected = value.split_once(' ').map(|(_, t)| t);
            assert_eq!(extract_token(&map), expected);
        }
    }

    #[test]
    fn falls_back_to_cookie() {
        let map = headers(&[(header::COOKIE, "token=from-cookie")]);
        assert_eq!(extract_token(&map), Some("from-cookie"));

        let basic = headers(&[
            (header::AUTHORIZATION, "Basic dXNlcjpwYXNz"),
            (header::COOKIE, "token=from-cookie"),
        ]);
        assert_eq!(extract_token(&basic), Some("from-cookie"));
    }

    #[test]
    fn no_token_anywhere() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        assert_eq!(extract_token(&headers(&[(header::AUTHORIZATION, "Bearer   ")])), None);
        assert_eq!(extract_token(&headers(&[(header::COOKIE, "token=")])), None);
    }

    #[test]
    fn readable_session_cookie_is_ignored() {
        let map = headers(&[(
            header::COOKIE,
            "session=%7B%22role%22%3A%22admin%22%2C%22email%22%3A%22x%40y.z%22%7D",
        )]);
        let context = RequestContext::from_headers(&map, &signer());
        assert!(!context.is_authenticated());
    }

    #[test]
    fn valid_cookie_resolves_identity() {
        let identity = Identity::admin("booker@agency.test");
        let token = signer().issue(&identity).unwrap();
        let cookie = format!("token={}", token);
        let map = headers(&[(header::COOKIE, cookie.as_str())]);

        let context = RequestContext::from_headers(&map, &signer());
        assert_eq!(context.identity, Some(identity));
    }

    #[test]
    fn invalid_token_is_anonymous_not_error() {
        let map = headers(&[(header::AUTHORIZATION, "Bearer not-a-token")]);
        let context = RequestContext::from_headers(&map, &signer());
        assert!(context.identity.is_none());
    }
}
