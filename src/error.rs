// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::AuthError;
use crate::database::DatabaseError;

/// Generic message for every 5xx; the cause only goes to the log
const INTERNAL_MESSAGE: &str = "An error occurred while processing your request";

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut error = json!({
            "code": self.error_code(),
            "message": self.message(),
        });

        if let ApiError::ValidationError {
            field_errors: Some(field_errors),
            ..
        } = self
        {
            error["field_errors"] = json!(field_errors);
        }

        json!({
            "success": false,
            "error": error,
        })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>,
    ) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error() -> Self {
        ApiError::InternalServerError(INTERNAL_MESSAGE.to_string())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidInput(field_errors) => {
                ApiError::validation_error("Invalid login input", Some(field_errors))
            }
            AuthError::InvalidCredentials => ApiError::unauthorized("Invalid email or password"),
            AuthError::MissingSecret => {
                tracing::error!("Login attempted but JWT_SECRET is not configured");
                ApiError::internal_server_error()
            }
            AuthError::Token(e) => {
                tracing::error!("Token signing error: {}", e);
                ApiError::internal_server_error()
            }
            AuthError::PasswordHash => {
                tracing::error!("Password hashing failed");
                ApiError::internal_server_error()
            }
            AuthError::Encoding(e) => {
                tracing::error!("Session encoding error: {}", e);
                ApiError::internal_server_error()
            }
            AuthError::Store(e) => {
                // Don't expose database errors to clients
                tracing::error!("Admin store error: {}", e);
                ApiError::internal_server_error()
            }
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        if err.is_unavailable() {
            tracing::error!("Database unavailable: {}", err);
            return ApiError::service_unavailable("Database temporarily unavailable");
        }
        tracing::error!("Database error: {}", err);
        ApiError::internal_server_error()
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_fixed_codes() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "Email is required".to_string());

        let cases = [
            (AuthError::InvalidInput(fields), StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::MissingSecret, StatusCode::INTERNAL_SERVER_ERROR),
            (AuthError::PasswordHash, StatusCode::INTERNAL_SERVER_ERROR),
            (
                AuthError::Store(DatabaseError::ConfigMissing("DATABASE_URL")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn internal_errors_do_not_leak() {
        let err = ApiError::from(AuthError::Store(DatabaseError::ConfigMissing("DATABASE_URL")));
        let body = err.to_json().to_string();
        assert!(!body.contains("DATABASE_URL"));
        assert_eq!(err.message(), INTERNAL_MESSAGE);
    }

    #[test]
    fn validation_error_carries_fields() {
        let mut fields = HashMap::new();
        fields.insert("password".to_string(), "Password is required".to_string());
        let body = ApiError::from(AuthError::InvalidInput(fields)).to_json();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field_errors"]["password"], "Password is required");
    }

    #[test]
    fn database_outage_is_503_other_failures_500() {
        let outage = ApiError::from(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(outage.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let failed = ApiError::from(DatabaseError::Conflict("booker@agency.test".into()));
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!failed.to_json().to_string().contains("booker"));
    }
}
