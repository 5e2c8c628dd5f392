use std::collections::HashMap;

use super::AuthError;

/// Login input after shape validation
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// Validate the raw login fields, collecting every field error at once
    pub fn parse(email: &str, password: &str) -> Result<Self, AuthError> {
        let mut field_errors = HashMap::new();

        let email = normalize_email(email);
        if let Err(msg) = validate_email_format(&email) {
            field_errors.insert("email".to_string(), msg);
        }
        if password.is_empty() {
            field_errors.insert("password".to_string(), "Password is required".to_string());
        }

        if !field_errors.is_empty() {
            return Err(AuthError::InvalidInput(field_errors));
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}

/// Emails are stored and looked up trimmed and lower-cased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email shape check: one `@`, non-empty local part, dotted domain
pub fn validate_email_format(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err("Invalid email format".to_string()),
    };

    if local.is_empty() || email.chars().any(char::is_whitespace) {
        return Err("Invalid email format".to_string());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}
