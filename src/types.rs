/// Response bodies shared across handlers

use serde::{Deserialize, Serialize};

use crate::auth::Identity;

/// Body returned when a session is issued (login, refresh)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user: Identity,
}

/// Body returned by `verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: Identity,
}
