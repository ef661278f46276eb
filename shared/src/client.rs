//! Client-facing request/response DTOs
//!
//! Shared between the admin server and frontend clients so both sides
//! agree on the login and password-change payloads.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// Password change request
///
/// `emp_id` is accepted for wire compatibility but the server always
/// substitutes the authenticated employee's id before acting on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordEditRequest {
    pub emp_id: Option<i64>,
    pub old_password: String,
    pub new_password: String,
}
