//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
///
/// `password` holds the argon2 PHC hash and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub status: i32,
    pub create_time: i64,
    pub update_time: i64,
    pub create_user: i64,
    pub update_user: i64,
}

/// Create employee payload
///
/// When `password` is absent the server falls back to the configured
/// default password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub username: String,
    pub name: String,
    pub password: Option<String>,
}

/// Update employee payload (partial; absent fields are left untouched)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub id: i64,
    pub username: Option<String>,
    pub name: Option<String>,
}

/// Employee page query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Substring filter on name
    pub name: Option<String>,
}
