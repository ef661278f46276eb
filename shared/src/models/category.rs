//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `kind` is serialized as `type` on the wire: 1 = dish category,
/// 2 = set-meal category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub name: String,
    pub sort: i32,
    pub status: i32,
    pub create_time: i64,
    pub update_time: i64,
    pub create_user: i64,
    pub update_user: i64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(rename = "type")]
    pub kind: i32,
    pub name: String,
    pub sort: Option<i32>,
}

/// Update category payload (partial; absent fields are left untouched)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<i32>,
    pub name: Option<String>,
    pub sort: Option<i32>,
}

/// Category page query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Substring filter on name
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<i32>,
}
