//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish entity
///
/// `price` is integer cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub price: i64,
    pub image: Option<String>,
    pub description: Option<String>,
    pub status: i32,
    pub create_time: i64,
    pub update_time: i64,
    pub create_user: i64,
    pub update_user: i64,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub category_id: i64,
    pub name: String,
    pub price: i64,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Update dish payload (partial; absent fields are left untouched)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishUpdate {
    pub id: i64,
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Dish page query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishPageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Substring filter on name
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<i32>,
}
