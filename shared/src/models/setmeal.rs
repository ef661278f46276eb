//! Set-meal Model

use serde::{Deserialize, Serialize};

/// Set-meal entity
///
/// `price` is integer cents. The bundled dishes live in the
/// `setmeal_dish` junction and are populated by application code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Setmeal {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub status: i32,
    pub create_time: i64,
    pub update_time: i64,
    pub create_user: i64,
    pub update_user: i64,
}

/// One bundled dish inside a set-meal
///
/// `name` and `price` are a snapshot taken when the bundle is written,
/// so renaming or repricing a dish later does not change sold bundles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SetmealDish {
    pub id: i64,
    pub setmeal_id: i64,
    pub dish_id: i64,
    pub name: String,
    pub price: i64,
    pub copies: i32,
}

/// Set-meal with its bundled dishes (API read model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetmealDetail {
    #[serde(flatten)]
    pub setmeal: Setmeal,
    pub dishes: Vec<SetmealDish>,
}

/// One bundle entry in a create/update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetmealDishItem {
    pub dish_id: i64,
    pub copies: i32,
}

/// Create set-meal payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetmealCreate {
    pub category_id: i64,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    #[serde(default)]
    pub dishes: Vec<SetmealDishItem>,
}

/// Update set-meal payload (partial; `dishes`, when present, replaces
/// the whole bundle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetmealUpdate {
    pub id: i64,
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub dishes: Option<Vec<SetmealDishItem>>,
}

/// Set-meal page query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetmealPageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Substring filter on name
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<i32>,
}
