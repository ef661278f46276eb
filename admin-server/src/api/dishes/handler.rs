//! Dish API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services;
use shared::error::{ApiResponse, AppResult};
use shared::models::{Dish, DishCreate, DishPageQuery, DishUpdate};
use shared::page::PageResult;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category_id: i64,
}

/// POST /admin/dish - create a dish (stored off sale)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<DishCreate>,
) -> AppResult<ApiResponse<Dish>> {
    let dish = services::dish::add(&state.pool, user.id, payload).await?;
    Ok(ApiResponse::success(dish))
}

/// PUT /admin/dish - partial update
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<DishUpdate>,
) -> AppResult<ApiResponse<Dish>> {
    let dish = services::dish::update(&state.pool, user.id, payload).await?;
    Ok(ApiResponse::success(dish))
}

/// DELETE /admin/dish?id= - delete when off sale and unbundled
pub async fn remove(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> AppResult<ApiResponse<()>> {
    services::dish::delete(&state.pool, query.id).await?;
    Ok(ApiResponse::ok())
}

/// GET /admin/dish/page - paged query with name/category/status filters
pub async fn page(
    State(state): State<ServerState>,
    Query(query): Query<DishPageQuery>,
) -> AppResult<ApiResponse<PageResult<Dish>>> {
    let result = services::dish::page(&state.pool, query).await?;
    Ok(ApiResponse::success(result))
}

/// POST /admin/dish/status/{status}?id= - put on or off sale
pub async fn update_status(
    State(state): State<ServerState>,
    Path(status): Path<i32>,
    Query(query): Query<IdQuery>,
) -> AppResult<ApiResponse<()>> {
    services::dish::update_status(&state.pool, status, query.id).await?;
    Ok(ApiResponse::ok())
}

/// GET /admin/dish/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Dish>> {
    let dish = services::dish::get_by_id(&state.pool, id).await?;
    Ok(ApiResponse::success(dish))
}

/// GET /admin/dish/list?category_id= - enabled dishes of a category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<ApiResponse<Vec<Dish>>> {
    let dishes = services::dish::list_by_category(&state.pool, query.category_id).await?;
    Ok(ApiResponse::success(dishes))
}
