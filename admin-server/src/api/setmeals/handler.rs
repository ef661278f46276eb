//! Set-meal API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services;
use shared::error::{ApiResponse, AppResult};
use shared::models::{Setmeal, SetmealCreate, SetmealDetail, SetmealPageQuery, SetmealUpdate};
use shared::page::PageResult;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category_id: i64,
}

/// POST /admin/setmeal - create a set-meal with its bundle (stored off sale)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<SetmealCreate>,
) -> AppResult<ApiResponse<SetmealDetail>> {
    let detail = services::setmeal::add(&state.pool, user.id, payload).await?;
    Ok(ApiResponse::success(detail))
}

/// PUT /admin/setmeal - partial update; `dishes` replaces the bundle
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<SetmealUpdate>,
) -> AppResult<ApiResponse<SetmealDetail>> {
    let detail = services::setmeal::update(&state.pool, user.id, payload).await?;
    Ok(ApiResponse::success(detail))
}

/// DELETE /admin/setmeal?id= - delete when off sale
pub async fn remove(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> AppResult<ApiResponse<()>> {
    services::setmeal::delete(&state.pool, query.id).await?;
    Ok(ApiResponse::ok())
}

/// GET /admin/setmeal/page - paged query with name/category/status filters
pub async fn page(
    State(state): State<ServerState>,
    Query(query): Query<SetmealPageQuery>,
) -> AppResult<ApiResponse<PageResult<Setmeal>>> {
    let result = services::setmeal::page(&state.pool, query).await?;
    Ok(ApiResponse::success(result))
}

/// POST /admin/setmeal/status/{status}?id= - put on or off sale
///
/// Enabling fails while the bundle contains a disabled dish.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(status): Path<i32>,
    Query(query): Query<IdQuery>,
) -> AppResult<ApiResponse<()>> {
    services::setmeal::update_status(&state.pool, status, query.id).await?;
    Ok(ApiResponse::ok())
}

/// GET /admin/setmeal/{id} - set-meal with its bundled dishes
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<SetmealDetail>> {
    let detail = services::setmeal::get_detail(&state.pool, id).await?;
    Ok(ApiResponse::success(detail))
}

/// GET /admin/setmeal/list?category_id= - enabled set-meals of a category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<ApiResponse<Vec<Setmeal>>> {
    let setmeals = services::setmeal::list_by_category(&state.pool, query.category_id).await?;
    Ok(ApiResponse::success(setmeals))
}
