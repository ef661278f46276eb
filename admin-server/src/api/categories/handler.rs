//! Category API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services;
use shared::error::{ApiResponse, AppResult};
use shared::models::{Category, CategoryCreate, CategoryPageQuery, CategoryUpdate};
use shared::page::PageResult;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct KindQuery {
    #[serde(rename = "type")]
    pub kind: Option<i32>,
}

/// POST /admin/category - create a category (stored disabled)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<ApiResponse<Category>> {
    let category = services::category::add(&state.pool, user.id, payload).await?;
    Ok(ApiResponse::success(category))
}

/// PUT /admin/category - partial update
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<ApiResponse<Category>> {
    let category = services::category::update(&state.pool, user.id, payload).await?;
    Ok(ApiResponse::success(category))
}

/// DELETE /admin/category?id= - delete when unreferenced
pub async fn remove(
    State(state): State<ServerState>,
    Query(query): Query<IdQuery>,
) -> AppResult<ApiResponse<()>> {
    services::category::delete(&state.pool, query.id).await?;
    Ok(ApiResponse::ok())
}

/// GET /admin/category/page - paged query with name/type filters
pub async fn page(
    State(state): State<ServerState>,
    Query(query): Query<CategoryPageQuery>,
) -> AppResult<ApiResponse<PageResult<Category>>> {
    let result = services::category::page(&state.pool, query).await?;
    Ok(ApiResponse::success(result))
}

/// POST /admin/category/status/{status}?id= - enable or disable
pub async fn update_status(
    State(state): State<ServerState>,
    Path(status): Path<i32>,
    Query(query): Query<IdQuery>,
) -> AppResult<ApiResponse<()>> {
    services::category::update_status(&state.pool, status, query.id).await?;
    Ok(ApiResponse::ok())
}

/// GET /admin/category/list?type= - all categories of a type
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<KindQuery>,
) -> AppResult<ApiResponse<Vec<Category>>> {
    let categories = services::category::list_by_kind(&state.pool, query.kind).await?;
    Ok(ApiResponse::success(categories))
}
