//! Employee API Handlers
//!
//! Includes login/logout; login is the only route outside the auth guard.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services;
use shared::client::{LoginRequest, LoginResponse, PasswordEditRequest, UserInfo};
use shared::error::{ApiResponse, AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeePageQuery, EmployeeUpdate};
use shared::page::PageResult;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

/// POST /admin/employee/login - authenticate and mint a session token
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let employee = services::employee::login(&state.pool, &payload).await?;

    let token = state
        .jwt_service
        .generate_token(employee.id, &employee.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    Ok(ApiResponse::success(LoginResponse {
        token,
        user: UserInfo {
            id: employee.id,
            username: employee.username,
            name: employee.name,
        },
    }))
}

/// POST /admin/employee/logout
///
/// Tokens are stateless; logout is an audit event, the client drops the
/// token.
pub async fn logout(user: CurrentUser) -> AppResult<ApiResponse<()>> {
    tracing::info!(employee_id = user.id, username = %user.username, "Employee logged out");
    Ok(ApiResponse::ok())
}

/// POST /admin/employee - create an employee
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<ApiResponse<Employee>> {
    let employee = services::employee::add(
        &state.pool,
        user.id,
        payload,
        &state.config.default_password,
    )
    .await?;
    Ok(ApiResponse::success(employee))
}

/// GET /admin/employee/page - paged query with name filter
pub async fn page(
    State(state): State<ServerState>,
    Query(query): Query<EmployeePageQuery>,
) -> AppResult<ApiResponse<PageResult<Employee>>> {
    let result = services::employee::page(&state.pool, query).await?;
    Ok(ApiResponse::success(result))
}

/// POST /admin/employee/status/{status}?id= - enable or disable an account
pub async fn update_status(
    State(state): State<ServerState>,
    Path(status): Path<i32>,
    Query(query): Query<IdQuery>,
) -> AppResult<ApiResponse<()>> {
    services::employee::update_status(&state.pool, status, query.id).await?;
    Ok(ApiResponse::ok())
}

/// GET /admin/employee/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Employee>> {
    let employee = services::employee::get_by_id(&state.pool, id).await?;
    Ok(ApiResponse::success(employee))
}

/// PUT /admin/employee - partial update
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<ApiResponse<Employee>> {
    let employee = services::employee::update(&state.pool, user.id, payload).await?;
    Ok(ApiResponse::success(employee))
}

/// PUT /admin/employee/editPassword - change own password
///
/// The target is always the authenticated employee; any `emp_id` in the
/// body is discarded so one account cannot rewrite another's password.
pub async fn edit_password(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PasswordEditRequest>,
) -> AppResult<ApiResponse<()>> {
    services::employee::edit_password(
        &state.pool,
        user.id,
        &payload.old_password,
        &payload.new_password,
    )
    .await?;
    Ok(ApiResponse::ok())
}
