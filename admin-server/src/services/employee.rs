//! Employee Domain Service

use crate::db::repository;
use shared::client::LoginRequest;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeePageQuery, EmployeeUpdate, status};
use shared::page::{PageResult, to_limit_offset};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

/// Hash a password with argon2 (PHC string output)
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify a password against an argon2 PHC hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHash, PasswordVerifier},
    };

    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Authenticate an employee by username and password
///
/// Failure order: account not found, account disabled, password mismatch.
/// The caller mints the session token from the returned record.
pub async fn login(pool: &SqlitePool, credentials: &LoginRequest) -> AppResult<Employee> {
    let employee = repository::employee::find_by_username(pool, &credentials.username)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AccountNotFound))?;

    if employee.status == status::DISABLED {
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let password_valid = verify_password(&credentials.password, &employee.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        tracing::warn!(username = %credentials.username, "Login failed - password mismatch");
        return Err(AppError::new(ErrorCode::PasswordMismatch));
    }

    tracing::info!(
        employee_id = employee.id,
        username = %employee.username,
        "Employee logged in"
    );
    Ok(employee)
}

/// Create an employee
///
/// New accounts are enabled; when no password is supplied the configured
/// default password is hashed and stored.
pub async fn add(
    pool: &SqlitePool,
    actor_id: i64,
    data: EmployeeCreate,
    default_password: &str,
) -> AppResult<Employee> {
    if repository::employee::find_by_username(pool, &data.username)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmployeeUsernameExists));
    }

    let plaintext = data.password.as_deref().unwrap_or(default_password);
    let password = hash_password(plaintext)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    let now = now_millis();
    let employee = Employee {
        id: snowflake_id(),
        username: data.username,
        name: data.name,
        password,
        status: status::ENABLED,
        create_time: now,
        update_time: now,
        create_user: actor_id,
        update_user: actor_id,
    };

    repository::employee::insert(pool, &employee).await?;
    tracing::info!(
        employee_id = employee.id,
        username = %employee.username,
        "Employee created"
    );
    Ok(employee)
}

/// Partial update; fields absent in the payload are left untouched
pub async fn update(pool: &SqlitePool, actor_id: i64, data: EmployeeUpdate) -> AppResult<Employee> {
    let existing = repository::employee::find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    if let Some(ref new_username) = data.username
        && new_username != &existing.username
        && repository::employee::find_by_username(pool, new_username)
            .await?
            .is_some()
    {
        return Err(AppError::new(ErrorCode::EmployeeUsernameExists));
    }

    repository::employee::update_fields(
        pool,
        data.id,
        data.username.as_deref(),
        data.name.as_deref(),
        now_millis(),
        actor_id,
    )
    .await?;

    repository::employee::find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))
}

/// Enable or disable an account; touches only the status column
pub async fn update_status(pool: &SqlitePool, status_value: i32, id: i64) -> AppResult<()> {
    if !status::is_valid(status_value) {
        return Err(AppError::validation(format!(
            "Invalid status value: {status_value}"
        )));
    }

    let rows = repository::employee::update_status(pool, status_value, id).await?;
    if rows == 0 {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }
    Ok(())
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> AppResult<Employee> {
    repository::employee::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))
}

/// Paged query with a name-substring filter
pub async fn page(pool: &SqlitePool, query: EmployeePageQuery) -> AppResult<PageResult<Employee>> {
    let (limit, offset) = to_limit_offset(query.page, query.page_size);
    let result = repository::employee::page(pool, query.name.as_deref(), limit, offset).await?;
    Ok(result)
}

/// Change the acting employee's own password
///
/// The target id is always the authenticated actor's; the old password
/// must verify before the new one is stored.
pub async fn edit_password(
    pool: &SqlitePool,
    actor_id: i64,
    old_password: &str,
    new_password: &str,
) -> AppResult<()> {
    let employee = repository::employee::find_by_id(pool, actor_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    let old_valid = verify_password(old_password, &employee.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !old_valid {
        return Err(AppError::new(ErrorCode::PasswordMismatch));
    }

    let password = hash_password(new_password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    repository::employee::update_password(pool, actor_id, &password, now_millis(), actor_id)
        .await?;
    tracing::info!(employee_id = actor_id, "Password changed");
    Ok(())
}

/// Seed the initial admin account when the employee table is empty
///
/// Runs at startup so a fresh database is immediately usable.
pub async fn seed_default_admin(pool: &SqlitePool, default_password: &str) -> AppResult<()> {
    if repository::employee::count_all(pool).await? > 0 {
        return Ok(());
    }

    let password = hash_password(default_password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    let now = now_millis();
    let admin = Employee {
        id: snowflake_id(),
        username: "admin".to_string(),
        name: "Administrator".to_string(),
        password,
        status: status::ENABLED,
        create_time: now,
        update_time: now,
        create_user: 0,
        update_user: 0,
    };

    repository::employee::insert(pool, &admin).await?;
    tracing::info!(employee_id = admin.id, "Default admin account created");
    Ok(())
}
