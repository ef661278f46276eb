//! Category Repository

use super::RepoResult;
use shared::models::Category;
use shared::page::PageResult;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, kind, name, sort, status, create_time, update_time, create_user, update_user FROM category WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, kind, name, sort, status, create_time, update_time, create_user, update_user FROM category WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn insert(pool: &SqlitePool, category: &Category) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO category (id, kind, name, sort, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(category.id)
    .bind(category.kind)
    .bind(&category.name)
    .bind(category.sort)
    .bind(category.status)
    .bind(category.create_time)
    .bind(category.update_time)
    .bind(category.create_user)
    .bind(category.update_user)
    .execute(pool)
    .await?;
    Ok(())
}

/// Partial update: absent fields keep their stored value
pub async fn update_fields(
    pool: &SqlitePool,
    id: i64,
    kind: Option<i32>,
    name: Option<&str>,
    sort: Option<i32>,
    update_time: i64,
    update_user: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE category SET kind = COALESCE(?1, kind), name = COALESCE(?2, name), sort = COALESCE(?3, sort), update_time = ?4, update_user = ?5 WHERE id = ?6",
    )
    .bind(kind)
    .bind(name)
    .bind(sort)
    .bind(update_time)
    .bind(update_user)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected())
}

/// Minimal update touching only the status column
pub async fn update_status(pool: &SqlitePool, status: i32, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE category SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// Paged query with optional name-substring and kind filters.
/// `total` counts the filtered set, not the whole table.
pub async fn page(
    pool: &SqlitePool,
    name: Option<&str>,
    kind: Option<i32>,
    limit: i64,
    offset: i64,
) -> RepoResult<PageResult<Category>> {
    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM category WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%') AND (?2 IS NULL OR kind = ?2)",
    )
    .bind(name)
    .bind(kind)
    .fetch_one(pool)
    .await?;

    let records = sqlx::query_as::<_, Category>(
        "SELECT id, kind, name, sort, status, create_time, update_time, create_user, update_user FROM category WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%') AND (?2 IS NULL OR kind = ?2) ORDER BY sort ASC, create_time DESC LIMIT ?3 OFFSET ?4",
    )
    .bind(name)
    .bind(kind)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PageResult::new(total, records))
}

/// All categories of a kind; `None` returns every category
pub async fn list_by_kind(pool: &SqlitePool, kind: Option<i32>) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, kind, name, sort, status, create_time, update_time, create_user, update_user FROM category WHERE (?1 IS NULL OR kind = ?1) ORDER BY sort ASC, create_time DESC",
    )
    .bind(kind)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}
