//! Dish Repository

use super::RepoResult;
use shared::models::{Dish, status};
use shared::page::PageResult;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Dish>> {
    let dish = sqlx::query_as::<_, Dish>(
        "SELECT id, category_id, name, price, image, description, status, create_time, update_time, create_user, update_user FROM dish WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(dish)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Dish>> {
    let dish = sqlx::query_as::<_, Dish>(
        "SELECT id, category_id, name, price, image, description, status, create_time, update_time, create_user, update_user FROM dish WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(dish)
}

/// Number of dishes referencing a category
pub async fn count_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dish WHERE category_id = ?")
        .bind(category_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Number of setmeal_dish rows referencing a dish
pub async fn count_setmeal_refs(pool: &SqlitePool, dish_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM setmeal_dish WHERE dish_id = ?")
        .bind(dish_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn insert(pool: &SqlitePool, dish: &Dish) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO dish (id, category_id, name, price, image, description, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(dish.id)
    .bind(dish.category_id)
    .bind(&dish.name)
    .bind(dish.price)
    .bind(&dish.image)
    .bind(&dish.description)
    .bind(dish.status)
    .bind(dish.create_time)
    .bind(dish.update_time)
    .bind(dish.create_user)
    .bind(dish.update_user)
    .execute(pool)
    .await?;
    Ok(())
}

/// Partial update: absent fields keep their stored value
#[allow(clippy::too_many_arguments)]
pub async fn update_fields(
    pool: &SqlitePool,
    id: i64,
    category_id: Option<i64>,
    name: Option<&str>,
    price: Option<i64>,
    image: Option<&str>,
    description: Option<&str>,
    update_time: i64,
    update_user: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE dish SET category_id = COALESCE(?1, category_id), name = COALESCE(?2, name), price = COALESCE(?3, price), image = COALESCE(?4, image), description = COALESCE(?5, description), update_time = ?6, update_user = ?7 WHERE id = ?8",
    )
    .bind(category_id)
    .bind(name)
    .bind(price)
    .bind(image)
    .bind(description)
    .bind(update_time)
    .bind(update_user)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected())
}

/// Minimal update touching only the status column
pub async fn update_status(pool: &SqlitePool, dish_status: i32, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE dish SET status = ? WHERE id = ?")
        .bind(dish_status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM dish WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// Paged query with optional name-substring, category and status filters
pub async fn page(
    pool: &SqlitePool,
    name: Option<&str>,
    category_id: Option<i64>,
    dish_status: Option<i32>,
    limit: i64,
    offset: i64,
) -> RepoResult<PageResult<Dish>> {
    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM dish WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%') AND (?2 IS NULL OR category_id = ?2) AND (?3 IS NULL OR status = ?3)",
    )
    .bind(name)
    .bind(category_id)
    .bind(dish_status)
    .fetch_one(pool)
    .await?;

    let records = sqlx::query_as::<_, Dish>(
        "SELECT id, category_id, name, price, image, description, status, create_time, update_time, create_user, update_user FROM dish WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%') AND (?2 IS NULL OR category_id = ?2) AND (?3 IS NULL OR status = ?3) ORDER BY create_time DESC LIMIT ?4 OFFSET ?5",
    )
    .bind(name)
    .bind(category_id)
    .bind(dish_status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PageResult::new(total, records))
}

/// Enabled dishes of a category
pub async fn list_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<Vec<Dish>> {
    let dishes = sqlx::query_as::<_, Dish>(
        "SELECT id, category_id, name, price, image, description, status, create_time, update_time, create_user, update_user FROM dish WHERE category_id = ? AND status = ? ORDER BY create_time DESC",
    )
    .bind(category_id)
    .bind(status::ENABLED)
    .fetch_all(pool)
    .await?;
    Ok(dishes)
}
