//! Shared helpers for repository and service tests

use shared::models::status;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory SQLite pool with the real migrations applied
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub async fn seed_category(pool: &SqlitePool, id: i64, kind: i32, name: &str, sort: i32) {
    sqlx::query(
        "INSERT INTO category (id, kind, name, sort, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, ?, ?, 100, 100, 1, 1)",
    )
    .bind(id)
    .bind(kind)
    .bind(name)
    .bind(sort)
    .bind(status::DISABLED)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_employee(pool: &SqlitePool, id: i64, username: &str, password_hash: &str) {
    sqlx::query(
        "INSERT INTO employee (id, username, name, password, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, ?, ?, 100, 100, 1, 1)",
    )
    .bind(id)
    .bind(username)
    .bind(username)
    .bind(password_hash)
    .bind(status::ENABLED)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_dish(pool: &SqlitePool, id: i64, category_id: i64, name: &str, dish_status: i32) {
    sqlx::query(
        "INSERT INTO dish (id, category_id, name, price, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, 500, ?, 100, 100, 1, 1)",
    )
    .bind(id)
    .bind(category_id)
    .bind(name)
    .bind(dish_status)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_setmeal(
    pool: &SqlitePool,
    id: i64,
    category_id: i64,
    name: &str,
    setmeal_status: i32,
) {
    sqlx::query(
        "INSERT INTO setmeal (id, category_id, name, price, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, 1500, ?, 100, 100, 1, 1)",
    )
    .bind(id)
    .bind(category_id)
    .bind(name)
    .bind(setmeal_status)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_setmeal_dish(pool: &SqlitePool, id: i64, setmeal_id: i64, dish_id: i64) {
    sqlx::query(
        "INSERT INTO setmeal_dish (id, setmeal_id, dish_id, name, price, copies) VALUES (?, ?, ?, 'bundled', 500, 1)",
    )
    .bind(id)
    .bind(setmeal_id)
    .bind(dish_id)
    .execute(pool)
    .await
    .unwrap();
}
