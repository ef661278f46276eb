//! Employee Repository

use super::RepoResult;
use shared::models::Employee;
use shared::page::PageResult;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, username, name, password, status, create_time, update_time, create_user, update_user FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, username, name, password, status, create_time, update_time, create_user, update_user FROM employee WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn count_all(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn insert(pool: &SqlitePool, employee: &Employee) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO employee (id, username, name, password, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(employee.id)
    .bind(&employee.username)
    .bind(&employee.name)
    .bind(&employee.password)
    .bind(employee.status)
    .bind(employee.create_time)
    .bind(employee.update_time)
    .bind(employee.create_user)
    .bind(employee.update_user)
    .execute(pool)
    .await?;
    Ok(())
}

/// Partial update: absent fields keep their stored value
pub async fn update_fields(
    pool: &SqlitePool,
    id: i64,
    username: Option<&str>,
    name: Option<&str>,
    update_time: i64,
    update_user: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE employee SET username = COALESCE(?1, username), name = COALESCE(?2, name), update_time = ?3, update_user = ?4 WHERE id = ?5",
    )
    .bind(username)
    .bind(name)
    .bind(update_time)
    .bind(update_user)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected())
}

/// Minimal update touching only the status column
pub async fn update_status(pool: &SqlitePool, status: i32, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE employee SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn update_password(
    pool: &SqlitePool,
    id: i64,
    password_hash: &str,
    update_time: i64,
    update_user: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE employee SET password = ?1, update_time = ?2, update_user = ?3 WHERE id = ?4",
    )
    .bind(password_hash)
    .bind(update_time)
    .bind(update_user)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected())
}

/// Paged query with an optional name-substring filter
pub async fn page(
    pool: &SqlitePool,
    name: Option<&str>,
    limit: i64,
    offset: i64,
) -> RepoResult<PageResult<Employee>> {
    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM employee WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%')",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    let records = sqlx::query_as::<_, Employee>(
        "SELECT id, username, name, password, status, create_time, update_time, create_user, update_user FROM employee WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%') ORDER BY create_time DESC LIMIT ?2 OFFSET ?3",
    )
    .bind(name)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PageResult::new(total, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{seed_employee, test_pool};
    use shared::models::status;

    #[tokio::test]
    async fn test_find_by_username() {
        let pool = test_pool().await;
        seed_employee(&pool, 1, "alice", "hash-a").await;
        seed_employee(&pool, 2, "bob", "hash-b").await;

        let alice = find_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(alice.password, "hash-a");
        assert!(find_by_username(&pool, "carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_all() {
        let pool = test_pool().await;
        assert_eq!(count_all(&pool).await.unwrap(), 0);
        seed_employee(&pool, 1, "alice", "hash").await;
        assert_eq!(count_all(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_fields_partial() {
        let pool = test_pool().await;
        seed_employee(&pool, 1, "alice", "hash").await;

        update_fields(&pool, 1, None, Some("Alice Cooper"), 555, 9)
            .await
            .unwrap();

        let updated = find_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.name, "Alice Cooper");
        assert_eq!(updated.update_time, 555);
        assert_eq!(updated.update_user, 9);
    }

    #[tokio::test]
    async fn test_update_password_keeps_other_fields() {
        let pool = test_pool().await;
        seed_employee(&pool, 1, "alice", "old-hash").await;

        update_password(&pool, 1, "new-hash", 777, 1).await.unwrap();

        let updated = find_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(updated.password, "new-hash");
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.update_time, 777);
    }

    #[tokio::test]
    async fn test_update_status() {
        let pool = test_pool().await;
        seed_employee(&pool, 1, "alice", "hash").await;

        update_status(&pool, status::DISABLED, 1).await.unwrap();
        let updated = find_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(updated.status, status::DISABLED);
    }

    #[tokio::test]
    async fn test_page_name_filter() {
        let pool = test_pool().await;
        seed_employee(&pool, 1, "alice", "hash").await;
        seed_employee(&pool, 2, "alina", "hash").await;
        seed_employee(&pool, 3, "bob", "hash").await;

        let result = page(&pool, Some("ali"), 10, 0).await.unwrap();
        assert_eq!(result.total, 2);

        let all = page(&pool, None, 10, 0).await.unwrap();
        assert_eq!(all.total, 3);
    }
}
