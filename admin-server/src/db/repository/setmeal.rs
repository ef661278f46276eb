//! Set-meal Repository
//!
//! The bundled-dish snapshot rows (`setmeal_dish`) are written together
//! with the set-meal inside one transaction.

use super::RepoResult;
use shared::models::{Setmeal, SetmealDish, status};
use shared::page::PageResult;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Setmeal>> {
    let setmeal = sqlx::query_as::<_, Setmeal>(
        "SELECT id, category_id, name, price, description, status, create_time, update_time, create_user, update_user FROM setmeal WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(setmeal)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Setmeal>> {
    let setmeal = sqlx::query_as::<_, Setmeal>(
        "SELECT id, category_id, name, price, description, status, create_time, update_time, create_user, update_user FROM setmeal WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(setmeal)
}

/// Number of set-meals referencing a category
pub async fn count_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM setmeal WHERE category_id = ?")
        .bind(category_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Bundled dishes of a set-meal
pub async fn find_dishes(pool: &SqlitePool, setmeal_id: i64) -> RepoResult<Vec<SetmealDish>> {
    let dishes = sqlx::query_as::<_, SetmealDish>(
        "SELECT id, setmeal_id, dish_id, name, price, copies FROM setmeal_dish WHERE setmeal_id = ? ORDER BY id",
    )
    .bind(setmeal_id)
    .fetch_all(pool)
    .await?;
    Ok(dishes)
}

/// Number of bundled dishes whose underlying dish is currently disabled
pub async fn count_disabled_dishes(pool: &SqlitePool, setmeal_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM setmeal_dish sd JOIN dish d ON d.id = sd.dish_id WHERE sd.setmeal_id = ? AND d.status = ?",
    )
    .bind(setmeal_id)
    .bind(status::DISABLED)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Insert a set-meal and its bundle snapshot in one transaction
pub async fn insert_with_dishes(
    pool: &SqlitePool,
    setmeal: &Setmeal,
    dishes: &[SetmealDish],
) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO setmeal (id, category_id, name, price, description, status, create_time, update_time, create_user, update_user) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(setmeal.id)
    .bind(setmeal.category_id)
    .bind(&setmeal.name)
    .bind(setmeal.price)
    .bind(&setmeal.description)
    .bind(setmeal.status)
    .bind(setmeal.create_time)
    .bind(setmeal.update_time)
    .bind(setmeal.create_user)
    .bind(setmeal.update_user)
    .execute(&mut *tx)
    .await?;

    for dish in dishes {
        sqlx::query(
            "INSERT INTO setmeal_dish (id, setmeal_id, dish_id, name, price, copies) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(dish.id)
        .bind(dish.setmeal_id)
        .bind(dish.dish_id)
        .bind(&dish.name)
        .bind(dish.price)
        .bind(dish.copies)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Replace the whole bundle of a set-meal in one transaction
pub async fn replace_dishes(
    pool: &SqlitePool,
    setmeal_id: i64,
    dishes: &[SetmealDish],
) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM setmeal_dish WHERE setmeal_id = ?")
        .bind(setmeal_id)
        .execute(&mut *tx)
        .await?;

    for dish in dishes {
        sqlx::query(
            "INSERT INTO setmeal_dish (id, setmeal_id, dish_id, name, price, copies) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(dish.id)
        .bind(dish.setmeal_id)
        .bind(dish.dish_id)
        .bind(&dish.name)
        .bind(dish.price)
        .bind(dish.copies)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Partial update: absent fields keep their stored value
pub async fn update_fields(
    pool: &SqlitePool,
    id: i64,
    category_id: Option<i64>,
    name: Option<&str>,
    price: Option<i64>,
    description: Option<&str>,
    update_time: i64,
    update_user: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE setmeal SET category_id = COALESCE(?1, category_id), name = COALESCE(?2, name), price = COALESCE(?3, price), description = COALESCE(?4, description), update_time = ?5, update_user = ?6 WHERE id = ?7",
    )
    .bind(category_id)
    .bind(name)
    .bind(price)
    .bind(description)
    .bind(update_time)
    .bind(update_user)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected())
}

/// Minimal update touching only the status column
pub async fn update_status(pool: &SqlitePool, setmeal_status: i32, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE setmeal SET status = ? WHERE id = ?")
        .bind(setmeal_status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// Delete a set-meal; the bundle rows go with it (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM setmeal WHERE id = ?")
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
    setmeal_status: Option<i32>,
    limit: i64,
    offset: i64,
) -> RepoResult<PageResult<Setmeal>> {
    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM setmeal WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%') AND (?2 IS NULL OR category_id = ?2) AND (?3 IS NULL OR status = ?3)",
    )
    .bind(name)
    .bind(category_id)
    .bind(setmeal_status)
    .fetch_one(pool)
    .await?;

    let records = sqlx::query_as::<_, Setmeal>(
        "SELECT id, category_id, name, price, description, status, create_time, update_time, create_user, update_user FROM setmeal WHERE (?1 IS NULL OR name LIKE '%' || ?1 || '%') AND (?2 IS NULL OR category_id = ?2) AND (?3 IS NULL OR status = ?3) ORDER BY create_time DESC LIMIT ?4 OFFSET ?5",
    )
    .bind(name)
    .bind(category_id)
    .bind(setmeal_status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PageResult::new(total, records))
}

/// Enabled set-meals of a category
pub async fn list_by_category(pool: &SqlitePool, category_id: i64) -> RepoResult<Vec<Setmeal>> {
    let setmeals = sqlx::query_as::<_, Setmeal>(
        "SELECT id, category_id, name, price, description, status, create_time, update_time, create_user, update_user FROM setmeal WHERE category_id = ? AND status = ? ORDER BY create_time DESC",
    )
    .bind(category_id)
    .bind(status::ENABLED)
    .fetch_all(pool)
    .await?;
    Ok(setmeals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{
        seed_category, seed_dish, seed_setmeal, seed_setmeal_dish, test_pool,
    };

    fn bundle_row(id: i64, setmeal_id: i64, dish_id: i64, copies: i32) -> SetmealDish {
        SetmealDish {
            id,
            setmeal_id,
            dish_id,
            name: format!("dish-{dish_id}"),
            price: 500,
            copies,
        }
    }

    #[tokio::test]
    async fn test_insert_with_dishes_is_atomic() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 2, "Combos", 1).await;
        seed_dish(&pool, 10, 1, "Cola", status::ENABLED).await;

        let setmeal = Setmeal {
            id: 20,
            category_id: 1,
            name: "Lunch combo".into(),
            price: 1500,
            description: None,
            status: status::DISABLED,
            create_time: 100,
            update_time: 100,
            create_user: 1,
            update_user: 1,
        };
        let dishes = vec![bundle_row(30, 20, 10, 2)];

        insert_with_dishes(&pool, &setmeal, &dishes).await.unwrap();

        let stored = find_by_id(&pool, 20).await.unwrap().unwrap();
        assert_eq!(stored.name, "Lunch combo");

        let bundle = find_dishes(&pool, 20).await.unwrap();
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle[0].dish_id, 10);
        assert_eq!(bundle[0].copies, 2);
    }

    #[tokio::test]
    async fn test_replace_dishes() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 2, "Combos", 1).await;
        seed_dish(&pool, 10, 1, "Cola", status::ENABLED).await;
        seed_dish(&pool, 11, 1, "Tea", status::ENABLED).await;
        seed_setmeal(&pool, 20, 1, "Lunch combo", status::DISABLED).await;
        seed_setmeal_dish(&pool, 30, 20, 10).await;

        replace_dishes(&pool, 20, &[bundle_row(31, 20, 11, 1)])
            .await
            .unwrap();

        let bundle = find_dishes(&pool, 20).await.unwrap();
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle[0].dish_id, 11);
    }

    #[tokio::test]
    async fn test_count_disabled_dishes() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 2, "Combos", 1).await;
        seed_dish(&pool, 10, 1, "Cola", status::ENABLED).await;
        seed_dish(&pool, 11, 1, "Tea", status::DISABLED).await;
        seed_setmeal(&pool, 20, 1, "Lunch combo", status::DISABLED).await;
        seed_setmeal_dish(&pool, 30, 20, 10).await;
        seed_setmeal_dish(&pool, 31, 20, 11).await;

        assert_eq!(count_disabled_dishes(&pool, 20).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_cascades_bundle() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 2, "Combos", 1).await;
        seed_dish(&pool, 10, 1, "Cola", status::ENABLED).await;
        seed_setmeal(&pool, 20, 1, "Lunch combo", status::DISABLED).await;
        seed_setmeal_dish(&pool, 30, 20, 10).await;

        assert_eq!(delete(&pool, 20).await.unwrap(), 1);
        assert!(find_by_id(&pool, 20).await.unwrap().is_none());
        assert!(find_dishes(&pool, 20).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_page_and_count_by_category() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 2, "Combos", 1).await;
        seed_category(&pool, 2, 2, "Family deals", 2).await;
        seed_setmeal(&pool, 20, 1, "Lunch combo", status::ENABLED).await;
        seed_setmeal(&pool, 21, 1, "Dinner combo", status::DISABLED).await;
        seed_setmeal(&pool, 22, 2, "Family feast", status::ENABLED).await;

        assert_eq!(count_by_category(&pool, 1).await.unwrap(), 2);

        let combos = page(&pool, Some("combo"), None, None, 10, 0).await.unwrap();
        assert_eq!(combos.total, 2);

        let enabled_in_cat1 = page(&pool, None, Some(1), Some(status::ENABLED), 10, 0)
            .await
            .unwrap();
        assert_eq!(enabled_in_cat1.total, 1);
        assert_eq!(enabled_in_cat1.records[0].name, "Lunch combo");
    }
}
