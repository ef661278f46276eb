//! Category Domain Service

use crate::db::repository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryPageQuery, CategoryUpdate, status};
use shared::page::{PageResult, to_limit_offset};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

/// Create a category
///
/// New categories are always disabled; the caller enables them explicitly
/// via [`update_status`].
pub async fn add(pool: &SqlitePool, actor_id: i64, data: CategoryCreate) -> AppResult<Category> {
    if repository::category::find_by_name(pool, &data.name)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::CategoryNameExists));
    }

    let now = now_millis();
    let category = Category {
        id: snowflake_id(),
        kind: data.kind,
        name: data.name,
        sort: data.sort.unwrap_or(0),
        status: status::DISABLED,
        create_time: now,
        update_time: now,
        create_user: actor_id,
        update_user: actor_id,
    };

    repository::category::insert(pool, &category).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");
    Ok(category)
}

/// Partial update; fields absent in the payload are left untouched
pub async fn update(pool: &SqlitePool, actor_id: i64, data: CategoryUpdate) -> AppResult<Category> {
    let existing = repository::category::find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && repository::category::find_by_name(pool, new_name)
            .await?
            .is_some()
    {
        return Err(AppError::new(ErrorCode::CategoryNameExists));
    }

    repository::category::update_fields(
        pool,
        data.id,
        data.kind,
        data.name.as_deref(),
        data.sort,
        now_millis(),
        actor_id,
    )
    .await?;

    repository::category::find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))
}

/// Delete a category
///
/// Refused while any dish references the category (checked first), then
/// while any set-meal references it.
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
    repository::category::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;

    if repository::dish::count_by_category(pool, id).await? > 0 {
        return Err(AppError::new(ErrorCode::CategoryHasDishes));
    }
    if repository::setmeal::count_by_category(pool, id).await? > 0 {
        return Err(AppError::new(ErrorCode::CategoryHasSetmeals));
    }

    repository::category::delete(pool, id).await?;
    tracing::info!(category_id = id, "Category deleted");
    Ok(())
}

/// Paged query with name-substring and kind filters
pub async fn page(pool: &SqlitePool, query: CategoryPageQuery) -> AppResult<PageResult<Category>> {
    let (limit, offset) = to_limit_offset(query.page, query.page_size);
    let result =
        repository::category::page(pool, query.name.as_deref(), query.kind, limit, offset).await?;
    Ok(result)
}

/// Enable or disable a category; touches only the status column
pub async fn update_status(pool: &SqlitePool, status_value: i32, id: i64) -> AppResult<()> {
    if !status::is_valid(status_value) {
        return Err(AppError::validation(format!(
            "Invalid status value: {status_value}"
        )));
    }

    let rows = repository::category::update_status(pool, status_value, id).await?;
    if rows == 0 {
        return Err(AppError::new(ErrorCode::CategoryNotFound));
    }
    Ok(())
}

/// All categories of a kind; `None` returns every category
pub async fn list_by_kind(pool: &SqlitePool, kind: Option<i32>) -> AppResult<Vec<Category>> {
    let categories = repository::category::list_by_kind(pool, kind).await?;
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{
        seed_category, seed_dish, seed_setmeal, seed_setmeal_dish, test_pool,
    };

    const ACTOR: i64 = 77;

    fn create_payload(name: &str) -> CategoryCreate {
        CategoryCreate {
            kind: 1,
            name: name.to_string(),
            sort: Some(1),
        }
    }

    #[tokio::test]
    async fn test_add_forces_disabled_status() {
        let pool = test_pool().await;

        let category = add(&pool, ACTOR, create_payload("Drinks")).await.unwrap();

        assert_eq!(category.status, status::DISABLED);
        assert_eq!(category.create_user, ACTOR);
        assert_eq!(category.update_user, ACTOR);
        assert_eq!(category.create_time, category.update_time);

        // The stored row agrees with the returned value
        let stored = repository::category::find_by_id(&pool, category.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, status::DISABLED);
        assert_eq!(stored.create_user, ACTOR);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_name() {
        let pool = test_pool().await;
        add(&pool, ACTOR, create_payload("Drinks")).await.unwrap();

        let err = add(&pool, ACTOR, create_payload("Drinks"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNameExists);
    }

    #[tokio::test]
    async fn test_update_stamps_and_merges() {
        let pool = test_pool().await;
        let category = add(&pool, ACTOR, create_payload("Drinks")).await.unwrap();

        let updated = update(
            &pool,
            99,
            CategoryUpdate {
                id: category.id,
                kind: None,
                name: Some("Beverages".into()),
                sort: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "Beverages");
        assert_eq!(updated.kind, category.kind);
        assert_eq!(updated.sort, category.sort);
        assert_eq!(updated.update_user, 99);
        assert_eq!(updated.create_user, ACTOR);
        assert!(updated.update_time >= category.update_time);
    }

    #[tokio::test]
    async fn test_update_missing_category() {
        let pool = test_pool().await;
        let err = update(
            &pool,
            ACTOR,
            CategoryUpdate {
                id: 404,
                kind: None,
                name: None,
                sort: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[tokio::test]
    async fn test_delete_with_dish_reference_fails_first() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;
        seed_dish(&pool, 10, 1, "Cola", status::DISABLED).await;
        // Also referenced by a set-meal: the dish error still wins
        seed_setmeal(&pool, 20, 1, "Combo", status::DISABLED).await;
        seed_setmeal_dish(&pool, 30, 20, 10).await;

        let err = delete(&pool, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryHasDishes);
    }

    #[tokio::test]
    async fn test_delete_with_setmeal_reference() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 2, "Combos", 1).await;
        seed_setmeal(&pool, 20, 1, "Lunch combo", status::DISABLED).await;

        let err = delete(&pool, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryHasSetmeals);
    }

    #[tokio::test]
    async fn test_delete_unreferenced_succeeds() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;

        delete(&pool, 1).await.unwrap();
        assert!(
            repository::category::find_by_id(&pool, 1)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        let pool = test_pool().await;
        let err = delete(&pool, 404).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[tokio::test]
    async fn test_page_filters() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Ales", 1).await;
        seed_category(&pool, 2, 2, "All-day combos", 2).await;
        seed_category(&pool, 3, 1, "Desserts", 3).await;

        let result = page(
            &pool,
            CategoryPageQuery {
                page: Some(1),
                page_size: Some(10),
                name: Some("A".into()),
                kind: Some(1),
            },
        )
        .await
        .unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.records[0].name, "Ales");
    }

    #[tokio::test]
    async fn test_update_status_validates_and_toggles() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;

        update_status(&pool, status::ENABLED, 1).await.unwrap();
        let stored = repository::category::find_by_id(&pool, 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, status::ENABLED);

        let err = update_status(&pool, 7, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = update_status(&pool, status::DISABLED, 404).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[tokio::test]
    async fn test_list_by_kind() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;
        seed_category(&pool, 2, 2, "Combos", 2).await;

        assert_eq!(list_by_kind(&pool, Some(2)).await.unwrap().len(), 1);
        assert_eq!(list_by_kind(&pool, None).await.unwrap().len(), 2);
    }
}
