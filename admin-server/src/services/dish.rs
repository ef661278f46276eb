//! Dish Domain Service

use crate::db::repository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Dish, DishCreate, DishPageQuery, DishUpdate, status};
use shared::page::{PageResult, to_limit_offset};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

/// Create a dish
///
/// New dishes are off sale until enabled explicitly.
pub async fn add(pool: &SqlitePool, actor_id: i64, data: DishCreate) -> AppResult<Dish> {
    repository::category::find_by_id(pool, data.category_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;

    if repository::dish::find_by_name(pool, &data.name)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::DishNameExists));
    }

    let now = now_millis();
    let dish = Dish {
        id: snowflake_id(),
        category_id: data.category_id,
        name: data.name,
        price: data.price,
        image: data.image,
        description: data.description,
        status: status::DISABLED,
        create_time: now,
        update_time: now,
        create_user: actor_id,
        update_user: actor_id,
    };

    repository::dish::insert(pool, &dish).await?;
    tracing::info!(dish_id = dish.id, name = %dish.name, "Dish created");
    Ok(dish)
}

/// Partial update; fields absent in the payload are left untouched
pub async fn update(pool: &SqlitePool, actor_id: i64, data: DishUpdate) -> AppResult<Dish> {
    let existing = repository::dish::find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))?;

    if let Some(category_id) = data.category_id
        && repository::category::find_by_id(pool, category_id)
            .await?
            .is_none()
    {
        return Err(AppError::new(ErrorCode::CategoryNotFound));
    }

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && repository::dish::find_by_name(pool, new_name).await?.is_some()
    {
        return Err(AppError::new(ErrorCode::DishNameExists));
    }

    repository::dish::update_fields(
        pool,
        data.id,
        data.category_id,
        data.name.as_deref(),
        data.price,
        data.image.as_deref(),
        data.description.as_deref(),
        now_millis(),
        actor_id,
    )
    .await?;

    repository::dish::find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> AppResult<Dish> {
    repository::dish::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))
}

/// Paged query with name, category and status filters
pub async fn page(pool: &SqlitePool, query: DishPageQuery) -> AppResult<PageResult<Dish>> {
    let (limit, offset) = to_limit_offset(query.page, query.page_size);
    let result = repository::dish::page(
        pool,
        query.name.as_deref(),
        query.category_id,
        query.status,
        limit,
        offset,
    )
    .await?;
    Ok(result)
}

/// Put a dish on or off sale; touches only the status column
pub async fn update_status(pool: &SqlitePool, status_value: i32, id: i64) -> AppResult<()> {
    if !status::is_valid(status_value) {
        return Err(AppError::validation(format!(
            "Invalid status value: {status_value}"
        )));
    }

    let rows = repository::dish::update_status(pool, status_value, id).await?;
    if rows == 0 {
        return Err(AppError::new(ErrorCode::DishNotFound));
    }
    Ok(())
}

/// Delete a dish
///
/// Refused while the dish is on sale or bundled into any set-meal.
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let existing = repository::dish::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))?;

    if existing.status == status::ENABLED {
        return Err(AppError::new(ErrorCode::DishOnSale));
    }
    if repository::dish::count_setmeal_refs(pool, id).await? > 0 {
        return Err(AppError::new(ErrorCode::DishInSetmeal));
    }

    repository::dish::delete(pool, id).await?;
    tracing::info!(dish_id = id, "Dish deleted");
    Ok(())
}

/// Enabled dishes of a category
pub async fn list_by_category(pool: &SqlitePool, category_id: i64) -> AppResult<Vec<Dish>> {
    let dishes = repository::dish::list_by_category(pool, category_id).await?;
    Ok(dishes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{
        seed_category, seed_setmeal, seed_setmeal_dish, test_pool,
    };

    const ACTOR: i64 = 5;

    fn create_payload(category_id: i64, name: &str) -> DishCreate {
        DishCreate {
            category_id,
            name: name.to_string(),
            price: 900,
            image: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_add_forces_disabled_and_stamps() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;

        let dish = add(&pool, ACTOR, create_payload(1, "Cola")).await.unwrap();

        assert_eq!(dish.status, status::DISABLED);
        assert_eq!(dish.create_user, ACTOR);
        assert_eq!(dish.update_user, ACTOR);
    }

    #[tokio::test]
    async fn test_add_requires_existing_category() {
        let pool = test_pool().await;
        let err = add(&pool, ACTOR, create_payload(404, "Cola"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_name() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;
        add(&pool, ACTOR, create_payload(1, "Cola")).await.unwrap();

        let err = add(&pool, ACTOR, create_payload(1, "Cola"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DishNameExists);
    }

    #[tokio::test]
    async fn test_delete_on_sale_fails() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;
        let dish = add(&pool, ACTOR, create_payload(1, "Cola")).await.unwrap();
        update_status(&pool, status::ENABLED, dish.id).await.unwrap();

        let err = delete(&pool, dish.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DishOnSale);
    }

    #[tokio::test]
    async fn test_delete_bundled_dish_fails() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;
        seed_category(&pool, 2, 2, "Combos", 2).await;
        let dish = add(&pool, ACTOR, create_payload(1, "Cola")).await.unwrap();
        seed_setmeal(&pool, 20, 2, "Combo", status::DISABLED).await;
        seed_setmeal_dish(&pool, 30, 20, dish.id).await;

        let err = delete(&pool, dish.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DishInSetmeal);
    }

    #[tokio::test]
    async fn test_delete_unreferenced_succeeds() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;
        let dish = add(&pool, ACTOR, create_payload(1, "Cola")).await.unwrap();

        delete(&pool, dish.id).await.unwrap();
        let err = get_by_id(&pool, dish.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DishNotFound);
    }

    #[tokio::test]
    async fn test_update_rejects_missing_category() {
        let pool = test_pool().await;
        seed_category(&pool, 1, 1, "Drinks", 1).await;
        let dish = add(&pool, ACTOR, create_payload(1, "Cola")).await.unwrap();

        let err = update(
            &pool,
            ACTOR,
            DishUpdate {
                id: dish.id,
                category_id: Some(404),
                name: None,
                price: None,
                image: None,
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }
}
