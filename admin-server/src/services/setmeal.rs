//! Set-meal Domain Service

use crate::db::repository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Setmeal, SetmealCreate, SetmealDetail, SetmealDish, SetmealDishItem, SetmealPageQuery,
    SetmealUpdate, status,
};
use shared::page::{PageResult, to_limit_offset};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

/// Resolve a bundle payload into snapshot rows
///
/// Every referenced dish must exist; name and price are copied so later
/// dish edits do not rewrite the bundle.
async fn build_bundle(
    pool: &SqlitePool,
    setmeal_id: i64,
    items: &[SetmealDishItem],
) -> AppResult<Vec<SetmealDish>> {
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        if item.copies < 1 {
            return Err(AppError::validation(format!(
                "Invalid copies for dish {}: {}",
                item.dish_id, item.copies
            )));
        }
        let dish = repository::dish::find_by_id(pool, item.dish_id)
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::DishNotFound,
                    format!("Dish {} not found", item.dish_id),
                )
            })?;
        rows.push(SetmealDish {
            id: snowflake_id(),
            setmeal_id,
            dish_id: dish.id,
            name: dish.name,
            price: dish.price,
            copies: item.copies,
        });
    }
    Ok(rows)
}

/// Create a set-meal together with its bundle
///
/// New set-meals are off sale until enabled explicitly.
pub async fn add(pool: &SqlitePool, actor_id: i64, data: SetmealCreate) -> AppResult<SetmealDetail> {
    repository::category::find_by_id(pool, data.category_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;

    if repository::setmeal::find_by_name(pool, &data.name)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::SetmealNameExists));
    }

    let now = now_millis();
    let setmeal = Setmeal {
        id: snowflake_id(),
        category_id: data.category_id,
        name: data.name,
        price: data.price,
        description: data.description,
        status: status::DISABLED,
        create_time: now,
        update_time: now,
        create_user: actor_id,
        update_user: actor_id,
    };

    let dishes = build_bundle(pool, setmeal.id, &data.dishes).await?;
    repository::setmeal::insert_with_dishes(pool, &setmeal, &dishes).await?;
    tracing::info!(setmeal_id = setmeal.id, name = %setmeal.name, "Set-meal created");

    Ok(SetmealDetail { setmeal, dishes })
}

/// Partial update; a `dishes` payload replaces the whole bundle
pub async fn update(
    pool: &SqlitePool,
    actor_id: i64,
    data: SetmealUpdate,
) -> AppResult<SetmealDetail> {
    let existing = repository::setmeal::find_by_id(pool, data.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SetmealNotFound))?;

    if let Some(category_id) = data.category_id
        && repository::category::find_by_id(pool, category_id)
            .await?
            .is_none()
    {
        return Err(AppError::new(ErrorCode::CategoryNotFound));
    }

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && repository::setmeal::find_by_name(pool, new_name)
            .await?
            .is_some()
    {
        return Err(AppError::new(ErrorCode::SetmealNameExists));
    }

    repository::setmeal::update_fields(
        pool,
        data.id,
        data.category_id,
        data.name.as_deref(),
        data.price,
        data.description.as_deref(),
        now_millis(),
        actor_id,
    )
    .await?;

    if let Some(ref items) = data.dishes {
        let rows = build_bundle(pool, data.id, items).await?;
        repository::setmeal::replace_dishes(pool, data.id, &rows).await?;
    }

    get_detail(pool, data.id).await
}

/// Set-meal with its bundled dishes
pub async fn get_detail(pool: &SqlitePool, id: i64) -> AppResult<SetmealDetail> {
    let setmeal = repository::setmeal::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SetmealNotFound))?;
    let dishes = repository::setmeal::find_dishes(pool, id).await?;
    Ok(SetmealDetail { setmeal, dishes })
}

/// Paged query with name, category and status filters
pub async fn page(pool: &SqlitePool, query: SetmealPageQuery) -> AppResult<PageResult<Setmeal>> {
    let (limit, offset) = to_limit_offset(query.page, query.page_size);
    let result = repository::setmeal::page(
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

/// Put a set-meal on or off sale
///
/// Enabling is refused while any bundled dish is disabled; disabling is
/// unconditional. Only the status column is touched.
pub async fn update_status(pool: &SqlitePool, status_value: i32, id: i64) -> AppResult<()> {
    if !status::is_valid(status_value) {
        return Err(AppError::validation(format!(
            "Invalid status value: {status_value}"
        )));
    }

    repository::setmeal::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SetmealNotFound))?;

    if status_value == status::ENABLED
        && repository::setmeal::count_disabled_dishes(pool, id).await? > 0
    {
        return Err(AppError::new(ErrorCode::SetmealHasDisabledDish));
    }

    repository::setmeal::update_status(pool, status_value, id).await?;
    Ok(())
}

/// Delete a set-meal and its bundle
///
/// Refused while the set-meal is on sale.
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let existing = repository::setmeal::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SetmealNotFound))?;

    if existing.status == status::ENABLED {
        return Err(AppError::new(ErrorCode::SetmealOnSale));
    }

    repository::setmeal::delete(pool, id).await?;
    tracing::info!(setmeal_id = id, "Set-meal deleted");
    Ok(())
}

/// Enabled set-meals of a category
pub async fn list_by_category(pool: &SqlitePool, category_id: i64) -> AppResult<Vec<Setmeal>> {
    let setmeals = repository::setmeal::list_by_category(pool, category_id).await?;
    Ok(setmeals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{seed_category, seed_dish, test_pool};

    const ACTOR: i64 = 3;

    fn create_payload(name: &str, dishes: Vec<SetmealDishItem>) -> SetmealCreate {
        SetmealCreate {
            category_id: 2,
            name: name.to_string(),
            price: 1800,
            description: None,
            dishes,
        }
    }

    fn item(dish_id: i64, copies: i32) -> SetmealDishItem {
        SetmealDishItem { dish_id, copies }
    }

    async fn setup(pool: &SqlitePool) {
        seed_category(pool, 1, 1, "Drinks", 1).await;
        seed_category(pool, 2, 2, "Combos", 2).await;
        seed_dish(pool, 10, 1, "Cola", status::ENABLED).await;
        seed_dish(pool, 11, 1, "Winter special", status::DISABLED).await;
    }

    #[tokio::test]
    async fn test_add_snapshots_bundle() {
        let pool = test_pool().await;
        setup(&pool).await;

        let detail = add(&pool, ACTOR, create_payload("Lunch combo", vec![item(10, 2)]))
            .await
            .unwrap();

        assert_eq!(detail.setmeal.status, status::DISABLED);
        assert_eq!(detail.setmeal.create_user, ACTOR);
        assert_eq!(detail.dishes.len(), 1);
        assert_eq!(detail.dishes[0].name, "Cola");
        assert_eq!(detail.dishes[0].price, 500);
        assert_eq!(detail.dishes[0].copies, 2);
    }

    #[tokio::test]
    async fn test_add_unknown_dish_fails() {
        let pool = test_pool().await;
        setup(&pool).await;

        let err = add(&pool, ACTOR, create_payload("Combo", vec![item(404, 1)]))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DishNotFound);
    }

    #[tokio::test]
    async fn test_add_invalid_copies() {
        let pool = test_pool().await;
        setup(&pool).await;

        let err = add(&pool, ACTOR, create_payload("Combo", vec![item(10, 0)]))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_enable_with_disabled_dish_fails() {
        let pool = test_pool().await;
        setup(&pool).await;
        let detail = add(
            &pool,
            ACTOR,
            create_payload("Combo", vec![item(10, 1), item(11, 1)]),
        )
        .await
        .unwrap();

        let err = update_status(&pool, status::ENABLED, detail.setmeal.id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SetmealHasDisabledDish);

        // Disabling the set-meal is always allowed
        update_status(&pool, status::DISABLED, detail.setmeal.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_enable_with_all_dishes_enabled() {
        let pool = test_pool().await;
        setup(&pool).await;
        let detail = add(&pool, ACTOR, create_payload("Combo", vec![item(10, 1)]))
            .await
            .unwrap();

        update_status(&pool, status::ENABLED, detail.setmeal.id)
            .await
            .unwrap();
        let stored = get_detail(&pool, detail.setmeal.id).await.unwrap();
        assert_eq!(stored.setmeal.status, status::ENABLED);
    }

    #[tokio::test]
    async fn test_delete_on_sale_fails() {
        let pool = test_pool().await;
        setup(&pool).await;
        let detail = add(&pool, ACTOR, create_payload("Combo", vec![item(10, 1)]))
            .await
            .unwrap();
        update_status(&pool, status::ENABLED, detail.setmeal.id)
            .await
            .unwrap();

        let err = delete(&pool, detail.setmeal.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SetmealOnSale);

        update_status(&pool, status::DISABLED, detail.setmeal.id)
            .await
            .unwrap();
        delete(&pool, detail.setmeal.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_replaces_bundle() {
        let pool = test_pool().await;
        setup(&pool).await;
        let detail = add(&pool, ACTOR, create_payload("Combo", vec![item(10, 1)]))
            .await
            .unwrap();

        let updated = update(
            &pool,
            ACTOR,
            SetmealUpdate {
                id: detail.setmeal.id,
                category_id: None,
                name: None,
                price: Some(2000),
                description: None,
                dishes: Some(vec![item(11, 3)]),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.setmeal.price, 2000);
        assert_eq!(updated.dishes.len(), 1);
        assert_eq!(updated.dishes[0].dish_id, 11);
        assert_eq!(updated.dishes[0].copies, 3);
    }

    #[tokio::test]
    async fn test_update_without_dishes_keeps_bundle() {
        let pool = test_pool().await;
        setup(&pool).await;
        let detail = add(&pool, ACTOR, create_payload("Combo", vec![item(10, 1)]))
            .await
            .unwrap();

        let updated = update(
            &pool,
            ACTOR,
            SetmealUpdate {
                id: detail.setmeal.id,
                category_id: None,
                name: Some("Combo deluxe".into()),
                price: None,
                description: None,
                dishes: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.setmeal.name, "Combo deluxe");
        assert_eq!(updated.dishes.len(), 1);
        assert_eq!(updated.dishes[0].dish_id, 10);
    }
}
