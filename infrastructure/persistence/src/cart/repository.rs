use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::{CartEntity, CartItemEntity};
use crate::db::map_sqlx_error;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Lines of a cart with their product summaries, ordered by product title.
pub(crate) async fn fetch_items<'e>(
    executor: impl PgExecutor<'e>,
    cart_id: Uuid,
) -> Result<Vec<CartItemEntity>, RepositoryError> {
    sqlx::query_as::<_, CartItemEntity>(
        r#"SELECT ci.id, ci.cart_id, ci.product_id, p.title AS product_title,
                p.unit_price AS product_unit_price, ci.quantity
            FROM cart_items ci
            JOIN products p ON p.id = ci.product_id
            WHERE ci.cart_id = $1
            ORDER BY p.title, ci.id"#,
    )
    .bind(cart_id)
    .fetch_all(executor)
    .await
    .map_err(map_sqlx_error)
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn create(&self, cart: &Cart) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO carts (id, owner_id, created_at, last_activity) VALUES ($1, $2, $3, $4)",
        )
        .bind(cart.id)
        .bind(cart.owner.map(|owner| owner.as_uuid()))
        .bind(cart.created_at)
        .bind(cart.last_activity)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT id, owner_id, created_at, last_activity FROM carts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let items = fetch_items(&self.pool, id).await?;
        Ok(entity.into_domain(items))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn upsert_item(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"WITH upserted AS (
                INSERT INTO cart_items (id, cart_id, product_id, quantity)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (cart_id, product_id)
                DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
                RETURNING id, cart_id, product_id, quantity
            ), touched AS (
                UPDATE carts SET last_activity = NOW() WHERE id = $2
            )
            SELECT u.id, u.cart_id, u.product_id, p.title AS product_title,
                p.unit_price AS product_unit_price, u.quantity
            FROM upserted u
            JOIN products p ON p.id = u.product_id"#,
        )
        .bind(Uuid::new_v4())
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn set_item_quantity(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"WITH updated AS (
                UPDATE cart_items SET quantity = $3
                WHERE id = $2 AND cart_id = $1
                RETURNING id, cart_id, product_id, quantity
            ), touched AS (
                UPDATE carts SET last_activity = NOW()
                WHERE id = $1 AND EXISTS (SELECT 1 FROM updated)
            )
            SELECT u.id, u.cart_id, u.product_id, p.title AS product_title,
                p.unit_price AS product_unit_price, u.quantity
            FROM updated u
            JOIN products p ON p.id = u.product_id"#,
        )
        .bind(cart_id)
        .bind(item_id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete_item(&self, cart_id: Uuid, item_id: Uuid) -> Result<(), RepositoryError> {
        let removed = sqlx::query_scalar::<_, i64>(
            r#"WITH removed AS (
                DELETE FROM cart_items WHERE id = $2 AND cart_id = $1 RETURNING id
            ), touched AS (
                UPDATE carts SET last_activity = NOW()
                WHERE id = $1 AND EXISTS (SELECT 1 FROM removed)
            )
            SELECT COUNT(*) FROM removed"#,
        )
        .bind(cart_id)
        .bind(item_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if removed == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE last_activity < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{count, seed_product};
    use chrono::Duration;

    #[sqlx::test(migrations = "./migrations")]
    async fn should_sum_quantities_when_same_product_added_twice(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let cart = Cart::new(None);
        repository.create(&cart).await.unwrap();
        let product_id = seed_product(&pool, "Oolong Tea", 450, 20).await;

        let first = repository.upsert_item(cart.id, product_id, 2).await.unwrap();
        let second = repository.upsert_item(cart.id, product_id, 3).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 5);

        let stored = repository.get_by_id(cart.id).await.unwrap();
        assert_eq!(stored.items.len(), 1);
        assert_eq!(stored.items[0].quantity, 5);
        assert_eq!(stored.total_price(), 2250);
        assert_eq!(count(&pool, "SELECT COUNT(*) FROM cart_items").await, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_keep_separate_lines_per_product(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let cart = Cart::new(None);
        repository.create(&cart).await.unwrap();
        let tea = seed_product(&pool, "Oolong Tea", 450, 20).await;
        let mug = seed_product(&pool, "Clay Mug", 900, 5).await;

        repository.upsert_item(cart.id, tea, 1).await.unwrap();
        repository.upsert_item(cart.id, mug, 1).await.unwrap();

        let stored = repository.get_by_id(cart.id).await.unwrap();
        assert_eq!(stored.items.len(), 2);
        assert_eq!(stored.items[0].product.title, "Clay Mug");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_report_conflict_for_unknown_product(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let cart = Cart::new(None);
        repository.create(&cart).await.unwrap();

        let result = repository.upsert_item(cart.id, Uuid::new_v4(), 1).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Conflict));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_sweep_only_inactive_carts(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let now = Utc::now();
        let mut stale = Cart::new(None);
        stale.last_activity = now - Duration::days(4);
        let fresh = Cart::new(None);
        repository.create(&stale).await.unwrap();
        repository.create(&fresh).await.unwrap();

        let deleted = repository
            .delete_inactive_since(now - Duration::days(3))
            .await
            .unwrap();

        assert_eq!(deleted, 1);
        assert!(matches!(
            repository.get_by_id(stale.id).await.unwrap_err(),
            RepositoryError::NotFound
        ));
        assert!(repository.get_by_id(fresh.id).await.is_ok());
    }
}
