use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::customer::model::Customer;
use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem, PaymentStatus};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{OrderEntity, OrderItemEntity};
use crate::cart::entity::CartEntity;
use crate::cart::repository::fetch_items;
use crate::db::map_sqlx_error;

const ORDER_SELECT: &str = r#"SELECT o.id, o.customer_id, c.user_id, o.placed_at, o.payment_status
    FROM orders o
    JOIN customers c ON c.id = o.customer_id"#;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn items_by_order(
        &self,
        order_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<OrderItem>>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderItemEntity>(
            r#"SELECT oi.id, oi.order_id, oi.product_id, p.title AS product_title,
                    p.unit_price AS product_unit_price, oi.quantity, oi.unit_price
                FROM order_items oi
                JOIN products p ON p.id = oi.product_id
                WHERE oi.order_id = ANY($1)
                ORDER BY p.title, oi.id"#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut grouped: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for entity in entities {
            grouped
                .entry(entity.order_id)
                .or_default()
                .push(entity.into_domain());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn place_from_cart(
        &self,
        cart_id: Uuid,
        customer: &Customer,
    ) -> Result<Order, RepositoryError> {
        // Dropping the transaction without commit rolls everything back.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let cart = sqlx::query_as::<_, CartEntity>(
            "SELECT id, owner_id, created_at, last_activity FROM carts WHERE id = $1 FOR UPDATE",
        )
        .bind(cart_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let items = fetch_items(&mut *tx, cart_id).await?;
        let cart = cart.into_domain(items);

        let order = Order::from_cart(customer, &cart).map_err(|_| RepositoryError::Conflict)?;

        sqlx::query(
            "INSERT INTO orders (id, customer_id, placed_at, payment_status) VALUES ($1, $2, $3, $4)",
        )
        .bind(order.id)
        .bind(order.customer_id)
        .bind(order.placed_at)
        .bind(order.payment_status.to_string())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let mut insert_items = QueryBuilder::<Postgres>::new(
            "INSERT INTO order_items (id, order_id, product_id, quantity, unit_price) ",
        );
        insert_items.push_values(&order.items, |mut row, item| {
            row.push_bind(item.id)
                .push_bind(item.order_id)
                .push_bind(item.product.id)
                .push_bind(item.quantity)
                .push_bind(item.unit_price);
        });
        insert_items
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(cart_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(order)
    }

    async fn get_all(&self, user_id: Option<UserId>) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "{} WHERE ($1::uuid IS NULL OR c.user_id = $1) ORDER BY o.placed_at DESC",
            ORDER_SELECT
        ))
        .bind(user_id.map(|id| id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let mut items = self.items_by_order(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let lines = items.remove(&e.id).unwrap_or_default();
                e.into_domain(lines)
            })
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "{} WHERE o.id = $1",
            ORDER_SELECT
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let mut items = self.items_by_order(&[id]).await?;
        let lines = items.remove(&id).unwrap_or_default();
        Ok(entity.into_domain(lines))
    }

    async fn update_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET payment_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
