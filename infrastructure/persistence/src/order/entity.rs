use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem, PaymentStatus};
use business::domain::product::model::ProductSummary;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub user_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub payment_status: String,
}

impl OrderEntity {
    pub fn into_domain(self, items: Vec<OrderItem>) -> Order {
        Order::from_repository(
            self.id,
            self.customer_id,
            UserId::new(self.user_id),
            self.placed_at,
            self.payment_status
                .parse::<PaymentStatus>()
                .unwrap_or_default(),
            items,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub product_title: String,
    pub product_unit_price: i64,
    pub quantity: i32,
    pub unit_price: i64,
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderItem {
        OrderItem {
            id: self.id,
            order_id: self.order_id,
            product: ProductSummary {
                id: self.product_id,
                title: self.product_title,
                unit_price: self.product_unit_price,
            },
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_snapshot_price_apart_from_current_price() {
        let item = OrderItemEntity {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            product_title: "Mug".to_string(),
            product_unit_price: 1100,
            quantity: 2,
            unit_price: 900,
        }
        .into_domain();

        assert_eq!(item.product.unit_price, 1100);
        assert_eq!(item.total_price(), 1800);
    }

    #[test]
    fn should_parse_stored_payment_status() {
        let order = OrderEntity {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            payment_status: "complete".to_string(),
        }
        .into_domain(vec![]);

        assert_eq!(order.payment_status, PaymentStatus::Complete);
    }
}
