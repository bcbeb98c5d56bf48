use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::product::model::ProductSummary;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self, items: Vec<CartItemEntity>) -> Cart {
        Cart::from_repository(
            self.id,
            self.owner_id.map(UserId::new),
            self.created_at,
            self.last_activity,
            items.into_iter().map(CartItemEntity::into_domain).collect(),
        )
    }
}

/// A cart line joined with the product it points to.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub product_title: String,
    pub product_unit_price: i64,
    pub quantity: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem {
            id: self.id,
            cart_id: self.cart_id,
            product: ProductSummary {
                id: self.product_id,
                title: self.product_title,
                unit_price: self.product_unit_price,
            },
            quantity: self.quantity,
        }
    }
}
