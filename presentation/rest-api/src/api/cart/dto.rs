use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};

use crate::api::product::dto::ProductSummaryResponse;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    /// Added to the existing quantity when the product is already in the cart
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub id: String,
    pub product: ProductSummaryResponse,
    pub quantity: i32,
    /// quantity * unit price, in cents
    pub total_price: i64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            total_price: item.total_price(),
            id: item.id.to_string(),
            product: item.product.into(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: String,
    /// Absent for anonymous carts
    #[oai(skip_serializing_if_is_none)]
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub items: Vec<CartItemResponse>,
    pub total_price: i64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total_price: cart.total_price(),
            id: cart.id.to_string(),
            owner_id: cart.owner.map(|owner| owner.to_string()),
            created_at: cart.created_at,
            last_activity: cart.last_activity,
            items: cart.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
