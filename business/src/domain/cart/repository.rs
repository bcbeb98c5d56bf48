use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Cart, CartItem};

/// Every item mutation also refreshes the cart's last activity.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn create(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Loads the cart together with its items and their product summaries.
    async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Inserts a line or increments the existing line for the same product.
    async fn upsert_item(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn set_item_quantity(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn delete_item(&self, cart_id: Uuid, item_id: Uuid) -> Result<(), RepositoryError>;
    /// Deletes carts whose last activity is older than `cutoff`, returning how many went.
    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
}
