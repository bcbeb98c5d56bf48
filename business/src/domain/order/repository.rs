use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customer::model::Customer;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Order, PaymentStatus};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// In one transaction: locks the cart, builds the order from its current
    /// contents with `Order::from_cart`, stores the order and its items, and
    /// deletes the cart. Nothing is written unless every step succeeds.
    ///
    /// Fails with `NotFound` when the cart no longer exists and with
    /// `Conflict` when it holds no items.
    async fn place_from_cart(
        &self,
        cart_id: Uuid,
        customer: &Customer,
    ) -> Result<Order, RepositoryError>;
    /// Newest first. `None` lists every order.
    async fn get_all(&self, user_id: Option<UserId>) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn update_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<(), RepositoryError>;
}
