use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::permissions::Principal;

pub struct UpdateCartItemParams {
    pub cart_id: Uuid,
    pub item_id: Uuid,
    pub principal: Option<Principal>,
    pub quantity: i32,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartError>;
}
