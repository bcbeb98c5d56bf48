use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::permissions::Principal;

pub struct AddCartItemParams {
    pub cart_id: Uuid,
    pub principal: Option<Principal>,
    pub product_id: Uuid,
    pub quantity: i32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartItem, CartError>;
}
