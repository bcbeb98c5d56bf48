use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::permissions::Principal;

pub struct GetCartParams {
    pub cart_id: Uuid,
    pub principal: Option<Principal>,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError>;
}
