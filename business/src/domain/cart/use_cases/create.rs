use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::permissions::Principal;

pub struct CreateCartParams {
    /// Authenticated callers own the carts they create.
    pub principal: Option<Principal>,
}

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartParams) -> Result<Cart, CartError>;
}
