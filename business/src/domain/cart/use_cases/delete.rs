use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::permissions::Principal;

pub struct DeleteCartParams {
    pub cart_id: Uuid,
    pub principal: Option<Principal>,
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError>;
}
