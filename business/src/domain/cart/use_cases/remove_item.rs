use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::permissions::Principal;

pub struct RemoveCartItemParams {
    pub cart_id: Uuid,
    pub item_id: Uuid,
    pub principal: Option<Principal>,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<(), CartError>;
}
