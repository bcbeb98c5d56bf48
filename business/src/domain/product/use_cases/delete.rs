use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::permissions::Principal;

pub struct DeleteProductParams {
    pub id: Uuid,
    pub principal: Principal,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
