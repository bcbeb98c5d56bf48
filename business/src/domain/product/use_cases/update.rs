use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::shared::permissions::Principal;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub principal: Principal,
    pub changes: ProductChanges,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
