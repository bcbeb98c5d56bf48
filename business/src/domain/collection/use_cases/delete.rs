use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::collection::errors::CollectionError;
use crate::domain::shared::permissions::Principal;

pub struct DeleteCollectionParams {
    pub id: Uuid,
    pub principal: Principal,
}

#[async_trait]
pub trait DeleteCollectionUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCollectionParams) -> Result<(), CollectionError>;
}
