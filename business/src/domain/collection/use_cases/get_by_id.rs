use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;

pub struct GetCollectionByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetCollectionByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCollectionByIdParams)
    -> Result<Collection, CollectionError>;
}
