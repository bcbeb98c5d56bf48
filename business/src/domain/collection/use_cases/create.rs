use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;
use crate::domain::shared::permissions::Principal;

pub struct CreateCollectionParams {
    pub principal: Principal,
    pub title: String,
    pub featured_product_id: Option<Uuid>,
}

#[async_trait]
pub trait CreateCollectionUseCase: Send + Sync {
    async fn execute(&self, params: CreateCollectionParams) -> Result<Collection, CollectionError>;
}
