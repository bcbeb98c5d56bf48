use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;
use crate::domain::shared::permissions::Principal;

pub struct UpdateCollectionParams {
    pub id: Uuid,
    pub principal: Principal,
    pub title: Option<String>,
    /// `Some(None)` clears the featured product.
    pub featured_product_id: Option<Option<Uuid>>,
}

#[async_trait]
pub trait UpdateCollectionUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCollectionParams) -> Result<Collection, CollectionError>;
}
