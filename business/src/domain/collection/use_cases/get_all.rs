use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;

#[async_trait]
pub trait GetAllCollectionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Collection>, CollectionError>;
}
