use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Collection;

#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Ordered by title, with product counts.
    async fn get_all(&self) -> Result<Vec<Collection>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Collection, RepositoryError>;
    /// Fails with `Duplicated` when the title is already used by another collection.
    async fn save(&self, collection: &Collection) -> Result<(), RepositoryError>;
    /// Fails with `Conflict` while products still reference the collection.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
