use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Review;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
    async fn get_by_id(&self, product_id: Uuid, id: Uuid) -> Result<Review, RepositoryError>;
    async fn exists_for(&self, product_id: Uuid, user_id: &UserId)
    -> Result<bool, RepositoryError>;
    /// Fails with `Duplicated` when the user already reviewed the product.
    async fn save(&self, review: &Review) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
