use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::Product;
use super::value_objects::ProductFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Fails with `Duplicated` when the title is already used by another product.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn count_order_items(&self, id: Uuid) -> Result<i64, RepositoryError>;
    /// Fails with `Conflict` while order items still reference the product.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
