use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::repository::CollectionRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::permissions::is_staff;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub collection_repository: Arc<dyn CollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        if !is_staff(Some(&params.principal)) {
            return Err(ProductError::Forbidden);
        }

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if let Some(collection_id) = params.changes.collection_id
            && collection_id != product.collection_id
        {
            self.collection_repository
                .get_by_id(collection_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => ProductError::CollectionNotFound,
                    other => ProductError::Repository(other),
                })?;
        }

        product.apply(params.changes)?;

        self.repository
            .save(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::TitleTaken,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
