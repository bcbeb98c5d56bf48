use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::shared::permissions::is_staff;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        if !is_staff(Some(&params.principal)) {
            return Err(ProductError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let ordered = self.repository.count_order_items(params.id).await?;
        if ordered > 0 {
            self.logger.warn(&format!(
                "Product {} is referenced by {} order items",
                params.id, ordered
            ));
            return Err(ProductError::HasOrderItems);
        }

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict => ProductError::HasOrderItems,
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
