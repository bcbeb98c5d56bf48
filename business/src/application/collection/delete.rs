use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::repository::CollectionRepository;
use crate::domain::collection::use_cases::delete::{
    DeleteCollectionParams, DeleteCollectionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::permissions::is_staff;

pub struct DeleteCollectionUseCaseImpl {
    pub repository: Arc<dyn CollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCollectionUseCase for DeleteCollectionUseCaseImpl {
    async fn execute(&self, params: DeleteCollectionParams) -> Result<(), CollectionError> {
        if !is_staff(Some(&params.principal)) {
            return Err(CollectionError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting collection {}", params.id));

        let collection = self.repository.get_by_id(params.id).await.map_err(|e| {
            if e.is_not_found() {
                CollectionError::NotFound
            } else {
                e.into()
            }
        })?;

        if collection.has_products() {
            self.logger.warn(&format!(
                "Collection {} still holds {} products",
                collection.id, collection.products_count
            ));
            return Err(CollectionError::HasProducts);
        }

        // A product may have been added since the count was read.
        self.repository
            .delete(collection.id)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict => CollectionError::HasProducts,
                RepositoryError::NotFound => CollectionError::NotFound,
                other => other.into(),
            })?;

        self.logger
            .info(&format!("Collection {} deleted", collection.id));
        Ok(())
    }
}
