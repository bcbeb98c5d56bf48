use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;
use crate::domain::collection::repository::CollectionRepository;
use crate::domain::collection::use_cases::create::{
    CreateCollectionParams, CreateCollectionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::permissions::is_staff;

pub struct CreateCollectionUseCaseImpl {
    pub repository: Arc<dyn CollectionRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCollectionUseCase for CreateCollectionUseCaseImpl {
    async fn execute(&self, params: CreateCollectionParams) -> Result<Collection, CollectionError> {
        if !is_staff(Some(&params.principal)) {
            return Err(CollectionError::Forbidden);
        }

        self.logger
            .info(&format!("Creating collection: {}", params.title));

        let collection = Collection::new(params.title, params.featured_product_id)?;

        if let Some(product_id) = collection.featured_product_id {
            self.product_repository
                .get_by_id(product_id)
                .await
                .map_err(|e| {
                    if e.is_not_found() {
                        CollectionError::FeaturedProductNotFound
                    } else {
                        e.into()
                    }
                })?;
        }

        self.repository
            .save(&collection)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CollectionError::TitleTaken,
                other => other.into(),
            })?;

        self.logger
            .info(&format!("Collection created with id: {}", collection.id));
        Ok(collection)
    }
}
