use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;
use crate::domain::collection::repository::CollectionRepository;
use crate::domain::collection::use_cases::update::{
    UpdateCollectionParams, UpdateCollectionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::permissions::is_staff;

pub struct UpdateCollectionUseCaseImpl {
    pub repository: Arc<dyn CollectionRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCollectionUseCase for UpdateCollectionUseCaseImpl {
    async fn execute(&self, params: UpdateCollectionParams) -> Result<Collection, CollectionError> {
        if !is_staff(Some(&params.principal)) {
            return Err(CollectionError::Forbidden);
        }

        self.logger
            .info(&format!("Updating collection {}", params.id));

        let mut collection = self.repository.get_by_id(params.id).await.map_err(|e| {
            if e.is_not_found() {
                CollectionError::NotFound
            } else {
                e.into()
            }
        })?;

        if let Some(title) = params.title {
            collection.retitle(title)?;
        }

        if let Some(featured) = params.featured_product_id {
            if let Some(product_id) = featured {
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
            collection.featured_product_id = featured;
        }

        self.repository
            .save(&collection)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CollectionError::TitleTaken,
                other => other.into(),
            })?;

        self.logger
            .info(&format!("Collection {} updated", collection.id));
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{mock_logger, MockCollectionRepo, MockProductRepo};
    use uuid::Uuid;

    fn stored(id: Uuid) -> Collection {
        Collection::from_repository(id, "Beauty".into(), Some(Uuid::new_v4()), 4)
    }

    #[tokio::test]
    async fn should_clear_featured_product_and_keep_count() {
        let mut mock_repo = MockCollectionRepo::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(stored(id)));
        mock_repo
            .expect_save()
            .withf(|collection| collection.featured_product_id.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateCollectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let collection = use_case
            .execute(UpdateCollectionParams {
                id: Uuid::new_v4(),
                principal: Principal::staff(UserId::generate()),
                title: None,
                featured_product_id: Some(None),
            })
            .await
            .unwrap();

        assert_eq!(collection.title, "Beauty");
        assert_eq!(collection.products_count, 4);
    }

    #[tokio::test]
    async fn should_reject_blank_title() {
        let mut mock_repo = MockCollectionRepo::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(stored(id)));
        mock_repo.expect_save().never();

        let use_case = UpdateCollectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCollectionParams {
                id: Uuid::new_v4(),
                principal: Principal::staff(UserId::generate()),
                title: Some("  ".to_string()),
                featured_product_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CollectionError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_collection() {
        let mut mock_repo = MockCollectionRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCollectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCollectionParams {
                id: Uuid::new_v4(),
                principal: Principal::staff(UserId::generate()),
                title: Some("Toys".to_string()),
                featured_product_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CollectionError::NotFound));
    }
}
