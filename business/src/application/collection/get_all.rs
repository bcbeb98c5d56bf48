use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;
use crate::domain::collection::repository::CollectionRepository;
use crate::domain::collection::use_cases::get_all::GetAllCollectionsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCollectionsUseCaseImpl {
    pub repository: Arc<dyn CollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCollectionsUseCase for GetAllCollectionsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Collection>, CollectionError> {
        self.logger.info("Fetching all collections");

        let collections = self.repository.get_all().await?;

        self.logger
            .info(&format!("Found {} collections", collections.len()));
        Ok(collections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_logger, MockCollectionRepo};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_list_collections_with_counts() {
        let mut mock_repo = MockCollectionRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                Collection::from_repository(Uuid::new_v4(), "Beauty".into(), None, 2),
                Collection::from_repository(Uuid::new_v4(), "Toys".into(), None, 0),
            ])
        });

        let use_case = GetAllCollectionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let collections = use_case.execute().await.unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0].products_count, 2);
    }
}
