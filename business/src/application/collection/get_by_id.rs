use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::Collection;
use crate::domain::collection::repository::CollectionRepository;
use crate::domain::collection::use_cases::get_by_id::{
    GetCollectionByIdParams, GetCollectionByIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCollectionByIdUseCaseImpl {
    pub repository: Arc<dyn CollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCollectionByIdUseCase for GetCollectionByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetCollectionByIdParams,
    ) -> Result<Collection, CollectionError> {
        self.logger
            .info(&format!("Fetching collection {}", params.id));

        self.repository.get_by_id(params.id).await.map_err(|e| {
            if e.is_not_found() {
                CollectionError::NotFound
            } else {
                e.into()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_utils::{mock_logger, MockCollectionRepo};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_not_found_for_missing_collection() {
        let mut mock_repo = MockCollectionRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetCollectionByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCollectionByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), CollectionError::NotFound));
    }
}
