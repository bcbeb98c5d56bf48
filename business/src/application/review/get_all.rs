use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::get_all::{GetReviewsParams, GetReviewsUseCase};

pub struct GetReviewsUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReviewsUseCase for GetReviewsUseCaseImpl {
    async fn execute(&self, params: GetReviewsParams) -> Result<Vec<Review>, ReviewError> {
        self.logger
            .info(&format!("Fetching reviews of product {}", params.product_id));

        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::ProductNotFound,
                other => ReviewError::Repository(other),
            })?;

        let reviews = self.repository.get_by_product(params.product_id).await?;
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_logger, MockProductRepo, MockReviewRepo};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_not_list_reviews_of_unknown_product() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_repo = MockReviewRepo::new();
        mock_repo.expect_get_by_product().never();

        let use_case = GetReviewsUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetReviewsParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::ProductNotFound));
    }
}
