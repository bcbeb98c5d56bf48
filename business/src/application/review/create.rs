use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};

pub struct CreateReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateReviewUseCase for CreateReviewUseCaseImpl {
    async fn execute(&self, params: CreateReviewParams) -> Result<Review, ReviewError> {
        self.logger.info(&format!(
            "User {} reviewing product {}",
            params.principal.user_id, params.product_id
        ));

        let review = Review::new(
            params.product_id,
            params.principal.user_id,
            params.name,
            params.description,
        )?;

        self.product_repository
            .get_by_id(review.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::ProductNotFound,
                other => ReviewError::Repository(other),
            })?;

        if self
            .repository
            .exists_for(review.product_id, &review.user_id)
            .await?
        {
            return Err(ReviewError::AlreadyReviewed);
        }

        self.repository
            .save(&review)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ReviewError::AlreadyReviewed,
                RepositoryError::Conflict => ReviewError::ProductNotFound,
                other => ReviewError::Repository(other),
            })?;

        self.logger
            .info(&format!("Review created with id: {}", review.id));
        Ok(review)
    }
}
