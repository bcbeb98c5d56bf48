use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};
use crate::domain::shared::permissions::is_owner_or_staff;

pub struct DeleteReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteReviewUseCase for DeleteReviewUseCaseImpl {
    async fn execute(&self, params: DeleteReviewParams) -> Result<(), ReviewError> {
        self.logger.info(&format!(
            "Deleting review {} of product {}",
            params.review_id, params.product_id
        ));

        let review = self
            .repository
            .get_by_id(params.product_id, params.review_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::NotFound,
                other => ReviewError::Repository(other),
            })?;

        if !is_owner_or_staff(Some(&params.principal), &review.user_id) {
            return Err(ReviewError::Forbidden);
        }

        self.repository.delete(review.id).await?;

        self.logger.info(&format!("Review {} deleted", review.id));
        Ok(())
    }
}
