use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::shared::permissions::Principal;

pub struct CreateReviewParams {
    pub product_id: Uuid,
    pub principal: Principal,
    pub name: String,
    pub description: String,
}

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(&self, params: CreateReviewParams) -> Result<Review, ReviewError>;
}
