use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::shared::permissions::Principal;

pub struct DeleteReviewParams {
    pub product_id: Uuid,
    pub review_id: Uuid,
    pub principal: Principal,
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, params: DeleteReviewParams) -> Result<(), ReviewError>;
}
