use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, PaymentStatus};
use crate::domain::shared::permissions::Principal;

pub struct UpdateOrderStatusParams {
    pub id: Uuid,
    pub principal: Principal,
    pub payment_status: PaymentStatus,
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
