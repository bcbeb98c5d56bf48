use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::permissions::Principal;

pub struct GetOrderByIdParams {
    pub id: Uuid,
    pub principal: Principal,
}

#[async_trait]
pub trait GetOrderByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError>;
}
