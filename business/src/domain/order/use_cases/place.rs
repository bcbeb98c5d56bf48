use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::permissions::Principal;

pub struct PlaceOrderParams {
    pub cart_id: Uuid,
    pub principal: Principal,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError>;
}
