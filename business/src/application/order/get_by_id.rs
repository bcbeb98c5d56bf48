use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError> {
        self.logger.info(&format!("Fetching order {}", params.id));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        if !order.is_visible_to(&params.principal) {
            return Err(OrderError::NotFound);
        }
        Ok(order)
    }
}
