use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};

pub struct GetOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersUseCase for GetOrdersUseCaseImpl {
    async fn execute(&self, params: GetOrdersParams) -> Result<Vec<Order>, OrderError> {
        let scope = if params.principal.is_staff {
            None
        } else {
            Some(params.principal.user_id)
        };

        self.logger.info(&format!(
            "Fetching orders for {}",
            scope.map_or_else(|| "all users".to_string(), |id| format!("user {}", id))
        ));

        let orders = self.repository.get_all(scope).await?;

        self.logger.info(&format!("Found {} orders", orders.len()));
        Ok(orders)
    }
}
