use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::Customer;
use crate::domain::shared::value_objects::UserId;

pub struct GetCustomerProfileParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCustomerProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetCustomerProfileParams) -> Result<Customer, CustomerError>;
}
