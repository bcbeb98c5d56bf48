use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::{Customer, Membership};
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCustomerProfileParams {
    pub user_id: UserId,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Membership,
}

#[async_trait]
pub trait UpdateCustomerProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCustomerProfileParams,
    ) -> Result<Customer, CustomerError>;
}
