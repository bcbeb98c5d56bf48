use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::Customer;
use crate::domain::customer::repository::CustomerRepository;
use crate::domain::customer::use_cases::update_profile::{
    UpdateCustomerProfileParams, UpdateCustomerProfileUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCustomerProfileUseCaseImpl {
    pub repository: Arc<dyn CustomerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCustomerProfileUseCase for UpdateCustomerProfileUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCustomerProfileParams,
    ) -> Result<Customer, CustomerError> {
        self.logger
            .info(&format!("Updating customer profile of user {}", params.user_id));

        let mut customer = self.repository.get_or_create(&params.user_id).await?;
        customer.update(params.phone, params.birth_date, params.membership)?;
        self.repository.save(&customer).await?;

        self.logger
            .info(&format!("Customer {} updated", customer.id));
        Ok(customer)
    }
}
