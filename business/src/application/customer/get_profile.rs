use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::Customer;
use crate::domain::customer::repository::CustomerRepository;
use crate::domain::customer::use_cases::get_profile::{
    GetCustomerProfileParams, GetCustomerProfileUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCustomerProfileUseCaseImpl {
    pub repository: Arc<dyn CustomerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCustomerProfileUseCase for GetCustomerProfileUseCaseImpl {
    async fn execute(&self, params: GetCustomerProfileParams) -> Result<Customer, CustomerError> {
        self.logger
            .debug(&format!("Fetching customer profile of user {}", params.user_id));

        let customer = self.repository.get_or_create(&params.user_id).await?;
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::model::Membership;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{mock_logger, MockCustomerRepo};

    #[tokio::test]
    async fn should_return_blank_profile_on_first_access() {
        let user_id = UserId::generate();
        let mut mock_repo = MockCustomerRepo::new();
        mock_repo
            .expect_get_or_create()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|id| Ok(Customer::for_user(*id)));

        let use_case = GetCustomerProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let customer = use_case
            .execute(GetCustomerProfileParams { user_id })
            .await
            .unwrap();

        assert_eq!(customer.user_id, user_id);
        assert_eq!(customer.membership, Membership::Bronze);
    }
}
