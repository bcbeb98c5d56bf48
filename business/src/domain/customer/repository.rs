use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Customer;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns the user's customer profile, inserting a blank one when missing.
    async fn get_or_create(&self, user_id: &UserId) -> Result<Customer, RepositoryError>;
    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError>;
}
