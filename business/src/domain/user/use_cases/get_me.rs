use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetMeParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetMeUseCase: Send + Sync {
    async fn execute(&self, params: GetMeParams) -> Result<User, UserError>;
}
