use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct UpdateMeParams {
    pub user_id: UserId,
    pub username: Option<String>,
    /// Accepted only when equal to the current email.
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[async_trait]
pub trait UpdateMeUseCase: Send + Sync {
    async fn execute(&self, params: UpdateMeParams) -> Result<User, UserError>;
}
