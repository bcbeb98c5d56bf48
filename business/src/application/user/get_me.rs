use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_me::{GetMeParams, GetMeUseCase};

pub struct GetMeUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMeUseCase for GetMeUseCaseImpl {
    async fn execute(&self, params: GetMeParams) -> Result<User, UserError> {
        self.logger
            .debug(&format!("Fetching user {}", params.user_id));

        self.repository
            .get_by_id(&params.user_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    UserError::NotFound
                } else {
                    e.into()
                }
            })
    }
}
