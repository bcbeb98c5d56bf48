use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_me::{UpdateMeParams, UpdateMeUseCase};

pub struct UpdateMeUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateMeUseCase for UpdateMeUseCaseImpl {
    async fn execute(&self, params: UpdateMeParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Updating user {}", params.user_id));

        let mut user = self
            .repository
            .get_by_id(&params.user_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    UserError::NotFound
                } else {
                    e.into()
                }
            })?;

        if let Some(email) = params.email {
            if email.trim().to_lowercase() != user.email {
                return Err(UserError::EmailImmutable);
            }
        }

        if let Some(username) = params.username {
            if username.trim() != user.username {
                if self.repository.exists_by_username(username.trim()).await? {
                    return Err(UserError::UsernameTaken);
                }
                user.rename(username)?;
            }
        }
        if let Some(first_name) = params.first_name {
            user.set_first_name(first_name)?;
        }
        if let Some(last_name) = params.last_name {
            user.set_last_name(last_name)?;
        }

        self.repository.save(&user).await?;

        self.logger.info(&format!("User {} updated", user.id));
        Ok(user)
    }
}
