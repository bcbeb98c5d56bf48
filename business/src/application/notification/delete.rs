use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::delete::{
    DeleteNotificationParams, DeleteNotificationUseCase,
};
use crate::domain::shared::permissions::is_staff;

pub struct DeleteNotificationUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteNotificationUseCase for DeleteNotificationUseCaseImpl {
    async fn execute(&self, params: DeleteNotificationParams) -> Result<(), NotificationError> {
        if !is_staff(Some(&params.principal)) {
            return Err(NotificationError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting notification {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => NotificationError::NotFound,
                other => NotificationError::Repository(other),
            })?;

        Ok(())
    }
}
