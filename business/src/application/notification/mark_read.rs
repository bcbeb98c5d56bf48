use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::mark_read::{
    MarkNotificationReadParams, MarkNotificationReadUseCase,
};
use crate::domain::shared::permissions::is_owner;

pub struct MarkNotificationReadUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MarkNotificationReadUseCase for MarkNotificationReadUseCaseImpl {
    async fn execute(
        &self,
        params: MarkNotificationReadParams,
    ) -> Result<Notification, NotificationError> {
        self.logger
            .info(&format!("Marking notification {} read", params.id));

        let mut notification = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => NotificationError::NotFound,
                other => NotificationError::Repository(other),
            })?;

        if !is_owner(Some(&params.principal), &notification.user_id) {
            return Err(NotificationError::NotFound);
        }

        notification.mark_read();
        self.repository.save(&notification).await?;
        Ok(notification)
    }
}
