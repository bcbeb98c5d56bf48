use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::get_all::{
    GetNotificationsParams, GetNotificationsUseCase,
};

pub struct GetNotificationsUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetNotificationsUseCase for GetNotificationsUseCaseImpl {
    async fn execute(
        &self,
        params: GetNotificationsParams,
    ) -> Result<Vec<Notification>, NotificationError> {
        self.logger.info(&format!(
            "Fetching notifications of user {}",
            params.principal.user_id
        ));

        let notifications = self
            .repository
            .get_for_user(&params.principal.user_id, params.since)
            .await?;

        self.logger
            .info(&format!("Found {} notifications", notifications.len()));
        Ok(notifications)
    }
}
