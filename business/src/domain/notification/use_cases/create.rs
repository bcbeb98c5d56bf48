use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::Notification;
use crate::domain::shared::permissions::Principal;
use crate::domain::shared::value_objects::UserId;

pub struct CreateNotificationParams {
    pub principal: Principal,
    pub user_id: UserId,
    pub message: String,
}

#[async_trait]
pub trait CreateNotificationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateNotificationParams,
    ) -> Result<Notification, NotificationError>;
}
