use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::Notification;
use crate::domain::shared::permissions::Principal;

pub struct MarkNotificationReadParams {
    pub id: Uuid,
    pub principal: Principal,
}

#[async_trait]
pub trait MarkNotificationReadUseCase: Send + Sync {
    async fn execute(
        &self,
        params: MarkNotificationReadParams,
    ) -> Result<Notification, NotificationError>;
}
