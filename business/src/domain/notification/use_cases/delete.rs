use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::errors::NotificationError;
use crate::domain::shared::permissions::Principal;

pub struct DeleteNotificationParams {
    pub id: Uuid,
    pub principal: Principal,
}

#[async_trait]
pub trait DeleteNotificationUseCase: Send + Sync {
    async fn execute(&self, params: DeleteNotificationParams) -> Result<(), NotificationError>;
}
