use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::Notification;
use crate::domain::shared::permissions::Principal;

pub struct GetNotificationsParams {
    pub principal: Principal,
    pub since: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait GetNotificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetNotificationsParams,
    ) -> Result<Vec<Notification>, NotificationError>;
}
