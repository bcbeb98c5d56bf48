use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::notification::model::{Notification, ReadStatus};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct NotificationEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub is_admin: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl NotificationEntity {
    pub fn into_domain(self) -> Notification {
        Notification::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.is_admin,
            self.message,
            self.created_at,
            self.status.parse::<ReadStatus>().unwrap_or_default(),
        )
    }
}
