use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::notification::model::{Notification, ReadStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ReadStatusDto {
    #[oai(rename = "unread")]
    Unread,
    #[oai(rename = "read")]
    Read,
}

impl From<ReadStatus> for ReadStatusDto {
    fn from(status: ReadStatus) -> Self {
        match status {
            ReadStatus::Unread => ReadStatusDto::Unread,
            ReadStatus::Read => ReadStatusDto::Read,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateNotificationRequest {
    /// Recipient
    pub user_id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    pub id: String,
    pub user_id: String,
    /// Sent by staff or by the system rather than another user
    pub is_admin: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: ReadStatusDto,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            user_id: notification.user_id.to_string(),
            is_admin: notification.is_admin,
            message: notification.message,
            created_at: notification.created_at,
            status: notification.status.into(),
        }
    }
}
