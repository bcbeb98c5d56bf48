use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Notification;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Newest first; `since` keeps only notifications created strictly after it.
    async fn get_for_user(
        &self,
        user_id: &UserId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Notification>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Notification, RepositoryError>;
    /// Fails with `Conflict` when the recipient does not exist.
    async fn save(&self, notification: &Notification) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
