use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::notification::model::Notification;
use business::domain::notification::repository::NotificationRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::NotificationEntity;
use crate::db::map_sqlx_error;

pub struct NotificationRepositoryPostgres {
    pool: PgPool,
}

impl NotificationRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn get_for_user(
        &self,
        user_id: &UserId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Notification>, RepositoryError> {
        let entities = sqlx::query_as::<_, NotificationEntity>(
            r#"SELECT id, user_id, is_admin, message, created_at, status
            FROM notifications
            WHERE user_id = $1 AND ($2::timestamptz IS NULL OR created_at > $2)
            ORDER BY created_at DESC"#,
        )
        .bind(user_id.as_uuid())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Notification, RepositoryError> {
        let entity = sqlx::query_as::<_, NotificationEntity>(
            "SELECT id, user_id, is_admin, message, created_at, status FROM notifications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, notification: &Notification) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO notifications (id, user_id, is_admin, message, created_at, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                message = EXCLUDED.message,
                status = EXCLUDED.status"#,
        )
        .bind(notification.id)
        .bind(notification.user_id.as_uuid())
        .bind(notification.is_admin)
        .bind(&notification.message)
        .bind(notification.created_at)
        .bind(notification.status.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
