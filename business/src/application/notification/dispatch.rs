use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;

/// Stores a generated notification. A failed write is logged and swallowed so
/// the triggering operation still succeeds.
pub async fn notify(
    repository: &dyn NotificationRepository,
    logger: &dyn Logger,
    notification: Notification,
) {
    if let Err(e) = repository.save(&notification).await {
        logger.warn(&format!(
            "Notification for user {} not stored: {}",
            notification.user_id, e
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{MockLog, MockNotificationRepo};

    #[tokio::test]
    async fn should_warn_when_save_fails() {
        let mut repo = MockNotificationRepo::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError));
        let mut logger = MockLog::new();
        logger
            .expect_warn()
            .withf(|message| message.contains("not stored"))
            .times(1)
            .returning(|_| ());

        notify(
            &repo,
            &logger,
            Notification::cart_created(UserId::generate(), uuid::Uuid::new_v4()),
        )
        .await;
    }
}
