use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::create::{
    CreateNotificationParams, CreateNotificationUseCase,
};
use crate::domain::shared::permissions::is_staff;

pub struct CreateNotificationUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateNotificationUseCase for CreateNotificationUseCaseImpl {
    async fn execute(
        &self,
        params: CreateNotificationParams,
    ) -> Result<Notification, NotificationError> {
        if !is_staff(Some(&params.principal)) {
            return Err(NotificationError::Forbidden);
        }

        self.logger
            .info(&format!("Notifying user {}", params.user_id));

        let notification = Notification::new(params.user_id, params.message, true)?;

        self.repository
            .save(&notification)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict => NotificationError::RecipientNotFound,
                other => NotificationError::Repository(other),
            })?;

        self.logger
            .info(&format!("Notification created with id: {}", notification.id));
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{mock_logger, MockNotificationRepo};

    #[tokio::test]
    async fn should_create_admin_notification() {
        let recipient = UserId::generate();
        let mut mock_repo = MockNotificationRepo::new();
        mock_repo
            .expect_save()
            .withf(move |n| n.user_id == recipient && n.is_admin)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateNotificationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let notification = use_case
            .execute(CreateNotificationParams {
                principal: Principal::staff(UserId::generate()),
                user_id: recipient,
                message: "Store closes early today".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(notification.message, "Store closes early today");
    }

    #[tokio::test]
    async fn should_report_unknown_recipient() {
        let mut mock_repo = MockNotificationRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Conflict));

        let use_case = CreateNotificationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateNotificationParams {
                principal: Principal::staff(UserId::generate()),
                user_id: UserId::generate(),
                message: "Hello".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            NotificationError::RecipientNotFound
        ));
    }

    #[tokio::test]
    async fn should_forbid_customers() {
        let use_case = CreateNotificationUseCaseImpl {
            repository: Arc::new(MockNotificationRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateNotificationParams {
                principal: Principal::customer(UserId::generate()),
                user_id: UserId::generate(),
                message: "Hello".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), NotificationError::Forbidden));
    }
}
