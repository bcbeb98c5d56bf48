use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use crate::domain::shared::permissions::is_staff;

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        if !is_staff(Some(&params.principal)) {
            return Err(OrderError::Forbidden);
        }

        self.logger.info(&format!(
            "Setting payment status of order {} to {}",
            params.id, params.payment_status
        ));

        let mut order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        if order.payment_status == params.payment_status {
            return Ok(order);
        }

        self.repository
            .update_payment_status(order.id, params.payment_status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;
        order.payment_status = params.payment_status;

        let notification =
            Notification::order_status_changed(order.user_id, order.id, order.payment_status);
        if let Err(e) = self.notification_repository.save(&notification).await {
            self.logger.warn(&format!(
                "Status of order {} changed but notification failed: {}",
                order.id, e
            ));
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::PaymentStatus;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{mock_logger, MockNotificationRepo, MockOrderRepo};
    use chrono::Utc;
    use uuid::Uuid;

    fn pending_order(user_id: UserId) -> Order {
        Order::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            user_id,
            Utc::now(),
            PaymentStatus::Pending,
            vec![],
        )
    }

    #[tokio::test]
    async fn should_update_status_and_notify_owner() {
        let owner = UserId::generate();
        let mut orders = MockOrderRepo::new();
        orders
            .expect_get_by_id()
            .returning(move |_| Ok(pending_order(owner)));
        orders
            .expect_update_payment_status()
            .withf(|_, status| *status == PaymentStatus::Complete)
            .times(1)
            .returning(|_, _| Ok(()));
        let mut notifications = MockNotificationRepo::new();
        notifications
            .expect_save()
            .withf(move |n| n.user_id == owner && n.message.contains("complete"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(orders),
            notification_repository: Arc::new(notifications),
            logger: mock_logger(),
        };

        let order = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                principal: Principal::staff(UserId::generate()),
                payment_status: PaymentStatus::Complete,
            })
            .await
            .unwrap();

        assert_eq!(order.payment_status, PaymentStatus::Complete);
    }

    #[tokio::test]
    async fn should_skip_write_when_status_unchanged() {
        let mut orders = MockOrderRepo::new();
        orders
            .expect_get_by_id()
            .returning(|_| Ok(pending_order(UserId::generate())));
        orders.expect_update_payment_status().never();
        let mut notifications = MockNotificationRepo::new();
        notifications.expect_save().never();

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(orders),
            notification_repository: Arc::new(notifications),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                principal: Principal::staff(UserId::generate()),
                payment_status: PaymentStatus::Pending,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_forbid_customers() {
        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            notification_repository: Arc::new(MockNotificationRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                principal: Principal::customer(UserId::generate()),
                payment_status: PaymentStatus::Failed,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::Forbidden));
    }
}
