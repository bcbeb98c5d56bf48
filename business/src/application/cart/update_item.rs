use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::dispatch::notify;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, Quantity};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartError> {
        self.logger.info(&format!(
            "Setting cart {} line {} to {}",
            params.cart_id, params.item_id, params.quantity
        ));

        let quantity = Quantity::new(params.quantity)?;

        let cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;
        if !cart.is_accessible_by(params.principal.as_ref()) {
            return Err(CartError::NotFound);
        }

        let item = cart.item(params.item_id).ok_or(CartError::ItemNotFound)?;

        let product = self
            .product_repository
            .get_by_id(item.product.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;
        if quantity.value() > product.inventory {
            return Err(CartError::InsufficientStock);
        }

        let updated = self
            .repository
            .set_item_quantity(cart.id, item.id, quantity.value())
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        if let Some(owner) = cart.owner {
            notify(
                self.notification_repository.as_ref(),
                self.logger.as_ref(),
                Notification::cart_item_quantity_changed(
                    owner,
                    &updated.product.title,
                    updated.quantity,
                ),
            )
            .await;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::product::model::Product;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{mock_logger, MockCartRepo, MockNotificationRepo, MockProductRepo};
    use chrono::Utc;
    use uuid::Uuid;

    fn product(id: Uuid, inventory: i32) -> Product {
        Product::from_repository(
            id,
            "Green Tea".to_string(),
            "green-tea".to_string(),
            None,
            450,
            inventory,
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    fn cart_with_item(item_id: Uuid) -> Cart {
        let mut cart = Cart::new(None);
        cart.items.push(CartItem {
            id: item_id,
            cart_id: cart.id,
            product: product(Uuid::new_v4(), 1).summary(),
            quantity: 1,
        });
        cart
    }

    #[tokio::test]
    async fn should_replace_quantity() {
        let item_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(cart_with_item(item_id)));
        mock_repo
            .expect_set_item_quantity()
            .withf(move |_, item, quantity| *item == item_id && *quantity == 3)
            .times(1)
            .returning(|cart_id, item_id, quantity| {
                Ok(CartItem {
                    id: item_id,
                    cart_id,
                    product: product(Uuid::new_v4(), 9).summary(),
                    quantity,
                })
            });
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|id| Ok(product(id, 9)));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(products),
            notification_repository: Arc::new(MockNotificationRepo::new()),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(UpdateCartItemParams {
                cart_id: Uuid::new_v4(),
                item_id,
                principal: None,
                quantity: 3,
            })
            .await
            .unwrap();

        assert_eq!(item.quantity, 3);
    }

    #[tokio::test]
    async fn should_reject_unknown_item() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(cart_with_item(Uuid::new_v4())));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            notification_repository: Arc::new(MockNotificationRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                cart_id: Uuid::new_v4(),
                item_id: Uuid::new_v4(),
                principal: None,
                quantity: 3,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_reject_quantity_above_stock() {
        let item_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(cart_with_item(item_id)));
        mock_repo.expect_set_item_quantity().never();
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|id| Ok(product(id, 2)));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(products),
            notification_repository: Arc::new(MockNotificationRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                cart_id: Uuid::new_v4(),
                item_id,
                principal: None,
                quantity: 3,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InsufficientStock));
    }

    #[tokio::test]
    async fn should_notify_owner_of_new_quantity() {
        let owner = UserId::generate();
        let item_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| {
            let mut cart = cart_with_item(item_id);
            cart.owner = Some(owner);
            Ok(cart)
        });
        mock_repo
            .expect_set_item_quantity()
            .returning(|cart_id, item_id, quantity| {
                Ok(CartItem {
                    id: item_id,
                    cart_id,
                    product: product(Uuid::new_v4(), 9).summary(),
                    quantity,
                })
            });
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|id| Ok(product(id, 9)));
        let mut notifications = MockNotificationRepo::new();
        notifications
            .expect_save()
            .withf(move |n| {
                n.user_id == owner
                    && !n.is_admin
                    && n.message == "Quantity of product Green Tea has been changed to 4."
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(products),
            notification_repository: Arc::new(notifications),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemParams {
                cart_id: Uuid::new_v4(),
                item_id,
                principal: Some(Principal::customer(owner)),
                quantity: 4,
            })
            .await;

        assert!(result.is_ok());
    }
}
