use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::dispatch::notify;
use crate::domain::cart::repository::CartRepository;
use crate::domain::customer::repository::CustomerRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub customer_repository: Arc<dyn CustomerRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "User {} placing order from cart {}",
            params.principal.user_id, params.cart_id
        ));

        let cart = self
            .cart_repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::CartNotFound,
                other => OrderError::Repository(other),
            })?;
        if !cart.is_accessible_by(Some(&params.principal)) {
            return Err(OrderError::CartNotFound);
        }
        if cart.is_empty() {
            return Err(OrderError::CartEmpty);
        }

        let customer = self
            .customer_repository
            .get_or_create(&params.principal.user_id)
            .await?;

        // The cart is read again under lock; it may have changed since the check above.
        let order = self
            .repository
            .place_from_cart(cart.id, &customer)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::CartNotFound,
                RepositoryError::Conflict => OrderError::CartEmpty,
                other => OrderError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Order {} placed with {} items totalling {}",
            order.id,
            order.items.len(),
            order.total_price()
        ));

        let notifications = std::iter::once(Notification::order_placed(order.user_id, order.id))
            .chain(
                order
                    .items
                    .iter()
                    .map(|item| Notification::order_item_added(order.user_id, &item.product.title)),
            );
        for notification in notifications {
            notify(
                self.notification_repository.as_ref(),
                self.logger.as_ref(),
                notification,
            )
            .await;
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartItem};
    use crate::domain::customer::model::Customer;
    use crate::domain::product::model::ProductSummary;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{
        mock_logger, MockCartRepo, MockCustomerRepo, MockNotificationRepo, MockOrderRepo,
    };
    use uuid::Uuid;

    fn filled_cart(owner: Option<UserId>) -> Cart {
        let mut cart = Cart::new(owner);
        for (title, unit_price, quantity) in [("Product A", 300, 2), ("Product B", 150, 1)] {
            cart.items.push(CartItem {
                id: Uuid::new_v4(),
                cart_id: cart.id,
                product: ProductSummary {
                    id: Uuid::new_v4(),
                    title: title.to_string(),
                    unit_price,
                },
                quantity,
            });
        }
        cart
    }

    fn customers() -> MockCustomerRepo {
        let mut repo = MockCustomerRepo::new();
        repo.expect_get_or_create()
            .returning(|id| Ok(Customer::for_user(*id)));
        repo
    }

    struct Fixture {
        orders: MockOrderRepo,
        carts: MockCartRepo,
        customers: MockCustomerRepo,
        notifications: MockNotificationRepo,
    }

    impl Fixture {
        fn use_case(self) -> PlaceOrderUseCaseImpl {
            PlaceOrderUseCaseImpl {
                repository: Arc::new(self.orders),
                cart_repository: Arc::new(self.carts),
                customer_repository: Arc::new(self.customers),
                notification_repository: Arc::new(self.notifications),
                logger: mock_logger(),
            }
        }
    }

    #[tokio::test]
    async fn should_place_order_from_every_cart_line_and_notify() {
        let user_id = UserId::generate();
        let cart = filled_cart(Some(user_id));
        let cart_id = cart.id;
        let snapshot = cart.clone();

        let mut carts = MockCartRepo::new();
        carts
            .expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));

        let mut orders = MockOrderRepo::new();
        orders
            .expect_place_from_cart()
            .withf(move |id, customer| *id == cart_id && customer.user_id == user_id)
            .times(1)
            .returning(move |_, customer| Ok(Order::from_cart(customer, &snapshot).unwrap()));

        let mut notifications = MockNotificationRepo::new();
        notifications
            .expect_save()
            .withf(move |n| n.user_id == user_id && n.message.contains("placed"))
            .times(1)
            .returning(|_| Ok(()));
        notifications
            .expect_save()
            .withf(move |n| {
                n.user_id == user_id && n.is_admin && n.message.ends_with("added to your order.")
            })
            .times(2)
            .returning(|_| Ok(()));

        let use_case = Fixture {
            orders,
            carts,
            customers: customers(),
            notifications,
        }
        .use_case();

        let order = use_case
            .execute(PlaceOrderParams {
                cart_id,
                principal: Principal::customer(user_id),
            })
            .await
            .unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].unit_price, 300);
        assert_eq!(order.items[1].unit_price, 150);
        assert_eq!(order.total_price(), 750);
    }

    #[tokio::test]
    async fn should_reject_empty_cart_without_writing() {
        let mut carts = MockCartRepo::new();
        carts.expect_get_by_id().returning(|_| Ok(Cart::new(None)));
        let mut orders = MockOrderRepo::new();
        orders.expect_place_from_cart().never();

        let use_case = Fixture {
            orders,
            carts,
            customers: MockCustomerRepo::new(),
            notifications: MockNotificationRepo::new(),
        }
        .use_case();

        let result = use_case
            .execute(PlaceOrderParams {
                cart_id: Uuid::new_v4(),
                principal: Principal::customer(UserId::generate()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::CartEmpty));
    }

    #[tokio::test]
    async fn should_reject_missing_cart() {
        let mut carts = MockCartRepo::new();
        carts
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = Fixture {
            orders: MockOrderRepo::new(),
            carts,
            customers: MockCustomerRepo::new(),
            notifications: MockNotificationRepo::new(),
        }
        .use_case();

        let result = use_case
            .execute(PlaceOrderParams {
                cart_id: Uuid::new_v4(),
                principal: Principal::customer(UserId::generate()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::CartNotFound));
    }

    #[tokio::test]
    async fn should_treat_foreign_cart_as_missing() {
        let mut carts = MockCartRepo::new();
        carts
            .expect_get_by_id()
            .returning(|_| Ok(filled_cart(Some(UserId::generate()))));
        let mut orders = MockOrderRepo::new();
        orders.expect_place_from_cart().never();

        let use_case = Fixture {
            orders,
            carts,
            customers: MockCustomerRepo::new(),
            notifications: MockNotificationRepo::new(),
        }
        .use_case();

        let result = use_case
            .execute(PlaceOrderParams {
                cart_id: Uuid::new_v4(),
                principal: Principal::customer(UserId::generate()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::CartNotFound));
    }

    #[tokio::test]
    async fn should_report_cart_emptied_during_checkout() {
        let mut carts = MockCartRepo::new();
        carts
            .expect_get_by_id()
            .returning(|_| Ok(filled_cart(None)));
        let mut orders = MockOrderRepo::new();
        orders
            .expect_place_from_cart()
            .returning(|_, _| Err(RepositoryError::Conflict));
        let mut notifications = MockNotificationRepo::new();
        notifications.expect_save().never();

        let use_case = Fixture {
            orders,
            carts,
            customers: customers(),
            notifications,
        }
        .use_case();

        let result = use_case
            .execute(PlaceOrderParams {
                cart_id: Uuid::new_v4(),
                principal: Principal::customer(UserId::generate()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::CartEmpty));
    }

    #[tokio::test]
    async fn should_keep_order_when_notification_fails() {
        let cart = filled_cart(None);
        let snapshot = cart.clone();

        let mut carts = MockCartRepo::new();
        carts
            .expect_get_by_id()
            .returning(move |_| Ok(cart.clone()));
        let mut orders = MockOrderRepo::new();
        orders
            .expect_place_from_cart()
            .returning(move |_, customer| Ok(Order::from_cart(customer, &snapshot).unwrap()));
        let mut notifications = MockNotificationRepo::new();
        notifications
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = Fixture {
            orders,
            carts,
            customers: customers(),
            notifications,
        }
        .use_case();

        let result = use_case
            .execute(PlaceOrderParams {
                cart_id: Uuid::new_v4(),
                principal: Principal::customer(UserId::generate()),
            })
            .await;

        assert!(result.is_ok());
    }
}
