//! Mocks for the domain ports, shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::collection::model::Collection;
use crate::domain::collection::repository::CollectionRepository;
use crate::domain::customer::model::Customer;
use crate::domain::customer::repository::CustomerRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::order::model::{Order, PaymentStatus};
use crate::domain::order::repository::OrderRepository;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductFilter;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::permissions::Principal;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenKind, TokenService};

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
        async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError>;
        async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, password: &str) -> Result<String, UserError>;
        fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError>;
    }
}

mock! {
    pub Tokens {}

    impl TokenService for Tokens {
        fn issue(&self, principal: &Principal, kind: TokenKind) -> Result<String, UserError>;
        fn verify(&self, token: &str, expected: TokenKind) -> Result<Principal, UserError>;
    }
}

mock! {
    pub CustomerRepo {}

    #[async_trait]
    impl CustomerRepository for CustomerRepo {
        async fn get_or_create(&self, user_id: &UserId) -> Result<Customer, RepositoryError>;
        async fn save(&self, customer: &Customer) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CollectionRepo {}

    #[async_trait]
    impl CollectionRepository for CollectionRepo {
        async fn get_all(&self) -> Result<Vec<Collection>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Collection, RepositoryError>;
        async fn save(&self, collection: &Collection) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find(
            &self,
            filter: &ProductFilter,
            page: PageRequest,
        ) -> Result<Page<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn count_order_items(&self, id: Uuid) -> Result<i64, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn create(&self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn upsert_item(
            &self,
            cart_id: Uuid,
            product_id: Uuid,
            quantity: i32,
        ) -> Result<CartItem, RepositoryError>;
        async fn set_item_quantity(
            &self,
            cart_id: Uuid,
            item_id: Uuid,
            quantity: i32,
        ) -> Result<CartItem, RepositoryError>;
        async fn delete_item(&self, cart_id: Uuid, item_id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn place_from_cart(
            &self,
            cart_id: Uuid,
            customer: &Customer,
        ) -> Result<Order, RepositoryError>;
        async fn get_all(&self, user_id: Option<UserId>) -> Result<Vec<Order>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
        async fn update_payment_status(
            &self,
            id: Uuid,
            status: PaymentStatus,
        ) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ReviewRepo {}

    #[async_trait]
    impl ReviewRepository for ReviewRepo {
        async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
        async fn get_by_id(&self, product_id: Uuid, id: Uuid) -> Result<Review, RepositoryError>;
        async fn exists_for(&self, product_id: Uuid, user_id: &UserId) -> Result<bool, RepositoryError>;
        async fn save(&self, review: &Review) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub NotificationRepo {}

    #[async_trait]
    impl NotificationRepository for NotificationRepo {
        async fn get_for_user(
            &self,
            user_id: &UserId,
            since: Option<DateTime<Utc>>,
        ) -> Result<Vec<Notification>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Notification, RepositoryError>;
        async fn save(&self, notification: &Notification) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}
