use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::collection::repository::CollectionRepositoryPostgres;
use persistence::customer::repository::CustomerRepositoryPostgres;
use persistence::notification::repository::NotificationRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::review::repository::ReviewRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::{Argon2PasswordHasher, JwtTokenService};

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clean_expired::CleanExpiredCartsUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::get_by_id::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_item::UpdateCartItemUseCaseImpl;
use business::application::collection::create::CreateCollectionUseCaseImpl;
use business::application::collection::delete::DeleteCollectionUseCaseImpl;
use business::application::collection::get_all::GetAllCollectionsUseCaseImpl;
use business::application::collection::get_by_id::GetCollectionByIdUseCaseImpl;
use business::application::collection::update::UpdateCollectionUseCaseImpl;
use business::application::customer::get_profile::GetCustomerProfileUseCaseImpl;
use business::application::customer::update_profile::UpdateCustomerProfileUseCaseImpl;
use business::application::notification::create::CreateNotificationUseCaseImpl;
use business::application::notification::delete::DeleteNotificationUseCaseImpl;
use business::application::notification::get_all::GetNotificationsUseCaseImpl;
use business::application::notification::mark_read::MarkNotificationReadUseCaseImpl;
use business::application::order::get_all::GetOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::review::create::CreateReviewUseCaseImpl;
use business::application::review::delete::DeleteReviewUseCaseImpl;
use business::application::review::get_all::GetReviewsUseCaseImpl;
use business::application::user::get_me::GetMeUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::refresh::RefreshTokenUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::update_me::UpdateMeUseCaseImpl;
use business::domain::cart::use_cases::clean_expired::CleanExpiredCartsUseCase;
use business::domain::logger::Logger;
use business::domain::user::services::TokenService;

use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::collection::routes::CollectionApi;
use crate::api::customer::routes::CustomerApi;
use crate::api::health::routes::HealthApi;
use crate::api::notification::routes::NotificationApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::api::review::routes::ReviewApi;
use crate::api::user::routes::UserApi;
use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub auth_api: AuthApi,
    pub user_api: UserApi,
    pub customer_api: CustomerApi,
    pub collection_api: CollectionApi,
    pub product_api: ProductApi,
    pub review_api: ReviewApi,
    pub cart_api: CartApi,
    pub order_api: OrderApi,
    pub notification_api: NotificationApi,
    /// Shared with the bearer checker through request data.
    pub token_service: Arc<dyn TokenService>,
    pub clean_expired_carts_use_case: Arc<dyn CleanExpiredCartsUseCase>,
}

fn logger(component: &'static str) -> Arc<dyn Logger> {
    Arc::new(TracingLogger::new(component))
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, auth: &AuthConfig) -> Self {
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let customer_repository = Arc::new(CustomerRepositoryPostgres::new(pool.clone()));
        let collection_repository = Arc::new(CollectionRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let notification_repository = Arc::new(NotificationRepositoryPostgres::new(pool));

        let hasher = Arc::new(Argon2PasswordHasher::new());
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
            &auth.jwt_secret,
            auth.access_ttl,
            auth.refresh_ttl,
        ));

        // Auth and account use cases
        let auth_logger = logger("auth");
        let auth_api = AuthApi::new(
            Arc::new(RegisterUserUseCaseImpl {
                repository: user_repository.clone(),
                hasher: hasher.clone(),
                logger: auth_logger.clone(),
            }),
            Arc::new(LoginUseCaseImpl {
                repository: user_repository.clone(),
                hasher,
                tokens: token_service.clone(),
                logger: auth_logger.clone(),
            }),
            Arc::new(RefreshTokenUseCaseImpl {
                repository: user_repository.clone(),
                tokens: token_service.clone(),
                logger: auth_logger,
            }),
        );

        let user_logger = logger("users");
        let user_api = UserApi::new(
            Arc::new(GetMeUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(UpdateMeUseCaseImpl {
                repository: user_repository,
                logger: user_logger,
            }),
        );

        let customer_logger = logger("customers");
        let customer_api = CustomerApi::new(
            Arc::new(GetCustomerProfileUseCaseImpl {
                repository: customer_repository.clone(),
                logger: customer_logger.clone(),
            }),
            Arc::new(UpdateCustomerProfileUseCaseImpl {
                repository: customer_repository.clone(),
                logger: customer_logger,
            }),
        );

        // Catalog use cases
        let catalog_logger = logger("catalog");
        let collection_api = CollectionApi::new(
            Arc::new(CreateCollectionUseCaseImpl {
                repository: collection_repository.clone(),
                product_repository: product_repository.clone(),
                logger: catalog_logger.clone(),
            }),
            Arc::new(GetAllCollectionsUseCaseImpl {
                repository: collection_repository.clone(),
                logger: catalog_logger.clone(),
            }),
            Arc::new(GetCollectionByIdUseCaseImpl {
                repository: collection_repository.clone(),
                logger: catalog_logger.clone(),
            }),
            Arc::new(UpdateCollectionUseCaseImpl {
                repository: collection_repository.clone(),
                product_repository: product_repository.clone(),
                logger: catalog_logger.clone(),
            }),
            Arc::new(DeleteCollectionUseCaseImpl {
                repository: collection_repository.clone(),
                logger: catalog_logger.clone(),
            }),
        );

        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                collection_repository: collection_repository.clone(),
                logger: catalog_logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: catalog_logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: catalog_logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                collection_repository,
                logger: catalog_logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: catalog_logger,
            }),
        );

        let review_logger = logger("reviews");
        let review_api = ReviewApi::new(
            Arc::new(CreateReviewUseCaseImpl {
                repository: review_repository.clone(),
                product_repository: product_repository.clone(),
                logger: review_logger.clone(),
            }),
            Arc::new(GetReviewsUseCaseImpl {
                repository: review_repository.clone(),
                product_repository: product_repository.clone(),
                logger: review_logger.clone(),
            }),
            Arc::new(DeleteReviewUseCaseImpl {
                repository: review_repository,
                logger: review_logger,
            }),
        );

        // Cart use cases
        let cart_logger = logger("carts");
        let cart_api = CartApi::new(
            Arc::new(CreateCartUseCaseImpl {
                repository: cart_repository.clone(),
                notification_repository: notification_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(GetCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(DeleteCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(AddCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                notification_repository: notification_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(UpdateCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository,
                notification_repository: notification_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                notification_repository: notification_repository.clone(),
                logger: cart_logger.clone(),
            }),
        );
        let clean_expired_carts_use_case: Arc<dyn CleanExpiredCartsUseCase> =
            Arc::new(CleanExpiredCartsUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger,
            });

        // Order and notification use cases
        let order_logger = logger("orders");
        let order_api = OrderApi::new(
            Arc::new(PlaceOrderUseCaseImpl {
                repository: order_repository.clone(),
                cart_repository,
                customer_repository,
                notification_repository: notification_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(GetOrdersUseCaseImpl {
                repository: order_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(GetOrderByIdUseCaseImpl {
                repository: order_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(UpdateOrderStatusUseCaseImpl {
                repository: order_repository,
                notification_repository: notification_repository.clone(),
                logger: order_logger,
            }),
        );

        let notification_logger = logger("notifications");
        let notification_api = NotificationApi::new(
            Arc::new(GetNotificationsUseCaseImpl {
                repository: notification_repository.clone(),
                logger: notification_logger.clone(),
            }),
            Arc::new(CreateNotificationUseCaseImpl {
                repository: notification_repository.clone(),
                logger: notification_logger.clone(),
            }),
            Arc::new(MarkNotificationReadUseCaseImpl {
                repository: notification_repository.clone(),
                logger: notification_logger.clone(),
            }),
            Arc::new(DeleteNotificationUseCaseImpl {
                repository: notification_repository,
                logger: notification_logger,
            }),
        );

        Self {
            health_api,
            auth_api,
            user_api,
            customer_api,
            collection_api,
            product_api,
            review_api,
            cart_api,
            order_api,
            notification_api,
            token_service,
            clean_expired_carts_use_case,
        }
    }
}
