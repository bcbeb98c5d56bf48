use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_by_id::{GetCartParams, GetCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .debug(&format!("Fetching cart {}", params.cart_id));

        let cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        // Someone else's cart looks the same as a missing one.
        if !cart.is_accessible_by(params.principal.as_ref()) {
            return Err(CartError::NotFound);
        }
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{mock_logger, MockCartRepo};
    use uuid::Uuid;

    fn owned_by(owner: UserId) -> MockCartRepo {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| {
            let mut cart = Cart::new(Some(owner));
            cart.id = Uuid::new_v4();
            Ok(cart)
        });
        mock_repo
    }

    #[tokio::test]
    async fn should_return_anonymous_cart_to_anyone() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Cart::new(None)));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartParams {
                cart_id: Uuid::new_v4(),
                principal: None,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_hide_owned_cart_from_other_users() {
        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(owned_by(UserId::generate())),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartParams {
                cart_id: Uuid::new_v4(),
                principal: Some(Principal::customer(UserId::generate())),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_hide_owned_cart_from_anonymous_callers() {
        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(owned_by(UserId::generate())),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartParams {
                cart_id: Uuid::new_v4(),
                principal: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_show_owned_cart_to_staff() {
        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(owned_by(UserId::generate())),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartParams {
                cart_id: Uuid::new_v4(),
                principal: Some(Principal::staff(UserId::generate())),
            })
            .await;

        assert!(result.is_ok());
    }
}
