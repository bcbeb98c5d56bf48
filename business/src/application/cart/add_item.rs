use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::dispatch::notify;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, Quantity};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartItem, CartError> {
        self.logger.info(&format!(
            "Adding {} x product {} to cart {}",
            params.quantity, params.product_id, params.cart_id
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

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let existing = cart
            .item_for_product(product.id)
            .map(|item| item.quantity)
            .unwrap_or(0);
        let total = quantity.added_to(existing)?;
        if total.value() > product.inventory {
            self.logger.warn(&format!(
                "Product {} has {} in stock, {} requested",
                product.id,
                product.inventory,
                total.value()
            ));
            return Err(CartError::InsufficientStock);
        }

        let item = match self
            .repository
            .upsert_item(cart.id, product.id, quantity.value())
            .await
        {
            Ok(item) => item,
            Err(RepositoryError::NotFound) => return Err(CartError::NotFound),
            // Either the cart was swept or the product deleted meanwhile.
            Err(RepositoryError::Conflict) => {
                return Err(match self.product_repository.get_by_id(product.id).await {
                    Err(RepositoryError::NotFound) => CartError::ProductNotFound,
                    _ => CartError::NotFound,
                });
            }
            Err(other) => return Err(CartError::Repository(other)),
        };

        self.logger.info(&format!(
            "Cart {} line {} now holds {}",
            cart.id, item.id, item.quantity
        ));

        if let Some(owner) = cart.owner {
            let notification = if existing == 0 {
                Notification::cart_item_added(owner, &product.title)
            } else {
                Notification::cart_item_quantity_changed(owner, &product.title, item.quantity)
            };
            notify(
                self.notification_repository.as_ref(),
                self.logger.as_ref(),
                notification,
            )
            .await;
        }
        Ok(item)
    }
}
