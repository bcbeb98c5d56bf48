use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::dispatch::notify;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<(), CartError> {
        self.logger.info(&format!(
            "Removing line {} from cart {}",
            params.item_id, params.cart_id
        ));

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

        self.repository
            .delete_item(cart.id, item.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        if let Some(owner) = cart.owner {
            notify(
                self.notification_repository.as_ref(),
                self.logger.as_ref(),
                Notification::cart_item_removed(owner, &item.product.title),
            )
            .await;
        }
        Ok(())
    }
}
