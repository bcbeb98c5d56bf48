use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::dispatch::notify;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self, params: CreateCartParams) -> Result<Cart, CartError> {
        let cart = Cart::new(params.principal.map(|p| p.user_id));
        self.repository.create(&cart).await?;

        match cart.owner {
            Some(owner) => {
                self.logger
                    .info(&format!("Cart {} created for user {}", cart.id, owner));
                notify(
                    self.notification_repository.as_ref(),
                    self.logger.as_ref(),
                    Notification::cart_created(owner, cart.id),
                )
                .await;
            }
            None => self
                .logger
                .info(&format!("Anonymous cart {} created", cart.id)),
        }
        Ok(cart)
    }
}
