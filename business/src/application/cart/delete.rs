use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Deleting cart {}", params.cart_id));

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

        self.repository
            .delete(cart.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        self.logger.info(&format!("Cart {} deleted", cart.id));
        Ok(())
    }
}
