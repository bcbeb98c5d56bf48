use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::expiry_cutoff;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clean_expired::{
    CleanExpiredCartsParams, CleanExpiredCartsUseCase,
};
use crate::domain::logger::Logger;

pub struct CleanExpiredCartsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CleanExpiredCartsUseCase for CleanExpiredCartsUseCaseImpl {
    async fn execute(&self, params: CleanExpiredCartsParams) -> Result<u64, CartError> {
        let cutoff = expiry_cutoff(params.now);
        self.logger
            .debug(&format!("Sweeping carts inactive since {}", cutoff));

        let deleted = self.repository.delete_inactive_since(cutoff).await?;

        if deleted > 0 {
            self.logger
                .info(&format!("Deleted {} expired carts", deleted));
        }
        Ok(deleted)
    }
}
