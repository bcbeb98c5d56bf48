use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::cart::errors::CartError;

pub struct CleanExpiredCartsParams {
    pub now: DateTime<Utc>,
}

#[async_trait]
pub trait CleanExpiredCartsUseCase: Send + Sync {
    /// Returns the number of deleted carts.
    async fn execute(&self, params: CleanExpiredCartsParams) -> Result<u64, CartError>;
}
