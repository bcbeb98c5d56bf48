use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct RefreshTokenParams {
    pub refresh_token: String,
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    /// Returns a fresh access token.
    async fn execute(&self, params: RefreshTokenParams) -> Result<String, UserError>;
}
