use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::services::TokenPair;

pub struct LoginParams {
    pub username: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<TokenPair, UserError>;
}
