use poem_openapi::Object;

use business::domain::user::services::TokenPair;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    /// At least 8 characters
    #[oai(write_only)]
    pub password: String,
    /// Must repeat `password`
    #[oai(write_only)]
    pub password_confirmation: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    #[oai(write_only)]
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Object)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access: pair.access,
            refresh: pair.refresh,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AccessTokenResponse {
    pub access: String,
}
