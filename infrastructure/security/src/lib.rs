pub mod argon2_hasher;
pub mod jwt_token_service;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt_token_service::JwtTokenService;
