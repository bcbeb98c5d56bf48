use super::{
    auth_config::AuthConfig, cart_cleanup_config::CartCleanupConfig, cors_config,
    database_config::DatabaseSettings, env::ConfigError, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub auth: AuthConfig,
    pub cart_cleanup: CartCleanupConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            auth: AuthConfig::from_env()?,
            cart_cleanup: CartCleanupConfig::from_env(),
        })
    }
}
