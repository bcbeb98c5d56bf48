use persistence::db::{
    DEFAULT_MAX_CONNECTIONS, DatabaseConfig, create_postgres_pool, run_migrations,
};
use sqlx::PgPool;

use super::env::{ConfigError, parse_or, required};

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: directory applied at start-up
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: required("DATABASE_URL")?,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            migrations_path: std::env::var("MIGRATIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Connects the pool and brings the schema up to date.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("Database ready ({} max connections)", config.max_connections);
    Ok(pool)
}
