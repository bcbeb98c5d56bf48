use business::domain::errors::RepositoryError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!(target: "Backend -- ", "Database connection failed: {}", e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!(target: "Backend -- ", "Migrations directory not found: {}", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!(target: "Backend -- ", "Migration failed: {}", e);
            DatabaseError::MigrationError
        })
}

/// Translates driver errors into the domain's repository errors.
///
/// Unique violations become `Duplicated`, foreign key violations `Conflict`
/// and missing rows `NotFound`. Anything else is logged and reported as a
/// generic database error.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::Conflict,
        _ => {
            tracing::error!(target: "Backend -- ", "Database operation failed: {}", error);
            RepositoryError::DatabaseError
        }
    }
}

/// Escapes `LIKE` wildcards so user input only matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert!(map_sqlx_error(sqlx::Error::RowNotFound).is_not_found());
    }

    #[test]
    fn should_map_pool_errors_to_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        ));
    }

    #[test]
    fn should_escape_like_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("mug"), "mug");
    }

    #[test]
    fn should_keep_at_least_one_connection() {
        let config = DatabaseConfig::new("postgres://localhost/shop".to_string())
            .with_max_connections(0);
        assert_eq!(config.max_connections, 1);
    }
}
