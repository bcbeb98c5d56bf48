use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{cart_cleanup, dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, starts the stale cart
/// sweep and then serves HTTP until shutdown.
///
/// - config/: Environment driven configuration (server, CORS, database, auth, cleanup)
/// - setup/: Dependency injection, background jobs and server setup
/// - api/: Route handlers, DTOs and error mappers per resource
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.auth);

    // 6. Sweep abandoned carts in the background
    let _cleanup = cart_cleanup::spawn(
        container.clean_expired_carts_use_case.clone(),
        config.cart_cleanup.interval,
    );

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
