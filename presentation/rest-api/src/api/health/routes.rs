use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    /// "up" or "down"
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

pub struct HealthApi {
    pool: PgPool,
}

impl HealthApi {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Public liveness check. Also reports whether the database pool can
    /// serve a trivial query, without failing the check when it cannot.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let database_up = sqlx::query("SELECT 1").execute(&self.pool).await.is_ok();
        if !database_up {
            tracing::warn!("Health check could not reach the database");
        }

        Json(HealthCheckResponse {
            status: if database_up { "healthy" } else { "degraded" }.to_string(),
            database: if database_up { "up" } else { "down" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
