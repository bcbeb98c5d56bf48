use chrono::Duration;

use super::env::{ConfigError, parse_or, required};

pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Token signing settings
///
/// Environment variables:
/// - JWT_SECRET: HS256 signing key (required)
/// - ACCESS_TOKEN_TTL_SECS: access token lifetime (default: 900)
/// - REFRESH_TOKEN_TTL_SECS: refresh token lifetime (default: 86400)
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt_secret: required("JWT_SECRET")?,
            access_ttl: Duration::seconds(
                parse_or("ACCESS_TOKEN_TTL_SECS", DEFAULT_ACCESS_TOKEN_TTL_SECS).max(1),
            ),
            refresh_ttl: Duration::seconds(
                parse_or("REFRESH_TOKEN_TTL_SECS", DEFAULT_REFRESH_TOKEN_TTL_SECS).max(1),
            ),
        })
    }
}
