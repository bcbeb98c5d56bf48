use std::time::Duration;

use super::env::parse_or;

pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60 * 60;

/// How often abandoned carts are swept (CART_CLEANUP_INTERVAL_SECS, default one hour).
pub struct CartCleanupConfig {
    pub interval: Duration,
}

impl CartCleanupConfig {
    pub fn from_env() -> Self {
        let secs = parse_or("CART_CLEANUP_INTERVAL_SECS", DEFAULT_CLEANUP_INTERVAL_SECS);
        Self {
            interval: Duration::from_secs(secs.max(1)),
        }
    }
}
