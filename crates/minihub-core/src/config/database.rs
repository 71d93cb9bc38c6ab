//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL connection settings.
///
/// Sibling groups and collections are small, so the pool is sized for a
/// handful of concurrent painters rather than bulk traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Pool size cap.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long to wait for a free connection before giving up, in seconds.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
}

fn default_max_connections() -> u32 {
    8
}

fn default_acquire_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{"url": "postgres://localhost/minihub"}"#).expect("parse");
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.acquire_timeout_seconds, 5);
    }
}
