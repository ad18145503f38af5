//! Configuration Module
//!
//! Loads service configuration from environment variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The cache itself always receives its configuration through
/// this struct, never from hidden globals, so tests can build isolated
/// instances freely.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of live cache entries (always positive)
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
    /// Maximum expired entries removed per sweep pass
    pub sweep_batch: usize,
}

impl Config {
    /// Creates a Config from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 1)
    /// - `SWEEP_BATCH` - Max removals per sweep pass (default: 256)
    pub fn from_env() -> Self {
        Self {
            // A zero capacity would make every insert evict itself.
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000_usize)
                .max(1),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            sweep_batch: env::var("SWEEP_BATCH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(256),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            server_port: 8080,
            sweep_interval: 1,
            sweep_batch: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.sweep_interval, 1);
        assert_eq!(config.sweep_batch, 256);
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("SWEEP_BATCH");

        let config = Config::from_env();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.sweep_interval, 1);
        assert_eq!(config.sweep_batch, 256);
    }
}
