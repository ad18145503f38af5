//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the fetch operation (GET /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
    /// Remaining lifetime in seconds, omitted for entries without a TTL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u64>,
}

impl FetchResponse {
    /// Creates a new FetchResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>, expiration: Option<u64>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            expiration,
        }
    }
}

/// Response body for the store operation (POST /cache)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
}

impl StoreResponse {
    /// Creates a new StoreResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key,
        }
    }
}

/// Response body for the remove operation (DELETE /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    /// Success message
    pub message: String,
    /// The key that was removed
    pub key: String,
}

impl RemoveResponse {
    /// Creates a new RemoveResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Entries removed by the capacity policy
    pub evictions: u64,
    /// Entries removed because their TTL elapsed
    pub expirations: u64,
    /// Current number of live entries
    pub live_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from engine statistics
    pub fn from_stats(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            live_entries: stats.live_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with the current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_response_serialize() {
        let resp = FetchResponse::new("test_key", "test_value", Some(5));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("test_key"));
        assert!(json.contains("test_value"));
        assert!(json.contains("\"expiration\":5"));
    }

    #[test]
    fn test_fetch_response_omits_missing_expiration() {
        let resp = FetchResponse::new("test_key", "test_value", None);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("expiration"));
    }

    #[test]
    fn test_store_response_serialize() {
        let resp = StoreResponse::new("my_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("my_key"));
        assert!(json.contains("stored"));
    }

    #[test]
    fn test_remove_response_serialize() {
        let resp = RemoveResponse::new("gone_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("gone_key"));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let mut stats = crate::cache::CacheStats::new();
        for _ in 0..8 {
            stats.record_hit();
        }
        for _ in 0..2 {
            stats.record_miss();
        }

        let resp = StatsResponse::from_stats(&stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
