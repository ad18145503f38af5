//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the store operation (POST /cache)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `expiration`: Optional TTL in whole seconds; omitted means the
///   entry never expires
///
/// `expiration` is signed so that a client sending a non-positive
/// value gets a proper bad-request response instead of a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional TTL in seconds
    #[serde(default)]
    pub expiration: Option<i64>,
}
