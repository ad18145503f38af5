//! Cache Module
//!
//! Bounded in-memory key-value storage with LRU eviction and TTL expiry.

mod engine;
mod entry;
mod recency;
mod stats;


// Re-export public types
pub use engine::CacheEngine;
pub use entry::CacheEntry;
pub use recency::RecencyList;
pub use stats::CacheStats;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
