//! Cache Entry Module
//!
//! Defines a single cached item with optional expiry.

// == Cache Entry ==
/// One cached item: an opaque value plus lifetime metadata.
///
/// Entries never read a wall clock themselves; every expiry check takes
/// `now` as a parameter so the engine's injected clock is the single
/// source of time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (opaque, immutable once stored)
    pub value: String,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiry timestamp (Unix milliseconds), None = never expires
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry at time `now_ms` with an optional TTL.
    ///
    /// TTL validation (strictly positive) happens at the engine boundary,
    /// so `ttl_seconds` is already known to be sane here. The expiry
    /// computation saturates, so an astronomically large TTL pins
    /// `expires_at` at `u64::MAX` instead of wrapping into the past.
    pub fn new(value: String, now_ms: u64, ttl_seconds: Option<u64>) -> Self {
        let expires_at = ttl_seconds.map(|ttl| now_ms.saturating_add(ttl.saturating_mul(1000)));

        Self {
            value,
            created_at: now_ms,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at the given time.
    ///
    /// Boundary condition: an entry is expired once `now_ms` reaches
    /// `expires_at`, i.e. the check is `now >= expires_at`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }

    // == Remaining TTL ==
    /// Returns remaining lifetime in whole seconds at the given time.
    ///
    /// `Some(0)` means expired, `None` means the entry never expires.
    pub fn ttl_remaining_secs(&self, now_ms: u64) -> Option<u64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(now_ms) / 1000)
    }
}
