//! Cache Engine Module
//!
//! Facade combining the entry index, recency ordering and clock.
//! Enforces capacity by LRU eviction and expiry by lazy checks plus
//! the optional background sweep.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats, RecencyList, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::clock::Clock;
use crate::error::{CacheError, Result};

// == Cache Engine ==
/// Bounded key-value store with LRU eviction and per-entry TTL.
///
/// The index and recency list always hold exactly the same key set;
/// a mismatch between them is surfaced as `CacheError::Internal`.
/// All mutation is single-threaded from the engine's perspective;
/// callers share it behind one exclusive lock (see the API layer).
#[derive(Debug)]
pub struct CacheEngine {
    /// Key to entry mapping
    index: HashMap<String, CacheEntry>,
    /// Keys ordered from least- to most-recently-used
    order: RecencyList,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of live entries (positive)
    capacity: usize,
    /// Injected time source
    clock: Arc<dyn Clock>,
}

impl CacheEngine {
    // == Constructor ==
    /// Creates an engine with the given capacity and time source.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of live entries; a zero capacity
    ///   is clamped to one, since it would otherwise make every insert
    ///   evict the key it just stored
    /// * `clock` - Time source; inject a manual clock in tests
    pub fn new(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            index: HashMap::new(),
            order: RecencyList::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            clock,
        }
    }

    // == Set ==
    /// Stores a key-value pair with an optional TTL in seconds.
    ///
    /// Overwriting an existing key replaces its value, recomputes the
    /// expiry from the new TTL (clearing it when `ttl_seconds` is None)
    /// and promotes the key; the entry count is unchanged, so no
    /// eviction check runs. Inserting a new key beyond capacity evicts
    /// exactly the least recently used entry.
    ///
    /// Fails with `InvalidArgument` on an empty key, a non-positive TTL
    /// or oversized key/value, leaving the cache untouched.
    pub fn set(&mut self, key: String, value: String, ttl_seconds: Option<i64>) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidArgument(
                "Key cannot be empty".to_string(),
            ));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidArgument(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidArgument(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }
        let ttl = match ttl_seconds {
            Some(ttl) if ttl <= 0 => {
                return Err(CacheError::InvalidArgument(
                    "TTL must be strictly positive".to_string(),
                ));
            }
            Some(ttl) => Some(ttl as u64),
            None => None,
        };

        let now = self.clock.now_ms();
        let is_new = !self.index.contains_key(&key);

        self.index
            .insert(key.clone(), CacheEntry::new(value, now, ttl));
        self.order.promote(&key);

        if is_new && self.index.len() > self.capacity {
            self.evict_lru()?;
        }

        debug_assert_eq!(self.index.len(), self.order.len());
        self.stats.set_live_entries(self.index.len());
        Ok(())
    }

    // == Get ==
    /// Retrieves the value stored under `key` and promotes it.
    ///
    /// An entry whose expiry has passed is removed on the spot and
    /// reported as `NotFound`, indistinguishable from an absent key.
    /// Note that a successful lookup mutates recency order.
    pub fn get(&mut self, key: &str) -> Result<String> {
        let now = self.clock.now_ms();

        match self.index.get(key) {
            Some(entry) if entry.is_expired(now) => {
                self.remove_expired(key);
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.order.promote(key);
                Ok(value)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Remaining TTL ==
    /// Reports the remaining lifetime of a live entry in whole seconds.
    ///
    /// Does not touch recency or counters. Returns `None` for absent,
    /// expired or never-expiring entries; the API layer uses it to
    /// annotate fetch responses.
    pub fn ttl_remaining_secs(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        self.index
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .and_then(|entry| entry.ttl_remaining_secs(now))
    }

    // == Delete ==
    /// Removes the entry stored under `key`.
    ///
    /// Deleting an expired-but-unswept key reports `NotFound` exactly
    /// like deleting an absent one, and drops the stale entry as a
    /// side effect.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let now = self.clock.now_ms();

        match self.index.get(key) {
            Some(entry) if entry.is_expired(now) => {
                self.remove_expired(key);
                Err(CacheError::NotFound(key.to_string()))
            }
            Some(_) => {
                self.index.remove(key);
                self.order.remove(key);
                self.stats.set_live_entries(self.index.len());
                Ok(())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Sweep Expired ==
    /// Removes up to `max_removals` expired entries.
    ///
    /// The batch bound keeps a single sweep pass short so the
    /// background task cannot hold the lock long enough to starve
    /// foreground callers. Returns the number of entries removed.
    pub fn sweep_expired(&mut self, max_removals: usize) -> usize {
        let now = self.clock.now_ms();

        let expired_keys: Vec<String> = self
            .index
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .take(max_removals)
            .collect();

        for key in &expired_keys {
            self.index.remove(key);
            self.order.remove(key);
        }

        let count = expired_keys.len();
        debug_assert_eq!(self.index.len(), self.order.len());
        self.stats.record_expirations(count as u64);
        self.stats.set_live_entries(self.index.len());
        count
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_live_entries(self.index.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically present entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Evicts the single least recently used entry.
    ///
    /// Both lookups must succeed; anything else means the index and the
    /// recency list have diverged.
    fn evict_lru(&mut self) -> Result<()> {
        let victim = self.order.pop_lru().ok_or_else(|| {
            CacheError::Internal("recency list empty while index is over capacity".to_string())
        })?;

        if self.index.remove(&victim).is_none() {
            return Err(CacheError::Internal(format!(
                "recency list held key '{}' missing from index",
                victim
            )));
        }

        self.stats.record_eviction();
        Ok(())
    }

    /// Drops a lazily discovered expired entry and counts it.
    fn remove_expired(&mut self, key: &str) {
        self.index.remove(key);
        self.order.remove(key);
        self.stats.record_expirations(1);
        self.stats.set_live_entries(self.index.len());
    }
}
