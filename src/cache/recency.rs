//! Recency Ordering Module
//!
//! Tracks keys from most- to least-recently-used for LRU eviction.

use linked_hash_map::LinkedHashMap;

// == Recency List ==
/// Access-order list of cache keys.
///
/// Backed by a `LinkedHashMap` whose insertion order doubles as recency
/// order: the back holds the most recently touched key, the front holds
/// the eviction candidate. Promote and pop are both O(1), and ties
/// between entries touched within the same clock tick resolve by list
/// position rather than timestamp comparison.
#[derive(Debug, Default)]
pub struct RecencyList {
    order: LinkedHashMap<String, ()>,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty recency list.
    pub fn new() -> Self {
        Self {
            order: LinkedHashMap::new(),
        }
    }

    // == Promote ==
    /// Marks a key as most recently used, inserting it if new.
    pub fn promote(&mut self, key: &str) {
        if self.order.get_refresh(key).is_none() {
            self.order.insert(key.to_string(), ());
        }
    }

    // == Remove ==
    /// Removes a key from the list. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        self.order.remove(key);
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used key, if any.
    pub fn pop_lru(&mut self) -> Option<String> {
        self.order.pop_front().map(|(key, ())| key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
