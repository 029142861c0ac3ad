//! Cache Statistics Module
//!
//! Counters describing how a cache has been used.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache usage counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// `get` calls that found their key
    pub hits: u64,
    /// `get` calls that returned `KeyNotFound`
    pub misses: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// `put` calls that made a new key resident
    pub inserts: u64,
    /// `put` calls that overwrote a resident key
    pub updates: u64,
    /// Resident entries at snapshot time
    pub total_entries: usize,
    /// Fixed capacity of the cache
    pub capacity: usize,
}

impl CacheStats {
    /// Creates zeroed counters for a cache of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }
}
