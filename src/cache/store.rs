//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::config::Config;
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const PREALLOC_LIMIT: usize = 4096;

// == LRU Cache ==
/// Fixed-capacity key-value cache with strict least-recently-used eviction.
///
/// `get` and `put` are O(1): the index maps each key to its entry, and every
/// entry holds a handle to its node in the recency list, so moving or
/// evicting a key never scans the cache.
///
/// The cache does no locking of its own. Wrap it in a
/// [`SharedCache`](crate::sync::SharedCache) to use it from several tasks.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to value (and recency node) index
    entries: HashMap<K, CacheEntry<V>>,
    /// Recency order, least recent at the front
    lru: LruTracker<K>,
    /// Usage counters
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with `InvalidConfiguration` if `capacity` is negative or does
    /// not fit in `usize`.
    pub fn new(capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| {
            CacheError::InvalidConfiguration(format!(
                "capacity {} is out of range, expected 0..={}",
                capacity,
                usize::MAX
            ))
        })?;
        Ok(Self::with_capacity(capacity))
    }

    /// Infallible constructor for an already unsigned capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let reserve = capacity.min(PREALLOC_LIMIT);
        debug!(capacity, "creating LRU cache");
        Self {
            entries: HashMap::with_capacity(reserve),
            lru: LruTracker::with_capacity(reserve),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    /// Creates a cache sized from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Get ==
    /// Returns a copy of the value stored under `key` and marks the key as
    /// most recently used.
    ///
    /// A missing key yields `KeyNotFound`, the ordinary miss outcome.
    pub fn get<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        match self.entries.get(key) {
            Some(entry) => {
                self.lru.move_to_back(entry.handle);
                self.stats.record_hit();
                trace!("cache hit");
                Ok(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                trace!("cache miss");
                Err(CacheError::KeyNotFound)
            }
        }
    }

    // == Put ==
    /// Stores `value` under `key` and marks the key as most recently used.
    ///
    /// Overwriting a resident key never evicts. Inserting a new key into a
    /// full cache first evicts the least recently used entry. On a
    /// zero-capacity cache this is a no-op.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.replace(value);
            self.lru.move_to_back(entry.handle);
            self.stats.record_update();
            return;
        }

        if self.capacity == 0 {
            trace!("put ignored by zero-capacity cache");
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        let handle = self.lru.push_back(key.clone());
        self.entries.insert(key, CacheEntry::new(value, handle));
        self.stats.record_insert();
    }

    /// Drops the front of the recency order from both structures.
    fn evict_oldest(&mut self) -> Option<K> {
        let key = self.lru.pop_front()?;
        self.entries.remove(&key);
        self.stats.record_eviction();
        debug!(
            resident = self.entries.len(),
            capacity = self.capacity,
            "evicted least recently used entry"
        );
        Some(key)
    }

    // == Peek ==
    /// Returns the value under `key` without touching its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns true if `key` is resident. Does not touch recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Iterates resident keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.lru.iter()
    }

    /// Returns the next key `put` would evict, if any.
    pub fn peek_lru(&self) -> Option<&K> {
        self.lru.peek_front()
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats
    }

    /// Checks that the index and the recency order hold the same keys.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.entries.len() != self.lru.len() {
            return Err(format!(
                "index holds {} keys, tracker holds {}",
                self.entries.len(),
                self.lru.len()
            ));
        }
        if self.entries.len() > self.capacity {
            return Err(format!(
                "{} resident entries exceed capacity {}",
                self.entries.len(),
                self.capacity
            ));
        }
        for key in self.lru.iter() {
            match self.entries.get(key) {
                Some(entry) if self.lru.get(entry.handle) == Some(key) => {}
                Some(_) => return Err("entry handle points at another key".to_string()),
                None => return Err("tracked key missing from index".to_string()),
            }
        }
        Ok(())
    }
}

impl<K, V> LruCache<K, V> {
    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
