//! Cacher Trait
//!
//! The `get`/`put` contract consumers program against, independent of the
//! concrete cache behind it.

use std::hash::Hash;

use crate::cache::LruCache;
use crate::error::{CacheError, Result};

/// A key-value cache with bounded capacity.
pub trait Cacher<K, V> {
    /// Returns the value under `key`, or `KeyNotFound` on a miss.
    fn get(&mut self, key: &K) -> Result<V>;

    /// Stores `value` under `key`. Capacity is enforced silently.
    fn put(&mut self, key: K, value: V);

    /// Returns the cached value, or computes, stores and returns it on a miss.
    fn get_or_put_with<F>(&mut self, key: K, compute: F) -> V
    where
        Self: Sized,
        F: FnOnce() -> V,
        V: Clone,
    {
        match self.get(&key) {
            Ok(value) => value,
            Err(_) => {
                let value = compute();
                self.put(key, value.clone());
                value
            }
        }
    }
}

impl<K, V> Cacher<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Result<V> {
        LruCache::get(self, key)
    }

    fn put(&mut self, key: K, value: V) {
        LruCache::put(self, key, value)
    }
}

/// Convenience for consumers that treat a miss as `None`.
pub fn lookup<K, V, C>(cache: &mut C, key: &K) -> Result<Option<V>>
where
    C: Cacher<K, V> + ?Sized,
{
    match cache.get(key) {
        Ok(value) => Ok(Some(value)),
        Err(CacheError::KeyNotFound) => Ok(None),
        Err(err) => Err(err),
    }
}
