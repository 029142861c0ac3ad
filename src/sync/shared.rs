//! Shared Cache
//!
//! A single mutex guards the index and the recency order together. Locking
//! per key would let a `get` on one key race the eviction of that same key by
//! a concurrent `put`, so every call takes the whole cache.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::cache::{CacheStats, LruCache};
use crate::config::Config;
use crate::error::{CacheError, Result};

/// Cloneable handle to an [`LruCache`] shared between tasks.
///
/// Clones refer to the same cache. `get`/`put` wait for the lock as long as
/// needed; `try_get`/`try_put` give up after the configured lock timeout and
/// report `LockTimeout` without retrying.
///
/// # Example
/// ```ignore
/// let shared = SharedCache::new(LruCache::with_capacity(100));
/// shared.put("answer".to_string(), 42).await;
/// assert_eq!(shared.get("answer").await?, 42);
/// ```
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
    lock_timeout: Duration,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            lock_timeout: self.lock_timeout,
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Wraps `cache` using the default lock timeout.
    pub fn new(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
            lock_timeout: Config::default().lock_timeout,
        }
    }

    /// Builds the cache and lock timeout from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = LruCache::from_config(config)?;
        Ok(Self::new(cache).with_lock_timeout(config.lock_timeout))
    }

    /// Sets how long `try_get`/`try_put` wait for the lock.
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    // == Get ==
    /// Waits for the lock, then behaves like [`LruCache::get`].
    pub async fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().await.get(key)
    }

    // == Put ==
    /// Waits for the lock, then behaves like [`LruCache::put`].
    pub async fn put(&self, key: K, value: V) {
        self.inner.lock().await.put(key, value)
    }

    /// Like [`SharedCache::get`], failing with `LockTimeout` if the lock is
    /// not acquired within the configured timeout.
    pub async fn try_get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.acquire().await?.get(key)
    }

    /// Like [`SharedCache::put`], failing with `LockTimeout` if the lock is
    /// not acquired within the configured timeout.
    pub async fn try_put(&self, key: K, value: V) -> Result<()> {
        self.acquire().await?.put(key, value);
        Ok(())
    }

    /// Holds the lock for a sequence of operations that must not interleave
    /// with other callers, such as a get-then-put on a miss.
    pub async fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.inner.lock().await
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    async fn acquire(&self) -> Result<MutexGuard<'_, LruCache<K, V>>> {
        match tokio::time::timeout(self.lock_timeout, self.inner.lock()).await {
            Ok(guard) => Ok(guard),
            Err(_) => {
                warn!(
                    timeout_ms = self.lock_timeout.as_millis() as u64,
                    "shared cache lock not acquired in time"
                );
                Err(CacheError::LockTimeout(self.lock_timeout))
            }
        }
    }
}
