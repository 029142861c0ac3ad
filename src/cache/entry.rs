//! Cache Entry Module
//!
//! A resident value together with its position in the recency order.

use crate::cache::lru::Handle;

// == Cache Entry ==
/// Represents a single resident cache entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Node of this entry's key in the LRU tracker
    pub(crate) handle: Handle,
}

impl<V> CacheEntry<V> {
    /// Creates a new entry tied to a tracker node.
    pub(crate) fn new(value: V, handle: Handle) -> Self {
        Self { value, handle }
    }

    /// Replaces the stored value, returning the previous one.
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}
