//! Cache Module
//!
//! Provides the fixed-capacity LRU cache and its recency tracker.

mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub(crate) use entry::CacheEntry;
pub use lru::{Handle, Iter, LruTracker};
pub use stats::CacheStats;
pub use store::LruCache;
