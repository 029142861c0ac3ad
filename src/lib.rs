//! LRU Cacher - A fixed-capacity key-value cache
//!
//! Provides a generic cache with strict least-recently-used eviction and O(1)
//! `get`/`put`, plus a lock-guarded wrapper for sharing one cache between tasks.

pub mod cache;
pub mod config;
pub mod error;
pub mod sync;
pub mod traits;

pub use cache::{CacheStats, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use sync::SharedCache;
pub use traits::Cacher;
