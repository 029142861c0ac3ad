//! Error types for the LRU cache
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache could not be built from the given parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Key is not resident in the cache
    #[error("Key not found")]
    KeyNotFound,

    /// Exclusive access to a shared cache was not acquired in time
    #[error("Lock not acquired within {0:?}")]
    LockTimeout(Duration),
}

impl CacheError {
    /// Returns true for the ordinary cache-miss outcome.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::KeyNotFound)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
