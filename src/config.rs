//! Configuration Module
//!
//! Loads cache parameters from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

const DEFAULT_CAPACITY: i64 = 1000;
const DEFAULT_LOCK_TIMEOUT_MS: u64 = 100;

/// Cache configuration parameters.
///
/// `capacity` is kept as read so that a negative value reaches the cache
/// constructor and is rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of resident entries
    pub capacity: i64,
    /// How long timed shared-cache calls wait for the lock
    pub lock_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum resident entries (default: 1000)
    /// - `CACHE_LOCK_TIMEOUT_MS` - Shared cache lock timeout (default: 100)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            lock_timeout: Duration::from_millis(
                env::var("CACHE_LOCK_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_LOCK_TIMEOUT_MS),
            ),
        }
    }

    /// Strict variant of [`Config::from_env`].
    ///
    /// Missing variables still take their defaults, but a value that is
    /// present and does not parse is reported as `InvalidConfiguration`.
    pub fn try_from_env() -> Result<Self> {
        let capacity = match env::var("CACHE_CAPACITY") {
            Ok(raw) => parse_var("CACHE_CAPACITY", &raw)?,
            Err(_) => DEFAULT_CAPACITY,
        };
        let timeout_ms = match env::var("CACHE_LOCK_TIMEOUT_MS") {
            Ok(raw) => parse_var("CACHE_LOCK_TIMEOUT_MS", &raw)?,
            Err(_) => DEFAULT_LOCK_TIMEOUT_MS,
        };

        Ok(Self {
            capacity,
            lock_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        CacheError::InvalidConfiguration(format!("{} has unparsable value {:?}", name, raw))
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            lock_timeout: Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS),
        }
    }
}
