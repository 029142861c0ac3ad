//! Shared Access Module
//!
//! Lock-guarded wrapper that lets several tasks use one cache.
//!
//! # Types
//! - SharedCache: one mutex over the whole cache, with timeout-bounded calls

mod shared;

pub use shared::SharedCache;
