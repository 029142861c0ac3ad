//! Property-Based Tests for Cache Module
//!
//! Drives the cache with random operation sequences and compares it against a
//! plain Vec-based model that rescans on every access.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::LruCache;
use crate::error::CacheError;

// == Strategies ==
/// Small key space so sequences revisit keys often
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..16
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u32 },
    Get { key: u8 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

// == Reference Model ==
/// Least recent first; linear scans everywhere.
struct Model {
    capacity: usize,
    order: Vec<(u8, u32)>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: Vec::new(),
        }
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.order.iter().position(|(k, _)| *k == key)?;
        let entry = self.order.remove(pos);
        self.order.push(entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u8, value: u32) {
        if let Some(pos) = self.order.iter().position(|(k, _)| *k == key) {
            self.order.remove(pos);
        } else if self.capacity == 0 {
            return;
        } else if self.order.len() == self.capacity {
            self.order.remove(0);
        }
        self.order.push((key, value));
    }

    fn keys(&self) -> Vec<u8> {
        self.order.iter().map(|(k, _)| *k).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every get result and the final recency order match the model.
    #[test]
    fn prop_matches_reference_model(
        capacity in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = LruCache::with_capacity(capacity);
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(key, value);
                    model.put(key, value);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(key).ok_or(CacheError::KeyNotFound);
                    prop_assert_eq!(cache.get(&key), expected);
                }
            }
            let keys: Vec<u8> = cache.keys().copied().collect();
            prop_assert_eq!(keys, model.keys());
        }
    }

    // Index and recency order hold the same keys after every operation, and
    // the resident count never exceeds capacity.
    #[test]
    fn prop_index_and_order_stay_in_bijection(
        capacity in 0usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = LruCache::with_capacity(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => cache.put(key, value),
                CacheOp::Get { key } => {
                    let _ = cache.get(&key);
                }
            }
            if let Err(msg) = cache.check_invariants() {
                prop_assert!(false, "{}", msg);
            }
            prop_assert!(cache.len() <= capacity);
        }
    }

    // put(k, v) followed by get(k) returns v whatever came before.
    #[test]
    fn prop_put_then_get(
        capacity in 1usize..6,
        prefix in prop::collection::vec(cache_op_strategy(), 0..50),
        key in key_strategy(),
        value in any::<u32>()
    ) {
        let mut cache = LruCache::with_capacity(capacity);
        for op in prefix {
            match op {
                CacheOp::Put { key, value } => cache.put(key, value),
                CacheOp::Get { key } => {
                    let _ = cache.get(&key);
                }
            }
        }

        cache.put(key, value);
        prop_assert_eq!(cache.get(&key), Ok(value));
    }

    // N + 1 distinct puts into capacity N evict exactly the first key.
    #[test]
    fn prop_overflow_evicts_first_inserted(
        keys in prop::collection::hash_set(any::<u16>(), 2..40)
    ) {
        let keys: Vec<u16> = keys.into_iter().collect();
        let capacity = keys.len() - 1;
        let mut cache = LruCache::with_capacity(capacity);

        for key in &keys {
            cache.put(*key, u32::from(*key));
        }

        prop_assert_eq!(cache.len(), capacity);
        prop_assert_eq!(cache.get(&keys[0]), Err(CacheError::KeyNotFound));
        for key in &keys[1..] {
            prop_assert_eq!(cache.get(key), Ok(u32::from(*key)));
        }
        prop_assert_eq!(cache.stats().evictions, 1);
    }

    // Overwriting a resident key keeps one entry and evicts nothing.
    #[test]
    fn prop_overwrite_never_evicts(
        keys in prop::collection::hash_set(key_strategy(), 1..10),
        value1 in any::<u32>(),
        value2 in any::<u32>()
    ) {
        let keys: Vec<u8> = keys.into_iter().collect();
        let mut cache = LruCache::with_capacity(keys.len());
        for key in &keys {
            cache.put(*key, value1);
        }

        let target = keys[keys.len() / 2];
        cache.put(target, value2);

        prop_assert_eq!(cache.len(), keys.len());
        prop_assert_eq!(cache.stats().evictions, 0);
        prop_assert_eq!(cache.get(&target), Ok(value2));
        let resident: HashSet<u8> = cache.keys().copied().collect();
        prop_assert_eq!(resident, keys.iter().copied().collect::<HashSet<u8>>());
    }

    // Nothing is ever retrievable from a zero-capacity cache.
    #[test]
    fn prop_zero_capacity_stays_empty(
        ops in prop::collection::vec(cache_op_strategy(), 1..100)
    ) {
        let mut cache = LruCache::with_capacity(0);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => cache.put(key, value),
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), Err(CacheError::KeyNotFound));
                }
            }
            prop_assert!(cache.is_empty());
        }
    }

    // Negative capacities are rejected, non-negative ones accepted.
    #[test]
    fn prop_constructor_validates_capacity(capacity in -1000i64..1000) {
        let result = LruCache::<u8, u8>::new(capacity);
        if capacity < 0 {
            prop_assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
        } else {
            prop_assert_eq!(result.map(|c| c.capacity()).ok(), Some(capacity as usize));
        }
    }
}
