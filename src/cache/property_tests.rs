//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's lookup and expiry rules.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_millis(100);

// == Strategies ==
/// Generates URL-like cache keys, including the empty key
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z0-9/:._-]{1,64}".prop_map(|path| format!("https://pokeapi.co/api/v2/{}", path)),
    ]
}

/// Generates arbitrary payloads, including empty ones
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

/// A store operation at a millisecond offset from the start of the run
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: Vec<u8> },
    Get { key: String },
    Reap,
    Advance { millis: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    let key = prop::sample::select(vec!["a", "b", "c", ""]).prop_map(String::from);
    prop_oneof![
        (key.clone(), payload_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
        Just(CacheOp::Reap),
        (0u64..80).prop_map(|millis| CacheOp::Advance { millis }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a payload and reading it back before expiry returns the same bytes
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in payload_strategy()) {
        let mut store = CacheStore::new(TEST_TTL);

        store.put(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // A key that was never stored is always a miss
    #[test]
    fn prop_miss_on_absent_key(
        stored in prop::collection::hash_map(key_strategy(), payload_strategy(), 0..20),
        probe in key_strategy()
    ) {
        prop_assume!(!stored.contains_key(&probe));
        let mut store = CacheStore::new(TEST_TTL);

        for (key, value) in stored {
            store.put(key, value);
        }

        prop_assert_eq!(store.get(&probe), None);
    }

    // Later writes to the same key win
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in payload_strategy(),
        value2 in payload_strategy()
    ) {
        let mut store = CacheStore::new(TEST_TTL);

        store.put(key.clone(), value1);
        store.put(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Against a simple model, lookups hit exactly when the latest write is
    // younger than the TTL, and reaping never removes a live entry
    #[test]
    fn prop_matches_ttl_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, (Vec<u8>, Instant)> = HashMap::new();
        let mut now = Instant::now();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put_at(key.clone(), value.clone(), now);
                    model.insert(key, (value, now));
                }
                CacheOp::Get { key } => {
                    let expected = model
                        .get(&key)
                        .filter(|(_, at)| now - *at < TEST_TTL)
                        .map(|(value, _)| value.clone());
                    if expected.is_none() {
                        model.remove(&key);
                    }
                    prop_assert_eq!(store.get_at(&key, now), expected);
                }
                CacheOp::Reap => {
                    store.reap_expired(now);
                    model.retain(|_, (_, at)| *at + TEST_TTL >= now);
                }
                CacheOp::Advance { millis } => {
                    now += Duration::from_millis(millis);
                }
            }
            prop_assert_eq!(store.len(), model.len());
        }

        let stats = store.stats();
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // After a sweep, no remaining entry is older than TTL
    #[test]
    fn prop_reap_bounds_staleness(
        offsets in prop::collection::vec(0u64..300, 1..40),
        sweep_at in 0u64..400
    ) {
        let mut store = CacheStore::new(TEST_TTL);
        let t0 = Instant::now();

        for (i, offset) in offsets.iter().enumerate() {
            store.put_at(format!("key{}", i), vec![i as u8], t0 + Duration::from_millis(*offset));
        }

        let sweep = t0 + Duration::from_millis(sweep_at);
        let expected_removed = offsets
            .iter()
            .filter(|offset| t0 + Duration::from_millis(**offset) + TEST_TTL < sweep)
            .count();

        prop_assert_eq!(store.reap_expired(sweep), expected_removed);
        prop_assert_eq!(store.len(), offsets.len() - expected_removed);
    }
}
