use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rbcontainers::{RBMap, RBTree};
use std::collections::BTreeMap;
use std::time::Instant;

mod common;

#[test]
fn test_insertion_vs_btreemap() {
    const TEST_SIZE: usize = 10000;

    let data: Vec<(i32, String)> = (0..TEST_SIZE)
        .map(|i| (i as i32, format!("value_{}", i)))
        .collect();

    let start = Instant::now();
    let mut btree_map = BTreeMap::new();
    for (key, value) in &data {
        btree_map.insert(*key, value.clone());
    }
    let btree_duration = start.elapsed();

    let start = Instant::now();
    let mut rb_map = RBMap::new();
    for (key, value) in &data {
        rb_map.insert(*key, value.clone());
    }
    let rb_duration = start.elapsed();

    println!("=== INSERTION PERFORMANCE vs BTreeMap ===");
    println!("std::collections::BTreeMap: {:?}", btree_duration);
    println!("RBMap: {:?}", rb_duration);

    assert_eq!(btree_map.len(), TEST_SIZE);
    assert_eq!(rb_map.len(), TEST_SIZE);
    assert!(rb_map.iter().eq(btree_map.iter()));
}

#[test]
fn test_lookup_vs_btreemap() {
    const TEST_SIZE: usize = 10000;
    const LOOKUP_COUNT: usize = 1000;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut btree_map = BTreeMap::new();
    let mut rb_map = RBMap::new();
    for _ in 0..TEST_SIZE {
        let key: i32 = rng.gen_range(0..50_000);
        btree_map.entry(key).or_insert(key * 2);
        rb_map.insert(key, key * 2);
    }

    let lookup_keys: Vec<i32> = (0..LOOKUP_COUNT).map(|_| rng.gen_range(0..50_000)).collect();

    let start = Instant::now();
    let btree_found = lookup_keys.iter().filter(|k| btree_map.get(*k).is_some()).count();
    let btree_duration = start.elapsed();

    let start = Instant::now();
    let rb_found = lookup_keys.iter().filter(|k| rb_map.get(*k).is_some()).count();
    let rb_duration = start.elapsed();

    println!("=== LOOKUP PERFORMANCE vs BTreeMap ===");
    println!("std::collections::BTreeMap: {:?}", btree_duration);
    println!("RBMap: {:?}", rb_duration);

    assert_eq!(btree_found, rb_found);
    for key in &lookup_keys {
        assert_eq!(rb_map.get(key), btree_map.get(key));
    }
}

#[test]
fn test_random_mixed_operations_match_btreemap() {
    common::init_logging();
    let mut rng = StdRng::seed_from_u64(42);
    let mut btree_map = BTreeMap::new();
    let mut tree = RBTree::new();

    for step in 0..20_000 {
        let key: u32 = rng.gen_range(0..2_000);
        match rng.gen_range(0..10) {
            0..=5 => {
                let value: u64 = rng.gen();
                btree_map.entry(key).or_insert(value);
                tree.insert(key, value);
            }
            6..=8 => {
                assert_eq!(tree.remove(&key), btree_map.remove_entry(&key), "step {}", step);
            }
            _ => {
                let node = tree.lower_bound(&key);
                let expected = btree_map.range(key..).next().map(|(k, v)| (*k, *v));
                assert_eq!(tree.get_entry(node).map(|(k, v)| (*k, *v)), expected);
            }
        }
        if step % 1000 == 0 {
            assert!(tree.check_invariants(), "step {}", step);
        }
    }

    assert_eq!(tree.len(), btree_map.len());
    assert!(tree.iter().eq(btree_map.iter()));
    assert!(tree.check_invariants());
}

#[test]
fn test_shuffled_drain_matches_btreemap() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<i64> = (0..5_000).collect();
    keys.shuffle(&mut rng);

    let mut tree: RBTree<i64, i64> = keys.iter().map(|&k| (k, -k)).collect();
    let mut btree_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, -k)).collect();

    keys.shuffle(&mut rng);
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tree.remove(key), btree_map.remove_entry(key));
        assert_eq!(
            tree.last_key_value(),
            btree_map.last_key_value(),
            "max-cache after removing {}",
            key
        );
        if i % 500 == 0 {
            assert!(tree.check_invariants());
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.begin(), tree.end());
}
