//! The standalone helpers: chained hash table and upper-bound search.

use needlework::{upper_bound_search, ChainedHashTable};
use std::collections::hash_map::RandomState;
use std::collections::HashMap;

#[test]
fn test_hash_table_demo_sequence() {
    let mut table = ChainedHashTable::new(5);
    table.insert("apple", 10);
    table.insert("orange", 20);
    table.insert("banana", 30);
    table.remove(&"banana");

    assert_eq!(table.get(&"apple"), Some(&10));
    assert_eq!(table.get(&"orange"), Some(&20));
    assert_eq!(table.get(&"banana"), None);
}

#[test]
fn test_hash_table_matches_std_map() {
    let mut ours = ChainedHashTable::with_hasher(7, RandomState::new());
    let mut reference = HashMap::new();

    for i in 0..200u32 {
        let key = i % 37;
        assert_eq!(ours.insert(key, i), reference.insert(key, i));
        if i % 5 == 0 {
            let gone = (i * 7) % 37;
            assert_eq!(ours.remove(&gone), reference.remove(&gone));
        }
    }

    assert_eq!(ours.len(), reference.len());
    for key in 0..37 {
        assert_eq!(ours.get(&key), reference.get(&key));
    }
    assert_eq!(ours.chain_lengths().iter().sum::<usize>(), reference.len());
}

#[test]
fn test_bisect_demo_targets() {
    let arr = [0.5, 1.2, 2.8, 3.3, 4.7, 5.5, 6.1, 7.0];
    let expected = [
        (3.0, 3, Some(3.3)),
        (4.7, 3, Some(4.7)),
        (8.0, 4, None),
        (0.1, 3, Some(0.5)),
    ];
    for (target, iterations, upper_bound) in expected {
        let result = upper_bound_search(&arr, target);
        assert_eq!(result.iterations, iterations, "target {}", target);
        assert_eq!(result.upper_bound, upper_bound, "target {}", target);
    }
}

#[test]
fn test_bisect_agrees_with_partition_point() {
    let arr: Vec<i32> = (0..100).map(|i| i * 3).collect();
    for target in -5..305 {
        let result = upper_bound_search(&arr, target);
        let index = arr.partition_point(|&x| x < target);
        assert_eq!(result.upper_bound, arr.get(index).copied(), "target {}", target);
        // ceil(log2(n + 1)) steps at most
        assert!(result.iterations <= 7, "target {} took {}", target, result.iterations);
    }
}
