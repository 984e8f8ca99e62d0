#![cfg(feature = "balanced")]
//! Property-based tests for BalancedOrderedMap.
//!
//! These tests verify that BalancedOrderedMap keeps every red-black invariant
//! through arbitrary sequences of inserts and deletes, and that it behaves
//! like `BTreeMap` as an ordered map.

use ordered_trees::BalancedOrderedMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

#[derive(Clone, Debug)]
enum Operation {
    Insert(i16, i32),
    Delete(i16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (any::<i16>(), any::<i32>()).prop_map(|(key, value)| Operation::Insert(key, value)),
        2 => any::<i16>().prop_map(Operation::Delete),
    ]
}

/// Keys from a narrow range so that deletes and duplicates actually hit.
fn narrow_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..64i16, any::<i32>()).prop_map(|(key, value)| Operation::Insert(key, value)),
        (0..64i16).prop_map(Operation::Delete),
    ]
}

fn height_bound(length: usize) -> f64 {
    2.0 * ((length + 1) as f64).log2()
}

fn apply(
    map: &mut BalancedOrderedMap<i16, i32>,
    model: &mut BTreeMap<i16, i32>,
    operation: Operation,
) -> Result<(), TestCaseError> {
    match operation {
        Operation::Insert(key, value) => {
            let inserted = map.insert(key, value).is_ok();
            prop_assert_eq!(inserted, !model.contains_key(&key));
            model.entry(key).or_insert(value);
        }
        Operation::Delete(key) => {
            prop_assert_eq!(map.delete(&key), model.remove(&key).is_some());
        }
    }
    Ok(())
}

// =============================================================================
// Invariant Laws
// =============================================================================

proptest! {
    /// Law: every completed insert or delete leaves a valid red-black tree.
    #[test]
    fn prop_invariants_hold_after_every_mutation(
        operations in prop::collection::vec(narrow_operation(), 0..200)
    ) {
        let mut map = BalancedOrderedMap::new();
        let mut model = BTreeMap::new();
        for operation in operations {
            apply(&mut map, &mut model, operation)?;
            prop_assert!(map.check_invariants().is_ok(), "{:?}", map.check_invariants());
        }
    }

    /// Law: height <= 2 * log2(count + 1).
    #[test]
    fn prop_height_is_bounded(
        operations in prop::collection::vec(operation(), 0..300)
    ) {
        let mut map = BalancedOrderedMap::new();
        let mut model = BTreeMap::new();
        for operation in operations {
            apply(&mut map, &mut model, operation)?;
        }
        prop_assert!(map.height() as f64 <= height_bound(map.len()));
    }
}

// =============================================================================
// Model Laws
// =============================================================================

proptest! {
    /// Law: the map agrees with `BTreeMap` after any sequence of operations.
    #[test]
    fn prop_matches_btree_map(
        operations in prop::collection::vec(narrow_operation(), 0..200)
    ) {
        let mut map = BalancedOrderedMap::new();
        let mut model = BTreeMap::new();
        for operation in operations {
            apply(&mut map, &mut model, operation)?;
        }
        prop_assert_eq!(map.count(), model.len());
        prop_assert!(map.iter().eq(model.iter()));
        prop_assert_eq!(map.min().ok(), model.first_key_value());
        prop_assert_eq!(map.max().ok(), model.last_key_value());
    }

    /// Law: in-order traversal of distinct inserted keys is their sorted order.
    #[test]
    fn prop_ordering_round_trip(
        keys in prop::collection::btree_set(any::<i32>(), 0..100)
            .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    ) {
        let mut map = BalancedOrderedMap::new();
        for &key in &keys {
            map.insert(key, ()).unwrap();
        }
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(map.keys().copied().collect::<Vec<_>>(), sorted);
    }
}

// =============================================================================
// Insert, Find and Delete Laws
// =============================================================================

proptest! {
    /// Law: find after a successful insert returns the inserted value.
    #[test]
    fn prop_find_insert_law(
        entries in prop::collection::vec((any::<i32>(), any::<i32>()), 0..50),
        key: i32,
        value: i32
    ) {
        let mut map = BalancedOrderedMap::new();
        for (entry_key, entry_value) in entries {
            let _ = map.insert(entry_key, entry_value);
        }
        prop_assume!(!map.contains_key(&key));
        map.insert(key, value).unwrap();
        prop_assert_eq!(map.find(&key), Some(&value));
    }

    /// Law: a second insert of the same key fails and changes nothing.
    #[test]
    fn prop_duplicate_rejection(
        keys in prop::collection::vec(any::<i32>(), 1..50),
        index: prop::sample::Index,
        value: i32
    ) {
        let mut map = BalancedOrderedMap::new();
        for &key in &keys {
            let _ = map.insert(key, key);
        }
        let key = keys[index.index(keys.len())];
        let before = map.clone();
        let error = map.insert(key, value).unwrap_err();
        prop_assert_eq!(error.into_entry(), (key, value));
        prop_assert_eq!(map, before);
    }

    /// Law: deleting every key, in any order, empties the map.
    #[test]
    fn prop_delete_completeness(
        keys in prop::collection::btree_set(any::<i32>(), 0..100)
            .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        seed in any::<u64>()
    ) {
        let mut map = BalancedOrderedMap::new();
        for &key in &keys {
            map.insert(key, ()).unwrap();
        }
        let mut order = keys;
        let rotation = usize::try_from(seed % (order.len() as u64).max(1)).unwrap_or(0);
        order.rotate_left(rotation);
        for key in &order {
            prop_assert!(map.delete(key));
            prop_assert!(!map.contains_key(key));
            prop_assert!(map.check_invariants().is_ok());
        }
        prop_assert!(map.is_empty());
        prop_assert!(map.min().is_err());
    }
}
