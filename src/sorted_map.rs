//! The ordered-map contract shared by every map in this crate.

use crate::error::{DuplicateKeyError, EmptyTreeError};

/// A map that keeps unique keys in the order of a comparator.
///
/// Both [`OrderedMap`](crate::OrderedMap) and
/// [`BalancedOrderedMap`](crate::BalancedOrderedMap) implement this trait, so
/// code that only needs a sorted associative container can accept either.
///
/// # Laws
///
/// For any map `m`, key `k` and value `v`:
///
/// - **Insert-find**: if `m.insert(k, v)` succeeds, `m.find(&k) == Some(&v)`
///   until `k` is deleted.
/// - **Uniqueness**: inserting a present key fails and leaves `m` unchanged.
/// - **Delete**: after `m.delete(&k)`, `m.find(&k)` is `None`.
/// - **Order**: `traverse_in_order` yields exactly `count()` entries in
///   strictly ascending key order.
///
/// # Examples
///
/// ```rust
/// use ordered_trees::{BalancedOrderedMap, OrderedMap, SortedMap};
///
/// fn fill<M: SortedMap<i32, &'static str>>(map: &mut M) {
///     for (key, value) in [(2, "two"), (1, "one"), (3, "three")] {
///         map.insert(key, value).unwrap();
///     }
/// }
///
/// let mut plain = OrderedMap::new();
/// let mut balanced = BalancedOrderedMap::new();
/// fill(&mut plain);
/// fill(&mut balanced);
///
/// assert!(plain.traverse_in_order().eq(balanced.traverse_in_order()));
/// ```
pub trait SortedMap<K, V> {
    /// Inserts a new entry, rejecting keys that are already present.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] carrying the rejected entry when the key
    /// is already present. The map is not modified.
    fn insert(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError<K, V>>;

    /// Returns the value stored under `key`.
    fn find(&self, key: &K) -> Option<&V>;

    /// Removes the entry stored under `key`, returning whether one existed.
    fn delete(&mut self, key: &K) -> bool;

    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] when the map is empty.
    fn min(&self) -> Result<(&K, &V), EmptyTreeError>;

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] when the map is empty.
    fn max(&self) -> Result<(&K, &V), EmptyTreeError>;

    /// Returns a lazy iterator over all entries in ascending key order.
    fn traverse_in_order<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Returns the number of entries.
    fn count(&self) -> usize;

    /// Returns `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if the map holds an entry under `key`.
    fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}
