//! Unbalanced ordered map based on a plain binary search tree.
//!
//! This module provides [`OrderedMap`], the baseline member of the ordered
//! map family.
//!
//! # Overview
//!
//! `OrderedMap` keeps its entries in a binary search tree without any
//! rebalancing. Every operation costs O(h) where h is the height of the tree;
//! random insertion orders keep h near log N, but sorted insertion degrades
//! the tree into a chain of height N. Use
//! [`BalancedOrderedMap`](crate::BalancedOrderedMap) when the insertion order
//! is not under your control.
//!
//! Because the height is unbounded, every operation here (including drop and
//! clone) is iterative.
//!
//! # Examples
//!
//! ```rust
//! use ordered_trees::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(3, "three").unwrap();
//! map.insert(1, "one").unwrap();
//! map.insert(2, "two").unwrap();
//!
//! // Entries are always in sorted order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! // Keys are unique
//! assert!(map.insert(2, "deux").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::RangeBounds;

use crate::compare::{Comparator, NaturalOrder};
use crate::error::{DuplicateKeyError, EmptyTreeError};
use crate::sorted_map::SortedMap;
use crate::tree::{
    self, Direction, IntoIter, Iter, Keys, Link, Node, PostOrder, PreOrder, Range, Traverse,
    TraversalOrder, Values, ValuesMut,
};

/// Node link of the plain tree: no balancing metadata.
type PlainLink<K, V> = Link<K, V, ()>;

/// An ordered map backed by an unbalanced binary search tree.
///
/// Keys are ordered by the comparator `C` given at construction
/// ([`NaturalOrder`] by default) and must be unique.
///
/// # Time Complexity
///
/// | Operation            | Complexity      |
/// |----------------------|-----------------|
/// | `new`                | O(1)            |
/// | `insert`             | O(h)            |
/// | `find`/`get`         | O(h)            |
/// | `delete`/`remove`    | O(h)            |
/// | `min`/`max`          | O(h)            |
/// | `iter`               | O(N) total      |
/// | `len`/`count`        | O(1)            |
///
/// where h is the height of the tree, between log N and N.
///
/// # Examples
///
/// ```rust
/// use ordered_trees::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// for key in [10, 20, 30] {
///     map.insert(key, key * 2).unwrap();
/// }
///
/// // Ascending insertion builds a chain
/// assert_eq!(map.height(), 2);
/// assert_eq!(map.min(), Ok((&10, &20)));
/// assert!(map.delete(&20));
/// assert!(!map.delete(&20));
/// ```
pub struct OrderedMap<K, V, C = NaturalOrder> {
    root: PlainLink<K, V>,
    length: usize,
    comparator: C,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map ordered by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let map: OrderedMap<i32, String> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    /// use ordered_trees::compare::ReverseOrder;
    ///
    /// let mut map = OrderedMap::with_comparator(ReverseOrder);
    /// map.insert(1, ()).unwrap();
    /// map.insert(2, ()).unwrap();
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            length: 0,
            comparator,
        }
    }

    /// Returns the comparator that orders this map.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns the number of entries in the map. Same as [`len`](Self::len).
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one").unwrap();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(map.min().is_err());
    /// ```
    pub fn clear(&mut self) {
        tree::dismantle(self.root.take());
        self.length = 0;
    }

    /// Returns the number of edges on the longest path from the root to a
    /// leaf. Empty and single-entry maps have height 0.
    ///
    /// # Complexity
    ///
    /// O(N)
    #[must_use]
    pub fn height(&self) -> usize {
        tree::height(self.root.as_deref())
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::{EmptyTreeError, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.min(), Err(EmptyTreeError));
    ///
    /// map.insert(3, "three").unwrap();
    /// map.insert(1, "one").unwrap();
    /// assert_eq!(map.min(), Ok((&1, &"one")));
    /// ```
    pub fn min(&self) -> Result<(&K, &V), EmptyTreeError> {
        self.extreme(Direction::Left)
    }

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the map is empty.
    pub fn max(&self) -> Result<(&K, &V), EmptyTreeError> {
        self.extreme(Direction::Right)
    }

    fn extreme(&self, direction: Direction) -> Result<(&K, &V), EmptyTreeError> {
        self.root
            .as_deref()
            .map(|root| root.extreme(direction))
            .map(|node| (&node.key, &node.value))
            .ok_or(EmptyTreeError)
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, 'b').unwrap();
    /// map.insert(1, 'a').unwrap();
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, ()> {
        Iter::new(self.root.as_deref(), self.length)
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// Each call starts a fresh traversal. Same as [`iter`](Self::iter).
    #[inline]
    pub fn traverse_in_order(&self) -> Iter<'_, K, V, ()> {
        self.iter()
    }

    /// Returns an iterator over entries in pre-order (node, left, right).
    pub fn pre_order(&self) -> PreOrder<'_, K, V, ()> {
        PreOrder::new(self.root.as_deref())
    }

    /// Returns an iterator over entries in post-order (left, right, node).
    pub fn post_order(&self) -> PostOrder<'_, K, V, ()> {
        PostOrder::new(self.root.as_deref())
    }

    /// Returns a depth-first traversal in the given order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::{OrderedMap, TraversalOrder};
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [2, 1, 3] {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// let keys: Vec<i32> = map.traverse(TraversalOrder::PreOrder).map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![2, 1, 3]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, K, V, ()> {
        Traverse::new(self.root.as_deref(), self.length, order)
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V, ()> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over values in key order.
    pub fn values(&self) -> Values<'_, K, V, ()> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable values in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 10).unwrap();
    /// map.insert(2, 20).unwrap();
    /// for value in map.values_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![11, 21]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, ()> {
        ValuesMut::new(self.root.as_deref_mut(), self.length)
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Inserts a key-value pair into the map.
    ///
    /// The new entry becomes a leaf at the first empty link on the search
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`], carrying the rejected entry, if the key
    /// is already present. The map is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn insert(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError<K, V>> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            let direction = match self.comparator.compare(&key, &node.key) {
                Ordering::Equal => {
                    tracing::debug!(length = self.length, "rejected duplicate key");
                    return Err(DuplicateKeyError::new(key, value));
                }
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            link = &mut node[direction];
        }
        *link = Some(Box::new(Node::leaf(key, value, ())));
        self.length += 1;
        Ok(())
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn find(&self, key: &K) -> Option<&V> {
        tree::search(self.root.as_deref(), key, &self.comparator).map(|node| &node.value)
    }

    /// Returns a reference to the value stored under `key`. Same as
    /// [`find`](Self::find).
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        tree::search(self.root.as_deref(), key, &self.comparator)
            .map(|node| (&node.key, &node.value))
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("count", 1).unwrap();
    /// if let Some(count) = map.get_mut(&"count") {
    ///     *count += 1;
    /// }
    /// assert_eq!(map.get(&"count"), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        tree::search_mut(self.root.as_deref_mut(), key, &self.comparator)
            .map(|node| &mut node.value)
    }

    /// Returns `true` if the map contains an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes the entry stored under `key`, returning whether it existed.
    ///
    /// A missing key is not an error.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry stored under `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry stored under `key`, returning the stored key and
    /// value.
    ///
    /// A node with two children is not unlinked itself: the in-order
    /// predecessor (the largest key of its left subtree) is unlinked instead
    /// and its entry moved into the node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [20, 10, 30, 5, 15] {
    ///     map.insert(key, key.to_string()).unwrap();
    /// }
    ///
    /// assert_eq!(map.remove_entry(&20), Some((20, "20".to_string())));
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![5, 10, 15, 30]);
    /// assert_eq!(map.remove_entry(&20), None);
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let mut link = &mut self.root;
        loop {
            let direction = match link.as_deref() {
                None => return None,
                Some(node) => match self.comparator.compare(key, &node.key) {
                    Ordering::Equal => break,
                    Ordering::Less => Direction::Left,
                    Ordering::Greater => Direction::Right,
                },
            };
            link = &mut link.as_mut()?[direction];
        }
        let entry = unlink(link)?;
        self.length -= 1;
        Some(entry)
    }

    /// Returns an iterator over the entries whose keys fall within `range`,
    /// in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [5, 1, 4, 2, 3] {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// let keys: Vec<i32> = map.range(2..=4).map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![2, 3, 4]);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<'_, K, V, (), C>
    where
        R: RangeBounds<K>,
        K: Clone,
    {
        Range::new(self.root.as_deref(), &range, &self.comparator)
    }

    /// Inserts every entry of `entries`, stopping at the first duplicate key.
    ///
    /// Entries inserted before the duplicate stay in the map.
    ///
    /// # Errors
    ///
    /// Returns the [`DuplicateKeyError`] of the first rejected entry.
    pub fn try_extend<I>(&mut self, entries: I) -> Result<(), DuplicateKeyError<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        entries
            .into_iter()
            .try_for_each(|(key, value)| self.insert(key, value))
    }

    /// Builds a map from `entries`, failing on the first duplicate key.
    ///
    /// # Errors
    ///
    /// Returns the [`DuplicateKeyError`] of the first rejected entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::OrderedMap;
    ///
    /// let map = OrderedMap::<_, _>::try_from_iter([(2, "b"), (1, "a")]).unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let error = OrderedMap::<_, _>::try_from_iter([(1, "a"), (1, "b")]).unwrap_err();
    /// assert_eq!(error.into_entry(), (1, "b"));
    /// ```
    pub fn try_from_iter<I>(entries: I) -> Result<Self, DuplicateKeyError<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
        C: Default,
    {
        let mut map = Self::with_comparator(C::default());
        map.try_extend(entries)?;
        Ok(map)
    }
}

/// Unlinks the node at `link`, which must be occupied.
fn unlink<K, V>(link: &mut PlainLink<K, V>) -> Option<(K, V)> {
    let node = link.as_mut()?;
    if node.is_full() {
        let (key, value) = take_max(&mut node[Direction::Left])?;
        tracing::trace!("moved in-order predecessor into removed node");
        return Some(node.replace_entry(key, value));
    }
    let mut node = link.take()?;
    *link = node.take_only_child();
    Some(node.into_entry())
}

/// Unlinks the rightmost node of the subtree at `link`. That node has no
/// right child, so its left child (if any) takes its place.
fn take_max<K, V>(mut link: &mut PlainLink<K, V>) -> Option<(K, V)> {
    while link
        .as_deref()
        .is_some_and(|node| node[Direction::Right].is_some())
    {
        link = &mut link.as_mut()?[Direction::Right];
    }
    let mut node = link.take()?;
    *link = node.take_only_child();
    Some(node.into_entry())
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, V, C: Comparator<K>> SortedMap<K, V> for OrderedMap<K, V, C> {
    fn insert(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError<K, V>> {
        Self::insert(self, key, value)
    }

    fn find(&self, key: &K) -> Option<&V> {
        Self::find(self, key)
    }

    fn delete(&mut self, key: &K) -> bool {
        Self::delete(self, key)
    }

    fn min(&self) -> Result<(&K, &V), EmptyTreeError> {
        Self::min(self)
    }

    fn max(&self) -> Result<(&K, &V), EmptyTreeError> {
        Self::max(self)
    }

    fn traverse_in_order<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    fn count(&self) -> usize {
        self.length
    }
}

impl<K, V, C> Drop for OrderedMap<K, V, C> {
    fn drop(&mut self) {
        tree::dismantle(self.root.take());
    }
}

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for OrderedMap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            root: tree::clone_link(self.root.as_deref()),
            length: self.length,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for OrderedMap<K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, ()>;

    fn into_iter(mut self) -> Self::IntoIter {
        let length = mem::take(&mut self.length);
        IntoIter::new(self.root.take(), length)
    }
}

static_assertions::assert_impl_all!(OrderedMap<i32, String>: Send, Sync, Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::FnComparator;
    use rstest::rstest;

    fn map_of(keys: &[i32]) -> OrderedMap<i32, i32> {
        let mut map = OrderedMap::new();
        for &key in keys {
            map.insert(key, key * 10).unwrap();
        }
        map
    }

    fn keys_of<C>(map: &OrderedMap<i32, i32, C>) -> Vec<i32> {
        map.keys().copied().collect()
    }

    #[rstest]
    fn test_new_is_empty() {
        let map: OrderedMap<i32, i32> = OrderedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.count(), 0);
        assert_eq!(map.height(), 0);
        assert_eq!(map.min(), Err(EmptyTreeError));
        assert_eq!(map.max(), Err(EmptyTreeError));
    }

    #[rstest]
    fn test_ascending_insert_builds_right_chain() {
        let map = map_of(&[10, 20, 30]);
        assert_eq!(map.height(), 2);
        let root = map.root.as_deref().map(|node| node.key);
        assert_eq!(root, Some(10));
        let right = map
            .root
            .as_deref()
            .and_then(|node| node.child(Direction::Right))
            .map(|node| node.key);
        assert_eq!(right, Some(20));
        assert!(
            map.root
                .as_deref()
                .and_then(|node| node.child(Direction::Left))
                .is_none()
        );
    }

    #[rstest]
    fn test_duplicate_insert_is_rejected_without_mutation() {
        let mut map = map_of(&[2, 1, 3]);
        let error = map.insert(2, 99).unwrap_err();
        assert_eq!(error.into_entry(), (2, 99));
        assert_eq!(map.len(), 3);
        assert_eq!(map.find(&2), Some(&20));
    }

    #[rstest]
    #[case::leaf(&[20, 10, 30], 10, vec![20, 30])]
    #[case::single_child(&[20, 10, 5], 10, vec![5, 20])]
    #[case::two_children(&[20, 10, 30, 5, 15], 10, vec![5, 15, 20, 30])]
    #[case::root_with_two_children(&[20, 10, 30, 5, 15, 25], 20, vec![5, 10, 15, 25, 30])]
    #[case::root_only(&[20], 20, vec![])]
    fn test_delete_cases(#[case] keys: &[i32], #[case] target: i32, #[case] expected: Vec<i32>) {
        let mut map = map_of(keys);
        assert!(map.delete(&target));
        assert_eq!(keys_of(&map), expected);
        assert_eq!(map.len(), keys.len() - 1);
        assert_eq!(map.find(&target), None);
    }

    #[rstest]
    fn test_two_child_delete_uses_predecessor() {
        //      20
        //     /  \
        //   10    30
        //     \
        //      15
        let mut map = map_of(&[20, 10, 30, 15]);
        assert_eq!(map.remove_entry(&20), Some((20, 200)));
        let root = map.root.as_deref().map(|node| (node.key, node.value));
        assert_eq!(root, Some((15, 150)));
    }

    #[rstest]
    fn test_predecessor_with_left_child_is_replaced_by_it() {
        let mut map = map_of(&[50, 30, 70, 40, 35]);
        assert!(map.delete(&50));
        assert_eq!(keys_of(&map), vec![30, 35, 40, 70]);
        assert_eq!(map.root.as_deref().map(|node| node.key), Some(40));
    }

    #[rstest]
    fn test_delete_missing_key_is_not_an_error() {
        let mut map = map_of(&[1, 2, 3]);
        assert!(!map.delete(&4));
        assert_eq!(map.len(), 3);
    }

    #[rstest]
    fn test_min_max() {
        let map = map_of(&[5, 3, 8, 1, 9]);
        assert_eq!(map.min(), Ok((&1, &10)));
        assert_eq!(map.max(), Ok((&9, &90)));
    }

    #[rstest]
    fn test_custom_comparator_orders_entries() {
        let mut map = OrderedMap::with_comparator(FnComparator::new(|left: &i32, right: &i32| {
            left.abs().cmp(&right.abs())
        }));
        map.insert(-3, ()).unwrap();
        map.insert(2, ()).unwrap();
        map.insert(-1, ()).unwrap();
        assert!(map.insert(3, ()).is_err());
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![-1, 2, -3]);
    }

    #[rstest]
    fn test_sorted_insertion_of_many_keys_survives_drop_and_clone() {
        let mut map = OrderedMap::new();
        for key in 0..10_000 {
            map.insert(key, ()).unwrap();
        }
        assert_eq!(map.height(), 9_999);
        let copy = map.clone();
        assert_eq!(copy.len(), 10_000);
        assert_eq!(copy.max(), Ok((&9_999, &())));
        assert!(map.delete(&0));
        assert_eq!(map.min(), Ok((&1, &())));
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = map_of(&[2, 1, 3]);
        let mut copy = original.clone();
        copy.delete(&2);
        assert_eq!(keys_of(&original), vec![1, 2, 3]);
        assert_eq!(keys_of(&copy), vec![1, 3]);
    }

    #[rstest]
    fn test_debug_format() {
        let map = map_of(&[2, 1]);
        assert_eq!(format!("{map:?}"), "{1: 10, 2: 20}");
    }

    #[rstest]
    fn test_into_iter_owned() {
        let map = map_of(&[3, 1, 2]);
        let entries: Vec<(i32, i32)> = map.into_iter().collect();
        assert_eq!(entries, vec![(1, 10), (2, 20), (3, 30)]);
    }

    #[rstest]
    fn test_equality_ignores_shape() {
        assert_eq!(map_of(&[1, 2, 3]), map_of(&[2, 3, 1]));
        assert_ne!(map_of(&[1, 2, 3]), map_of(&[1, 2]));
    }
}
