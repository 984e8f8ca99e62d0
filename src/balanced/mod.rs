//! Self-balancing ordered map based on a red-black tree.
//!
//! This module provides [`BalancedOrderedMap`], which offers the same API as
//! [`OrderedMap`](crate::OrderedMap) but keeps its height logarithmic no
//! matter the insertion order.
//!
//! # Overview
//!
//! Every node is colored red or black, and the tree maintains:
//!
//! 1. No red node has a red child.
//! 2. Every path from a node down to a missing child passes through the same
//!    number of black nodes.
//! 3. The root is black.
//! 4. Keys are in binary search tree order.
//!
//! Together these bound the height by 2·log₂(N + 1). Insertion restores them
//! bottom-up while the recursive descent unwinds; deletion restores them
//! top-down in a single pass, so neither needs parent pointers.
//!
//! # Examples
//!
//! ```rust
//! use ordered_trees::BalancedOrderedMap;
//!
//! let mut map = BalancedOrderedMap::new();
//! for key in 0..1_000 {
//!     map.insert(key, key * 2).unwrap();
//! }
//!
//! // Sorted insertion does not degrade the tree
//! assert!(map.height() < 20);
//! assert_eq!(map.find(&500), Some(&1_000));
//! assert!(map.check_invariants().is_ok());
//! ```

use std::fmt;
use std::ops::RangeBounds;

use crate::compare::{Comparator, NaturalOrder};
use crate::error::{DuplicateKeyError, EmptyTreeError};
use crate::sorted_map::SortedMap;
use crate::tree::{
    self, Direction, IntoIter, Iter, Keys, PostOrder, PreOrder, Range, Traverse, TraversalOrder,
    Values, ValuesMut,
};

mod invariants;
mod rebalance;
mod remove;

pub use invariants::InvariantViolation;

use rebalance::{RedBlackLink, paint};

/// Node color of a red-black tree.
///
/// Appears as the node tag parameter of the iterator types returned by
/// [`BalancedOrderedMap`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    /// A node that does not count toward black height.
    Red,
    /// A node that counts toward black height.
    Black,
}

/// An ordered map backed by a red-black tree.
///
/// Keys are ordered by the comparator `C` given at construction
/// ([`NaturalOrder`] by default) and must be unique.
///
/// # Time Complexity
///
/// | Operation            | Complexity      |
/// |----------------------|-----------------|
/// | `new`                | O(1)            |
/// | `insert`             | O(log N)        |
/// | `find`/`get`         | O(log N)        |
/// | `delete`/`remove`    | O(log N)        |
/// | `min`/`max`          | O(log N)        |
/// | `iter`               | O(N) total      |
/// | `len`/`count`        | O(1)            |
///
/// # Examples
///
/// ```rust
/// use ordered_trees::BalancedOrderedMap;
///
/// let mut map = BalancedOrderedMap::new();
/// for key in [10, 20, 30] {
///     map.insert(key, key * 2).unwrap();
/// }
///
/// // Ascending insertion rotates 20 up to the root
/// assert_eq!(map.height(), 1);
/// assert_eq!(map.max(), Ok((&30, &60)));
///
/// assert!(map.delete(&20));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![10, 30]);
/// ```
pub struct BalancedOrderedMap<K, V, C = NaturalOrder> {
    root: RedBlackLink<K, V>,
    length: usize,
    comparator: C,
}

impl<K, V> BalancedOrderedMap<K, V> {
    /// Creates an empty map ordered by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::BalancedOrderedMap;
    ///
    /// let map: BalancedOrderedMap<String, u32> = BalancedOrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> BalancedOrderedMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::BalancedOrderedMap;
    /// use ordered_trees::compare::FnComparator;
    ///
    /// let by_length = FnComparator::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
    /// let mut map = BalancedOrderedMap::with_comparator(by_length);
    /// map.insert("ccc", 3).unwrap();
    /// map.insert("a", 1).unwrap();
    ///
    /// // "b" has the same length as "a", so it counts as a duplicate
    /// assert!(map.insert("b", 2).is_err());
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "ccc"]);
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
    pub fn clear(&mut self) {
        tree::dismantle(self.root.take());
        self.length = 0;
    }

    /// Returns the number of edges on the longest path from the root to a
    /// leaf. Empty and single-entry maps have height 0.
    ///
    /// The height never exceeds 2·log₂(N + 1).
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
    pub fn min(&self) -> Result<(&K, &V), EmptyTreeError> {
        self.extreme(Direction::Left)
    }

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::{BalancedOrderedMap, TreeError};
    ///
    /// fn largest(map: &BalancedOrderedMap<u8, char>) -> Result<char, TreeError> {
    ///     Ok(*map.max()?.1)
    /// }
    ///
    /// let mut map = BalancedOrderedMap::new();
    /// assert!(largest(&map).is_err());
    /// map.insert(7, 'g').unwrap();
    /// map.insert(2, 'b').unwrap();
    /// assert_eq!(largest(&map), Ok('g'));
    /// ```
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
    pub fn iter(&self) -> Iter<'_, K, V, Color> {
        Iter::new(self.root.as_deref(), self.length)
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// Each call starts a fresh traversal. Same as [`iter`](Self::iter).
    #[inline]
    pub fn traverse_in_order(&self) -> Iter<'_, K, V, Color> {
        self.iter()
    }

    /// Returns an iterator over entries in pre-order (node, left, right).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::BalancedOrderedMap;
    ///
    /// let mut map = BalancedOrderedMap::new();
    /// for key in [1, 2, 3] {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// let keys: Vec<i32> = map.pre_order().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, K, V, Color> {
        PreOrder::new(self.root.as_deref())
    }

    /// Returns an iterator over entries in post-order (left, right, node).
    pub fn post_order(&self) -> PostOrder<'_, K, V, Color> {
        PostOrder::new(self.root.as_deref())
    }

    /// Returns a depth-first traversal in the given order.
    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, K, V, Color> {
        Traverse::new(self.root.as_deref(), self.length, order)
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V, Color> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over values in key order.
    pub fn values(&self) -> Values<'_, K, V, Color> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable values in key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, Color> {
        ValuesMut::new(self.root.as_deref_mut(), self.length)
    }
}

impl<K, V, C: Comparator<K>> BalancedOrderedMap<K, V, C> {
    /// Inserts a key-value pair into the map.
    ///
    /// The entry is added as a red leaf; red-red violations are repaired by
    /// color flips and rotations on the way back up, and the root is
    /// repainted black.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`], carrying the rejected entry, if the key
    /// is already present. The map is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::BalancedOrderedMap;
    ///
    /// let mut map = BalancedOrderedMap::new();
    /// assert!(map.insert("key", 1).is_ok());
    ///
    /// let error = map.insert("key", 2).unwrap_err();
    /// assert_eq!(error.value(), &2);
    /// assert_eq!(map.find(&"key"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError<K, V>> {
        if let Err(error) = rebalance::insert(&mut self.root, key, value, &self.comparator) {
            tracing::debug!(length = self.length, "rejected duplicate key");
            return Err(error);
        }
        paint(&mut self.root, Color::Black);
        self.length += 1;
        Ok(())
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
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
    /// A missing key is not an error and leaves the tree untouched.
    ///
    /// # Complexity
    ///
    /// O(log N)
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
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::BalancedOrderedMap;
    ///
    /// let mut map = BalancedOrderedMap::new();
    /// for key in 1..=7 {
    ///     map.insert(key, key.to_string()).unwrap();
    /// }
    ///
    /// assert_eq!(map.remove_entry(&4), Some((4, "4".to_string())));
    /// assert_eq!(map.remove_entry(&4), None);
    /// assert_eq!(map.len(), 6);
    /// assert!(map.check_invariants().is_ok());
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        if !self.contains_key(key) {
            return None;
        }
        let entry = remove::remove(&mut self.root, key, &self.comparator)?;
        self.length -= 1;
        Some(entry)
    }

    /// Returns an iterator over the entries whose keys fall within `range`,
    /// in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_trees::BalancedOrderedMap;
    ///
    /// let mut map = BalancedOrderedMap::new();
    /// for key in 0..10 {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// let keys: Vec<i32> = map.range(7..).map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![7, 8, 9]);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<'_, K, V, Color, C>
    where
        R: RangeBounds<K>,
        K: Clone,
    {
        Range::new(self.root.as_deref(), &range, &self.comparator)
    }

    /// Verifies the red-black properties, the key order and the entry count.
    ///
    /// On success returns the black height of the tree: the number of black
    /// nodes on every path from the root down to a missing child.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Complexity
    ///
    /// O(N)
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        invariants::check(self.root.as_deref(), self.length, &self.comparator)
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

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, V, C: Comparator<K>> SortedMap<K, V> for BalancedOrderedMap<K, V, C> {
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

impl<K, V, C: Default> Default for BalancedOrderedMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for BalancedOrderedMap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            root: tree::clone_link(self.root.as_deref()),
            length: self.length,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BalancedOrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for BalancedOrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for BalancedOrderedMap<K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a BalancedOrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for BalancedOrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, Color>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.length)
    }
}

static_assertions::assert_impl_all!(BalancedOrderedMap<i32, String>: Send, Sync, Clone, Default);
