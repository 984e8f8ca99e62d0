//! Error types for the ordered maps.
//!
//! Lookups and deletions that miss are not errors: they report through
//! `Option` and `bool`. The types here cover the two misuse cases, inserting
//! a key that is already present and asking an empty map for its extremes,
//! plus the unified [`TreeError`] for callers that want a single error type.

use std::fmt;

const DUPLICATE_KEY_MESSAGE: &str = "an entry with the same key already exists in the map";
const EMPTY_TREE_MESSAGE: &str = "the map is empty";

/// Returned by `insert` when the key is already present.
///
/// The map is left untouched and the rejected entry is handed back.
///
/// # Examples
///
/// ```rust
/// use ordered_trees::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert(1, "one").unwrap();
///
/// let error = map.insert(1, "uno").unwrap_err();
/// assert_eq!(error.key(), &1);
/// assert_eq!(error.into_entry(), (1, "uno"));
/// assert_eq!(map.get(&1), Some(&"one"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DuplicateKeyError<K, V> {
    key: K,
    value: V,
}

impl<K, V> DuplicateKeyError<K, V> {
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The key that was rejected.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The value that was rejected.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Gives the rejected key and value back to the caller.
    pub fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> fmt::Debug for DuplicateKeyError<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DuplicateKeyError")
            .finish_non_exhaustive()
    }
}

impl<K, V> fmt::Display for DuplicateKeyError<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(DUPLICATE_KEY_MESSAGE)
    }
}

impl<K, V> std::error::Error for DuplicateKeyError<K, V> {}

/// Returned by `min` and `max` when the map has no entries.
///
/// # Examples
///
/// ```rust
/// use ordered_trees::{BalancedOrderedMap, EmptyTreeError};
///
/// let map: BalancedOrderedMap<i32, i32> = BalancedOrderedMap::new();
/// assert_eq!(map.min(), Err(EmptyTreeError));
/// assert_eq!(format!("{}", EmptyTreeError), "the map is empty");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EmptyTreeError;

impl fmt::Display for EmptyTreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(EMPTY_TREE_MESSAGE)
    }
}

impl std::error::Error for EmptyTreeError {}

/// Every failure an ordered map operation can report.
///
/// Converting a [`DuplicateKeyError`] into this type drops the rejected entry.
///
/// # Examples
///
/// ```rust
/// use ordered_trees::{OrderedMap, TreeError};
///
/// fn smallest_after_insert(map: &mut OrderedMap<i32, i32>) -> Result<i32, TreeError> {
///     map.insert(5, 50)?;
///     let (key, _) = map.min()?;
///     Ok(*key)
/// }
///
/// let mut map = OrderedMap::new();
/// assert_eq!(smallest_after_insert(&mut map), Ok(5));
/// assert_eq!(smallest_after_insert(&mut map), Err(TreeError::DuplicateKey));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// An insert hit a key that was already present.
    DuplicateKey,
    /// `min` or `max` was called on an empty map.
    EmptyTree,
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey => formatter.write_str(DUPLICATE_KEY_MESSAGE),
            Self::EmptyTree => formatter.write_str(EMPTY_TREE_MESSAGE),
        }
    }
}

impl std::error::Error for TreeError {}

impl<K, V> From<DuplicateKeyError<K, V>> for TreeError {
    fn from(_: DuplicateKeyError<K, V>) -> Self {
        Self::DuplicateKey
    }
}

impl From<EmptyTreeError> for TreeError {
    fn from(_: EmptyTreeError) -> Self {
        Self::EmptyTree
    }
}
