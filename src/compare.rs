//! Key comparators.
//!
//! Every map in this crate orders its keys with a [`Comparator`] chosen at
//! construction time. [`NaturalOrder`] (the default) defers to [`Ord`];
//! [`ReverseOrder`] flips it; [`FnComparator`] adapts any closure.
//!
//! # Examples
//!
//! ```rust
//! use ordered_trees::compare::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
//!
//! let by_length = FnComparator::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
//! assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total order over keys of type `K`.
///
/// Implementations must be consistent: `compare(a, b)` is the reverse of
/// `compare(b, a)`, and the relation is transitive. A map whose comparator
/// breaks these rules stays memory safe but may misplace or lose entries.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        right.cmp(left)
    }
}

/// Adapts a closure `Fn(&K, &K) -> Ordering` into a [`Comparator`].
///
/// # Examples
///
/// ```rust
/// use ordered_trees::compare::FnComparator;
/// use ordered_trees::BalancedOrderedMap;
///
/// let mut map = BalancedOrderedMap::with_comparator(FnComparator::new(
///     |left: &String, right: &String| left.to_lowercase().cmp(&right.to_lowercase()),
/// ));
/// map.insert("Apple".to_string(), 1).unwrap();
/// assert!(map.insert("apple".to_string(), 2).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    function: F,
}

impl<F> FnComparator<F> {
    /// Wraps `function` as a comparator.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<K: ?Sized, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (self.function)(left, right)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnComparator(..)")
    }
}

/// Lets several maps borrow one comparator.
impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for &C {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (**self).compare(left, right)
    }
}
