//! # ordered-trees
//!
//! Ordered maps built on binary search trees, with a plain and a
//! self-balancing variant behind one contract.
//!
//! ## Overview
//!
//! - **[`OrderedMap`]**: an unbalanced binary search tree. Simple, and fast
//!   for random insertion orders, but sorted input degrades it into a chain.
//! - **[`BalancedOrderedMap`]**: a red-black tree with O(log N) insert, find
//!   and delete regardless of insertion order.
//! - **[`SortedMap`]**: the trait both maps implement.
//! - **[`compare`]**: the [`Comparator`](compare::Comparator) that orders
//!   keys, supplied at construction.
//!
//! Keys are unique: inserting a present key is rejected with a
//! [`DuplicateKeyError`] that hands the entry back. Looking up or deleting a
//! missing key is not an error. Asking an empty map for its minimum or
//! maximum yields [`EmptyTreeError`].
//!
//! ## Feature Flags
//!
//! - `ordered-map`: the plain binary search tree
//! - `balanced`: the red-black tree
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Rebalancing steps emit `tracing` events at `trace` level and rejected
//! duplicates at `debug` level. Install any `tracing` subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use ordered_trees::prelude::*;
//!
//! let mut plain = OrderedMap::new();
//! let mut balanced = BalancedOrderedMap::new();
//! for key in [10, 20, 30] {
//!     plain.insert(key, ()).unwrap();
//!     balanced.insert(key, ()).unwrap();
//! }
//!
//! assert_eq!(plain.height(), 2);
//! assert_eq!(balanced.height(), 1);
//! assert!(plain.keys().eq(balanced.keys()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the maps, the shared trait and the error types.
///
/// # Usage
///
/// ```rust
/// use ordered_trees::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
    pub use crate::error::{DuplicateKeyError, EmptyTreeError, TreeError};
    pub use crate::sorted_map::SortedMap;
    pub use crate::tree::TraversalOrder;

    #[cfg(feature = "ordered-map")]
    pub use crate::ordered_map::OrderedMap;

    #[cfg(feature = "balanced")]
    pub use crate::balanced::BalancedOrderedMap;
}

pub mod compare;
pub mod error;
mod sorted_map;
mod tree;

/// Iterator types returned by the maps.
pub mod iter {
    pub use crate::tree::{
        IntoIter, Iter, Keys, PostOrder, PreOrder, Range, Traverse, TraversalOrder, Values,
        ValuesMut,
    };
}

#[cfg(feature = "ordered-map")]
mod ordered_map;

#[cfg(feature = "balanced")]
pub mod balanced;

pub use error::{DuplicateKeyError, EmptyTreeError, TreeError};
pub use sorted_map::SortedMap;
pub use tree::TraversalOrder;

#[cfg(feature = "ordered-map")]
pub use ordered_map::OrderedMap;

#[cfg(feature = "balanced")]
pub use balanced::BalancedOrderedMap;
