//! Structural validation of a red-black tree.

use std::cmp::Ordering;
use std::fmt;

use super::Color;
use super::rebalance::{RedBlackNode, is_red};
use crate::compare::Comparator;
use crate::tree::{Direction, Iter};

/// A broken red-black tree property, reported by
/// [`BalancedOrderedMap::check_invariants`](super::BalancedOrderedMap::check_invariants).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum InvariantViolation {
    /// The root is red.
    RedRoot,
    /// A red node has a red child.
    RedChildOfRed,
    /// Two sibling subtrees contain different numbers of black nodes on
    /// their root-to-leaf paths.
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// An in-order walk yields two keys that are not strictly ascending.
    OutOfOrder,
    /// The tracked entry count disagrees with the number of nodes.
    CountMismatch {
        /// The count the map reports.
        expected: usize,
        /// The number of nodes actually reachable from the root.
        actual: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "the root is red"),
            Self::RedChildOfRed => write!(formatter, "a red node has a red child"),
            Self::BlackHeightMismatch { left, right } => write!(
                formatter,
                "black heights differ between siblings: left {left}, right {right}"
            ),
            Self::OutOfOrder => write!(formatter, "keys are not in strictly ascending order"),
            Self::CountMismatch { expected, actual } => write!(
                formatter,
                "entry count is {expected} but the tree holds {actual} nodes"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Checks every red-black property and returns the black height: the number
/// of black nodes on any path from the root down to a missing child.
pub fn check<K, V, C>(
    root: Option<&RedBlackNode<K, V>>,
    length: usize,
    comparator: &C,
) -> Result<usize, InvariantViolation>
where
    C: Comparator<K>,
{
    if is_red(root) {
        return Err(InvariantViolation::RedRoot);
    }
    let (black_height, actual) = measure(root)?;
    if actual != length {
        return Err(InvariantViolation::CountMismatch {
            expected: length,
            actual,
        });
    }
    let mut keys = Iter::new(root, actual).map(|(key, _)| key);
    if let Some(mut previous) = keys.next() {
        for key in keys {
            if comparator.compare(previous, key) != Ordering::Less {
                return Err(InvariantViolation::OutOfOrder);
            }
            previous = key;
        }
    }
    Ok(black_height)
}

/// Returns the black height and node count of a subtree.
fn measure<K, V>(node: Option<&RedBlackNode<K, V>>) -> Result<(usize, usize), InvariantViolation> {
    let Some(node) = node else {
        return Ok((0, 0));
    };
    let left = node.child(Direction::Left);
    let right = node.child(Direction::Right);
    if node.tag == Color::Red && (is_red(left) || is_red(right)) {
        return Err(InvariantViolation::RedChildOfRed);
    }
    let (left_height, left_count) = measure(left)?;
    let (right_height, right_count) = measure(right)?;
    if left_height != right_height {
        return Err(InvariantViolation::BlackHeightMismatch {
            left: left_height,
            right: right_height,
        });
    }
    let own = usize::from(node.tag == Color::Black);
    Ok((left_height + own, left_count + right_count + 1))
}
