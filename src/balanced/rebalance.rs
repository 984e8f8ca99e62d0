//! Rotations, color flips and the insertion repair.

use std::cmp::Ordering;
use std::mem;

use super::Color;
use crate::compare::Comparator;
use crate::error::DuplicateKeyError;
use crate::tree::{Direction, Link, Node};

pub type RedBlackNode<K, V> = Node<K, V, Color>;
pub type RedBlackLink<K, V> = Link<K, V, Color>;

/// Missing children count as black.
#[inline]
pub fn is_red<K, V>(node: Option<&RedBlackNode<K, V>>) -> bool {
    node.is_some_and(|node| node.tag == Color::Red)
}

#[inline]
pub fn child_is_red<K, V>(node: &RedBlackNode<K, V>, direction: Direction) -> bool {
    is_red(node.child(direction))
}

/// Paints the node at `link`, if there is one.
#[inline]
pub fn paint<K, V>(link: &mut RedBlackLink<K, V>, color: Color) {
    if let Some(node) = link {
        node.tag = color;
    }
}

/// Rotates the subtree at `node` toward `direction`.
///
/// The child on the opposite side is promoted into `node`'s place and turned
/// black; the demoted node becomes its `direction` child, turned red, and
/// inherits the promoted child's inner subtree.
///
/// ```text
///        N                    S
///       / \                  / \
///      a   S      left      N   c
///         / \    ----->    / \
///        b   c            a   b
/// ```
pub fn rotate<K, V>(node: &mut Box<RedBlackNode<K, V>>, direction: Direction) {
    let Some(mut promoted) = node[direction.opposite()].take() else {
        return;
    };
    node[direction.opposite()] = promoted[direction].take();
    node.tag = Color::Red;
    promoted.tag = Color::Black;
    mem::swap(node, &mut promoted);
    // `node` now holds the promoted child; `promoted` holds the demoted node.
    node[direction] = Some(promoted);
    tracing::trace!(?direction, "single rotation");
}

/// Straightens a zig-zag: rotates the child opposite `direction` away from
/// `direction`, then rotates `node` toward `direction`.
pub fn rotate_double<K, V>(node: &mut Box<RedBlackNode<K, V>>, direction: Direction) {
    if let Some(child) = node[direction.opposite()].as_mut() {
        rotate(child, direction.opposite());
    }
    rotate(node, direction);
}

/// Inserts a new red leaf below `link`, repairing red-red violations while
/// the recursion unwinds. The root may be left red; the caller repaints it.
///
/// Recursion depth is bounded by the height of the tree, which the
/// invariants keep logarithmic.
pub fn insert<K, V, C>(
    link: &mut RedBlackLink<K, V>,
    key: K,
    value: V,
    comparator: &C,
) -> Result<(), DuplicateKeyError<K, V>>
where
    C: Comparator<K>,
{
    match link {
        None => {
            *link = Some(Box::new(Node::leaf(key, value, Color::Red)));
            Ok(())
        }
        Some(node) => {
            let direction = match comparator.compare(&key, &node.key) {
                Ordering::Equal => return Err(DuplicateKeyError::new(key, value)),
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            insert(&mut node[direction], key, value, comparator)?;
            repair_after_insert(node, direction);
            Ok(())
        }
    }
}

/// Fixes `node` after its `direction` child has changed.
fn repair_after_insert<K, V>(node: &mut Box<RedBlackNode<K, V>>, direction: Direction) {
    let Some(child) = node.child(direction) else {
        return;
    };
    if child.tag != Color::Red {
        return;
    }
    if child_is_red(node, direction.opposite()) {
        node.tag = Color::Red;
        paint(&mut node[Direction::Left], Color::Black);
        paint(&mut node[Direction::Right], Color::Black);
        tracing::trace!("color flip");
    } else if child_is_red(child, direction) {
        rotate(node, direction.opposite());
    } else if child_is_red(child, direction.opposite()) {
        rotate_double(node, direction.opposite());
    }
}
