//! Single-pass top-down deletion.
//!
//! The search walks down from the root and, whenever the node it is about to
//! leave and the next node on the path are both black, pushes a red node down
//! into the path first. By the time the walk runs out of links, the last node
//! on the path can be spliced out without changing any black height.
//!
//! Equal keys steer the walk left, so when the target has a left subtree the
//! spliced node is its in-order predecessor, whose entry then replaces the
//! target's.

use std::cmp::Ordering;

use super::Color;
use super::rebalance::{RedBlackLink, RedBlackNode, child_is_red, paint, rotate, rotate_double};
use crate::compare::Comparator;
use crate::tree::{self, Direction};

/// Removes the entry stored under `key` and repaints the root black.
///
/// The caller checks that `key` is present beforehand; on a miss the walk
/// still rebalances along the search path but removes nothing.
pub fn remove<K, V, C>(
    root: &mut RedBlackLink<K, V>,
    key: &K,
    comparator: &C,
) -> Option<(K, V)>
where
    C: Comparator<K>,
{
    let removed = remove_top_down(root, key, comparator);
    paint(root, Color::Black);
    let (removed_key, removed_value) = removed?;
    if comparator.compare(&removed_key, key) == Ordering::Equal {
        return Some((removed_key, removed_value));
    }
    let target = tree::search_mut(root.as_deref_mut(), key, comparator)?;
    tracing::trace!("moved in-order predecessor into removed node");
    Some(target.replace_entry(removed_key, removed_value))
}

/// The root has no parent or sibling, so only the rotation case applies.
fn remove_top_down<K, V, C>(
    root: &mut RedBlackLink<K, V>,
    key: &K,
    comparator: &C,
) -> Option<(K, V)>
where
    C: Comparator<K>,
{
    let node = root.as_mut()?;
    let ordering = comparator.compare(key, &node.key);
    let found = ordering == Ordering::Equal;
    let direction = Direction::toward(ordering);

    if node.tag == Color::Black
        && !child_is_red(node, direction)
        && child_is_red(node, direction.opposite())
    {
        rotate(node, direction);
        // The old root is now the `direction` child of the new one.
        return advance(node, direction, direction, key, found, comparator);
    }
    if node[direction].is_some() {
        return descend(node, direction, key, found, comparator);
    }
    if !found {
        return None;
    }
    let mut removed = root.take()?;
    *root = removed.take_only_child();
    Some(removed.into_entry())
}

/// Visits the `last` child of `parent`, making sure it (or the node that
/// replaces it on the path) is red before the walk leaves it.
fn descend<K, V, C>(
    mut parent: &mut Box<RedBlackNode<K, V>>,
    mut last: Direction,
    key: &K,
    mut found: bool,
    comparator: &C,
) -> Option<(K, V)>
where
    C: Comparator<K>,
{
    let current = parent.child(last)?;
    let ordering = comparator.compare(key, &current.key);
    found |= ordering == Ordering::Equal;
    let direction = Direction::toward(ordering);

    if current.tag == Color::Black && !child_is_red(current, direction) {
        if child_is_red(current, direction.opposite()) {
            // Lift the red child above `current`; `current` turns red.
            rotate(parent[last].as_mut()?, direction);
            parent = parent[last].as_mut()?;
            last = direction;
        } else if let Some(sibling) = parent.child(last.opposite()) {
            if !child_is_red(sibling, Direction::Left) && !child_is_red(sibling, Direction::Right)
            {
                parent.tag = Color::Black;
                let (current, sibling) = parent.links_mut(last);
                paint(current, Color::Red);
                paint(sibling, Color::Red);
                tracing::trace!("color flip");
            } else {
                if child_is_red(sibling, last) {
                    rotate_double(parent, last);
                } else {
                    rotate(parent, last);
                }
                parent.tag = Color::Red;
                paint(&mut parent[Direction::Left], Color::Black);
                paint(&mut parent[Direction::Right], Color::Black);
                // The old parent sits below the new subtree root, still
                // holding `current` in the same direction.
                parent = parent[last].as_mut()?;
                paint(&mut parent[last], Color::Red);
            }
        }
    }
    advance(parent, last, direction, key, found, comparator)
}

/// Steps from the `last` child of `parent` toward `direction`, or splices
/// that child out when the path ends there.
fn advance<K, V, C>(
    parent: &mut Box<RedBlackNode<K, V>>,
    last: Direction,
    direction: Direction,
    key: &K,
    found: bool,
    comparator: &C,
) -> Option<(K, V)>
where
    C: Comparator<K>,
{
    let current = parent[last].as_mut()?;
    if current[direction].is_some() {
        return descend(current, direction, key, found, comparator);
    }
    if !found {
        return None;
    }
    let mut removed = parent[last].take()?;
    parent[last] = removed.take_only_child();
    Some(removed.into_entry())
}
