//! Lazy traversals over a tree.
//!
//! Every iterator here keeps its own explicit stack, so walking a degenerate
//! tree of any height never touches the call stack. Each call to a traversal
//! method starts a fresh walk; the borrow on the map rules out mutation while
//! one is in progress.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use smallvec::SmallVec;

use super::{Direction, Link, Node, NodeStack, STACK_CAPACITY, dismantle};
use crate::compare::Comparator;

/// The order in which a depth-first traversal visits nodes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum TraversalOrder {
    /// Node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, node, right subtree: ascending key order.
    #[default]
    InOrder,
    /// Left subtree, right subtree, then the node.
    PostOrder,
}

// =============================================================================
// In-order
// =============================================================================

/// An in-order (ascending key) iterator over borrowed entries.
///
/// Walks from both ends: `next` yields the smallest remaining entry and
/// `next_back` the largest.
pub struct Iter<'a, K, V, T> {
    front: NodeStack<'a, K, V, T>,
    back: NodeStack<'a, K, V, T>,
    remaining: usize,
}

impl<'a, K, V, T> Iter<'a, K, V, T> {
    pub(crate) fn new(root: Option<&'a Node<K, V, T>>, length: usize) -> Self {
        let mut iterator = Self {
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: length,
        };
        push_spine(&mut iterator.front, root, Direction::Left);
        push_spine(&mut iterator.back, root, Direction::Right);
        iterator
    }
}

/// Pushes `node` and every descendant reached by repeatedly following
/// `direction`.
fn push_spine<'a, K, V, T>(
    stack: &mut NodeStack<'a, K, V, T>,
    mut node: Option<&'a Node<K, V, T>>,
    direction: Direction,
) {
    while let Some(current) = node {
        stack.push(current);
        node = current.child(direction);
    }
}

impl<'a, K, V, T> Iterator for Iter<'a, K, V, T> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        push_spine(
            &mut self.front,
            node.child(Direction::Right),
            Direction::Left,
        );
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, T> DoubleEndedIterator for Iter<'_, K, V, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        push_spine(
            &mut self.back,
            node.child(Direction::Left),
            Direction::Right,
        );
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }
}

impl<K, V, T> ExactSizeIterator for Iter<'_, K, V, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, T> FusedIterator for Iter<'_, K, V, T> {}

impl<K, V, T> Clone for Iter<'_, K, V, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, T> fmt::Debug for Iter<'_, K, V, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

/// An in-order iterator over keys.
pub struct Keys<'a, K, V, T> {
    pub(crate) inner: Iter<'a, K, V, T>,
}

impl<'a, K, V, T> Iterator for Keys<'a, K, V, T> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, T> DoubleEndedIterator for Keys<'_, K, V, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V, T> ExactSizeIterator for Keys<'_, K, V, T> {}

impl<K, V, T> FusedIterator for Keys<'_, K, V, T> {}

/// An in-order iterator over values.
pub struct Values<'a, K, V, T> {
    pub(crate) inner: Iter<'a, K, V, T>,
}

impl<'a, K, V, T> Iterator for Values<'a, K, V, T> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, T> DoubleEndedIterator for Values<'_, K, V, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V, T> ExactSizeIterator for Values<'_, K, V, T> {}

impl<K, V, T> FusedIterator for Values<'_, K, V, T> {}

/// A value handed out next, paired with the right subtree still to visit.
type ValueFrame<'a, K, V, T> = (&'a mut V, Option<&'a mut Node<K, V, T>>);

/// An in-order iterator over mutable references to values.
///
/// Keys stay shared: changing them could break the ordering invariant.
pub struct ValuesMut<'a, K, V, T> {
    stack: SmallVec<[ValueFrame<'a, K, V, T>; STACK_CAPACITY]>,
    remaining: usize,
}

impl<'a, K, V, T> ValuesMut<'a, K, V, T> {
    pub(crate) fn new(root: Option<&'a mut Node<K, V, T>>, length: usize) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
            remaining: length,
        };
        iterator.descend(root);
        iterator
    }

    /// Splits each node on the left spine into its value and right subtree.
    fn descend(&mut self, mut node: Option<&'a mut Node<K, V, T>>) {
        while let Some(current) = node {
            let Node { value, links, .. } = current;
            let [left, right] = links;
            self.stack.push((value, right.as_deref_mut()));
            node = left.as_deref_mut();
        }
    }
}

impl<'a, K, V, T> Iterator for ValuesMut<'a, K, V, T> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, right) = self.stack.pop()?;
        self.descend(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, T> ExactSizeIterator for ValuesMut<'_, K, V, T> {}

impl<K, V, T> FusedIterator for ValuesMut<'_, K, V, T> {}

/// An owning in-order iterator.
pub struct IntoIter<K, V, T> {
    stack: Vec<Box<Node<K, V, T>>>,
    remaining: usize,
}

impl<K, V, T> IntoIter<K, V, T> {
    pub(crate) fn new(root: Link<K, V, T>, length: usize) -> Self {
        let mut iterator = Self {
            stack: Vec::new(),
            remaining: length,
        };
        iterator.descend(root);
        iterator
    }

    /// Pushes the left spine, detaching each left child from its parent.
    fn descend(&mut self, mut link: Link<K, V, T>) {
        while let Some(mut node) = link {
            link = node[Direction::Left].take();
            self.stack.push(node);
        }
    }
}

impl<K, V, T> Iterator for IntoIter<K, V, T> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.descend(node[Direction::Right].take());
        self.remaining -= 1;
        Some(node.into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, T> ExactSizeIterator for IntoIter<K, V, T> {}

impl<K, V, T> FusedIterator for IntoIter<K, V, T> {}

impl<K, V, T> Drop for IntoIter<K, V, T> {
    fn drop(&mut self) {
        for node in self.stack.drain(..) {
            dismantle(Some(node));
        }
    }
}

// =============================================================================
// Pre-order and Post-order
// =============================================================================

/// A pre-order iterator over borrowed entries.
pub struct PreOrder<'a, K, V, T> {
    stack: NodeStack<'a, K, V, T>,
}

impl<'a, K, V, T> PreOrder<'a, K, V, T> {
    pub(crate) fn new(root: Option<&'a Node<K, V, T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K, V, T> Iterator for PreOrder<'a, K, V, T> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child(Direction::Right));
        self.stack.extend(node.child(Direction::Left));
        Some((&node.key, &node.value))
    }
}

impl<K, V, T> FusedIterator for PreOrder<'_, K, V, T> {}

/// Post-order walk over nodes.
pub struct PostOrderNodes<'a, K, V, T> {
    /// Each node is pushed once unexpanded and, after its children have been
    /// scheduled, once more as expanded.
    stack: SmallVec<[(&'a Node<K, V, T>, bool); STACK_CAPACITY]>,
}

impl<'a, K, V, T> PostOrderNodes<'a, K, V, T> {
    pub fn new(root: Option<&'a Node<K, V, T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, K, V, T> Iterator for PostOrderNodes<'a, K, V, T> {
    type Item = &'a Node<K, V, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.child(Direction::Right) {
                self.stack.push((right, false));
            }
            if let Some(left) = node.child(Direction::Left) {
                self.stack.push((left, false));
            }
        }
    }
}

/// A post-order iterator over borrowed entries.
pub struct PostOrder<'a, K, V, T> {
    nodes: PostOrderNodes<'a, K, V, T>,
}

impl<'a, K, V, T> PostOrder<'a, K, V, T> {
    pub(crate) fn new(root: Option<&'a Node<K, V, T>>) -> Self {
        Self {
            nodes: PostOrderNodes::new(root),
        }
    }
}

impl<'a, K, V, T> Iterator for PostOrder<'a, K, V, T> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| (&node.key, &node.value))
    }
}

impl<K, V, T> FusedIterator for PostOrder<'_, K, V, T> {}

/// A depth-first traversal in a caller-chosen [`TraversalOrder`].
pub enum Traverse<'a, K, V, T> {
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, K, V, T>),
    /// See [`Iter`].
    InOrder(Iter<'a, K, V, T>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, K, V, T>),
}

impl<'a, K, V, T> Traverse<'a, K, V, T> {
    pub(crate) fn new(
        root: Option<&'a Node<K, V, T>>,
        length: usize,
        order: TraversalOrder,
    ) -> Self {
        match order {
            TraversalOrder::PreOrder => Self::PreOrder(PreOrder::new(root)),
            TraversalOrder::InOrder => Self::InOrder(Iter::new(root, length)),
            TraversalOrder::PostOrder => Self::PostOrder(PostOrder::new(root)),
        }
    }
}

impl<'a, K, V, T> Iterator for Traverse<'a, K, V, T> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::PreOrder(iterator) => iterator.next(),
            Self::InOrder(iterator) => iterator.next(),
            Self::PostOrder(iterator) => iterator.next(),
        }
    }
}

impl<K, V, T> FusedIterator for Traverse<'_, K, V, T> {}

// =============================================================================
// Range
// =============================================================================

/// An in-order iterator over the entries whose keys fall within a range.
pub struct Range<'a, K, V, T, C> {
    stack: NodeStack<'a, K, V, T>,
    upper: Bound<K>,
    comparator: &'a C,
}

impl<'a, K, V, T, C> Range<'a, K, V, T, C>
where
    K: Clone,
    C: Comparator<K>,
{
    /// Seeds the stack with every node on the search path for the lower
    /// bound whose key lies at or above it.
    pub(crate) fn new<R>(root: Option<&'a Node<K, V, T>>, range: &R, comparator: &'a C) -> Self
    where
        R: RangeBounds<K>,
    {
        let mut stack = NodeStack::new();
        let mut node = root;
        while let Some(current) = node {
            if above_lower(range.start_bound(), &current.key, comparator) {
                stack.push(current);
                node = current.child(Direction::Left);
            } else {
                node = current.child(Direction::Right);
            }
        }
        Self {
            stack,
            upper: range.end_bound().cloned(),
            comparator,
        }
    }
}

fn above_lower<K, C: Comparator<K>>(lower: Bound<&K>, key: &K, comparator: &C) -> bool {
    match lower {
        Bound::Included(bound) => comparator.compare(key, bound).is_ge(),
        Bound::Excluded(bound) => comparator.compare(key, bound).is_gt(),
        Bound::Unbounded => true,
    }
}

fn below_upper<K, C: Comparator<K>>(upper: Bound<&K>, key: &K, comparator: &C) -> bool {
    match upper {
        Bound::Included(bound) => comparator.compare(key, bound).is_le(),
        Bound::Excluded(bound) => comparator.compare(key, bound).is_lt(),
        Bound::Unbounded => true,
    }
}

impl<'a, K, V, T, C> Iterator for Range<'a, K, V, T, C>
where
    C: Comparator<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if !below_upper(self.upper.as_ref(), &node.key, self.comparator) {
            self.stack.clear();
            return None;
        }
        push_spine(
            &mut self.stack,
            node.child(Direction::Right),
            Direction::Left,
        );
        Some((&node.key, &node.value))
    }
}

impl<K, V, T, C: Comparator<K>> FusedIterator for Range<'_, K, V, T, C> {}
