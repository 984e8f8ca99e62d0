//! Node shape and traversal plumbing shared by both ordered maps.
//!
//! A tree is a chain of exclusively owned [`Box`]ed nodes with no parent
//! pointers. Each node carries a `tag` that the owning map is free to use:
//! the plain binary search tree stores `()`, the red-black tree stores its
//! color. Everything in this module is agnostic of the tag, so search,
//! traversal, cloning and teardown are written once.

use std::cmp::Ordering;
use std::mem;
use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use crate::compare::Comparator;

mod traversal;

pub use traversal::{
    IntoIter, Iter, Keys, PostOrder, PreOrder, Range, Traverse, TraversalOrder, Values,
    ValuesMut,
};

/// Inline capacity of traversal stacks.
///
/// A red-black tree only reaches height 48 past 2^24 entries, so balanced
/// traversals rarely spill to the heap.
pub const STACK_CAPACITY: usize = 48;

pub type NodeStack<'a, K, V, T> = SmallVec<[&'a Node<K, V, T>; STACK_CAPACITY]>;

// =============================================================================
// Direction
// =============================================================================

/// Which child of a node a link leads to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The other direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The direction a search for a key goes when the key compares as
    /// `ordering` against the current node. Equal keys go left, which is where
    /// the in-order predecessor lives.
    #[inline]
    pub const fn toward(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Right,
            Ordering::Less | Ordering::Equal => Self::Left,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

// =============================================================================
// Node
// =============================================================================

/// An owned, possibly empty, subtree.
pub type Link<K, V, T> = Option<Box<Node<K, V, T>>>;

/// A tree node. Children are indexed by [`Direction`].
pub struct Node<K, V, T> {
    pub key: K,
    pub value: V,
    pub tag: T,
    links: [Link<K, V, T>; 2],
}

impl<K, V, T> Node<K, V, T> {
    /// Creates a leaf.
    pub const fn leaf(key: K, value: V, tag: T) -> Self {
        Self {
            key,
            value,
            tag,
            links: [None, None],
        }
    }

    /// The child in `direction`, if any.
    #[inline]
    pub fn child(&self, direction: Direction) -> Option<&Self> {
        self[direction].as_deref()
    }

    /// Both links at once: the one in `direction` first, then its opposite.
    #[inline]
    pub const fn links_mut(
        &mut self,
        direction: Direction,
    ) -> (&mut Link<K, V, T>, &mut Link<K, V, T>) {
        let [left, right] = &mut self.links;
        match direction {
            Direction::Left => (left, right),
            Direction::Right => (right, left),
        }
    }

    /// `true` when both children are present.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.links[0].is_some() && self.links[1].is_some()
    }

    /// Takes whichever child exists, preferring the left one.
    ///
    /// Used when splicing out a node that has at most one child.
    #[inline]
    pub fn take_only_child(&mut self) -> Link<K, V, T> {
        self.links[0].take().or_else(|| self.links[1].take())
    }

    /// Replaces this node's entry, returning the old one.
    pub const fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (
            mem::replace(&mut self.key, key),
            mem::replace(&mut self.value, value),
        )
    }

    /// Consumes a detached node, yielding its entry.
    ///
    /// Children still attached are torn down without recursion.
    pub fn into_entry(mut self: Box<Self>) -> (K, V) {
        for link in &mut self.links {
            dismantle(link.take());
        }
        let Self { key, value, .. } = *self;
        (key, value)
    }

    /// Moves down to the end of the chain of children in `direction`.
    pub fn extreme(&self, direction: Direction) -> &Self {
        let mut node = self;
        while let Some(next) = node.child(direction) {
            node = next;
        }
        node
    }
}

impl<K, V, T> Index<Direction> for Node<K, V, T> {
    type Output = Link<K, V, T>;

    #[inline]
    fn index(&self, direction: Direction) -> &Self::Output {
        &self.links[direction.index()]
    }
}

impl<K, V, T> IndexMut<Direction> for Node<K, V, T> {
    #[inline]
    fn index_mut(&mut self, direction: Direction) -> &mut Self::Output {
        &mut self.links[direction.index()]
    }
}

// =============================================================================
// Shared Algorithms
// =============================================================================

/// Finds the node holding `key`.
pub fn search<'a, K, V, T, C>(
    root: Option<&'a Node<K, V, T>>,
    key: &K,
    comparator: &C,
) -> Option<&'a Node<K, V, T>>
where
    C: Comparator<K>,
{
    let mut current = root;
    while let Some(node) = current {
        current = match comparator.compare(key, &node.key) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.child(Direction::Left),
            Ordering::Greater => node.child(Direction::Right),
        };
    }
    None
}

/// Finds the node holding `key`, mutably.
pub fn search_mut<'a, K, V, T, C>(
    root: Option<&'a mut Node<K, V, T>>,
    key: &K,
    comparator: &C,
) -> Option<&'a mut Node<K, V, T>>
where
    C: Comparator<K>,
{
    let mut current = root;
    while let Some(node) = current {
        let direction = match comparator.compare(key, &node.key) {
            Ordering::Equal => return Some(node),
            Ordering::Less => Direction::Left,
            Ordering::Greater => Direction::Right,
        };
        current = node[direction].as_deref_mut();
    }
    None
}

/// Number of edges on the longest root-to-leaf path; 0 for an empty tree.
pub fn height<K, V, T>(root: Option<&Node<K, V, T>>) -> usize {
    let mut deepest = 0;
    let mut stack: SmallVec<[(&Node<K, V, T>, usize); STACK_CAPACITY]> = SmallVec::new();
    stack.extend(root.map(|node| (node, 0)));
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        for direction in [Direction::Left, Direction::Right] {
            if let Some(child) = node.child(direction) {
                stack.push((child, depth + 1));
            }
        }
    }
    deepest
}

/// Frees a subtree with an explicit stack.
///
/// Dropping a `Box` chain directly recurses once per level, which a
/// degenerate binary search tree turns into a stack overflow.
pub fn dismantle<K, V, T>(link: Link<K, V, T>) {
    let mut pending: Vec<Box<Node<K, V, T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.links.iter_mut().filter_map(Option::take));
    }
}

/// Deep-copies a subtree with an explicit stack.
///
/// Nodes are rebuilt in post-order, so both children of a node are finished
/// (and sit on top of `built`) by the time the node itself is copied.
pub fn clone_link<K, V, T>(root: Option<&Node<K, V, T>>) -> Link<K, V, T>
where
    K: Clone,
    V: Clone,
    T: Clone,
{
    let mut built: Vec<Box<Node<K, V, T>>> = Vec::new();
    for node in traversal::PostOrderNodes::new(root) {
        let right = node[Direction::Right].as_ref().and_then(|_| built.pop());
        let left = node[Direction::Left].as_ref().and_then(|_| built.pop());
        built.push(Box::new(Node {
            key: node.key.clone(),
            value: node.value.clone(),
            tag: node.tag.clone(),
            links: [left, right],
        }));
    }
    built.pop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;
    use rstest::rstest;

    fn chain(length: i32) -> Link<i32, i32, ()> {
        let mut root: Link<i32, i32, ()> = None;
        for key in (0..length).rev() {
            let mut node = Box::new(Node::leaf(key, key * 10, ()));
            node[Direction::Right] = root.take();
            root = Some(node);
        }
        root
    }

    #[rstest]
    fn test_direction_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[rstest]
    #[case(Ordering::Less, Direction::Left)]
    #[case(Ordering::Equal, Direction::Left)]
    #[case(Ordering::Greater, Direction::Right)]
    fn test_direction_toward(#[case] ordering: Ordering, #[case] expected: Direction) {
        assert_eq!(Direction::toward(ordering), expected);
    }

    #[rstest]
    fn test_search_finds_every_key_in_chain() {
        let root = chain(10);
        for key in 0..10 {
            let node = search(root.as_deref(), &key, &NaturalOrder);
            assert_eq!(node.map(|node| node.value), Some(key * 10));
        }
        assert!(search(root.as_deref(), &10, &NaturalOrder).is_none());
        dismantle(root);
    }

    #[rstest]
    fn test_search_mut_updates_value() {
        let mut root = chain(5);
        if let Some(node) = search_mut(root.as_deref_mut(), &3, &NaturalOrder) {
            node.value = -1;
        }
        assert_eq!(
            search(root.as_deref(), &3, &NaturalOrder).map(|node| node.value),
            Some(-1)
        );
        dismantle(root);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(7, 6)]
    fn test_height_of_chain(#[case] length: i32, #[case] expected: usize) {
        let root = chain(length);
        assert_eq!(height(root.as_deref()), expected);
        dismantle(root);
    }

    #[rstest]
    fn test_extreme_walks_to_the_end() {
        let root = chain(4);
        let node = root.as_deref().map(|node| node.extreme(Direction::Right).key);
        assert_eq!(node, Some(3));
        let node = root.as_deref().map(|node| node.extreme(Direction::Left).key);
        assert_eq!(node, Some(0));
        dismantle(root);
    }

    #[rstest]
    fn test_dismantle_deep_chain_does_not_overflow() {
        dismantle(chain(200_000));
    }

    #[rstest]
    fn test_clone_link_preserves_shape() {
        let mut root = Box::new(Node::leaf(2, 20, 'b'));
        root[Direction::Left] = Some(Box::new(Node::leaf(1, 10, 'a')));
        root[Direction::Right] = Some(Box::new(Node::leaf(3, 30, 'c')));
        let copy = clone_link(Some(&*root));

        let copy = copy.as_deref();
        assert_eq!(copy.map(|node| (node.key, node.tag)), Some((2, 'b')));
        assert_eq!(
            copy.and_then(|node| node.child(Direction::Left))
                .map(|node| node.key),
            Some(1)
        );
        assert_eq!(
            copy.and_then(|node| node.child(Direction::Right))
                .map(|node| node.key),
            Some(3)
        );
    }

    #[rstest]
    fn test_into_entry_detaches_children() {
        let mut node = Box::new(Node::leaf(-1, -10, ()));
        node[Direction::Right] = chain(1_000);
        assert_eq!(node.into_entry(), (-1, -10));
    }
}
