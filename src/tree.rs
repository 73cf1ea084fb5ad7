//! A BST over unique values that is balanced on construction and on request.
//!
//! Ordinary [`insert`][Tree::insert] and [`delete`][Tree::delete] keep the
//! ordering invariant but do no balancing, so a long run of mutations can
//! degrade the tree toward a list. [`rebalance`][Tree::rebalance] rebuilds a
//! height-minimal shape from the current values.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::build([7, 1, 4, 4, 2]);
//! assert!(tree.in_order().eq(&[1, 2, 4, 7]));
//!
//! // Duplicates are silently ignored.
//! assert!(!tree.insert(4));
//!
//! // Growing one side unbalances the tree...
//! for x in 8..12 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until it is rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 3);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, enabled, instrument, trace, Level};

use crate::iter::IntoIter;
use crate::node::{Link, Node};
use crate::Order;

/// A Binary Search Tree over unique values. All values in a node's left
/// subtree are strictly less than its value and all values in its right
/// subtree are strictly greater.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlinks node by node instead of letting `Box` drop each subtree
        // recursively.
        drop(IntoIter::new(self.root.take()));
    }
}

/// Copies the tree node by node in level order, so the copy has the same
/// shape without recursing once per level.
impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let Some(root) = self.root() else {
            return Self::new();
        };

        let mut new_root = Node::new_boxed(root.value.clone());
        {
            let mut queue: VecDeque<(&Node<T>, &mut Node<T>)> = VecDeque::new();
            queue.push_back((root, &mut *new_root));
            while let Some((from, to)) = queue.pop_front() {
                if let Some(left) = from.left() {
                    let copy = to.left.insert(Node::new_boxed(left.value.clone()));
                    queue.push_back((left, &mut **copy));
                }
                if let Some(right) = from.right() {
                    let copy = to.right.insert(Node::new_boxed(right.value.clone()));
                    queue.push_back((right, &mut **copy));
                }
            }
        }

        Self {
            root: Some(new_root),
        }
    }
}

/// Structural equality: same shape and the same value at every position.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut queue = VecDeque::new();
        queue.push_back((self.root(), other.root()));
        while let Some(pair) = queue.pop_front() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    queue.push_back((a.left(), b.left()));
                    queue.push_back((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Lists the values in level order, which pins down the shape.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.level_order()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree of minimal height from `values`. The values may be in
    /// any order and may contain duplicates: they are sorted and
    /// deduplicated first.
    ///
    /// Each subtree is rooted at the element at index `len / 2` of its sorted
    /// slice, so for an even number of values the root is the upper of the
    /// two middle values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([4, 3, 2, 1]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// assert!(tree.pre_order().eq(&[3, 2, 1, 4]));
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let tree = Self {
            root: build_sorted(values),
        };
        tree.check_invariants();
        tree
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree. No count is stored, so this walks
    /// every node and takes `O(N)`.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// Inserts `value` as a new leaf. Returns whether the value was added.
    ///
    /// Inserting a value that is already present is a no-op: values are
    /// unique and the existing node is kept as is. Inserting into an empty
    /// tree creates the root. No balancing happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert!(tree.in_order().eq(&[1, 2]));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        if self.root.is_none() {
            trace!("inserting into empty tree, creating root");
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(value));

        self.check_invariants();
        true
    }

    /// Deletes the node holding `value`. Returns whether a node was removed.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children stays in place and takes the value of its in-order
    /// successor, whose own node is then removed from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::build(1..=7);
    ///
    /// assert!(tree.delete(&4));
    /// assert!(!tree.delete(&4));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    /// assert!(tree.in_order().eq(&[1, 2, 3, 5, 6, 7]));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while link.as_deref().is_some_and(|node| node.value != *value) {
            if let Some(node) = link {
                link = if *value < node.value {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }

        let Some(node) = link.take() else {
            return false;
        };
        *link = remove(node);
        trace!("deleted node");

        self.check_invariants();
        true
    }

    /// Finds the node holding `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.is_leaf()), Some(true));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The number of edges on the longest path from the root down to a leaf.
    /// A single node has height 0 and the empty tree has height -1.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// The number of edges from the root to `target`.
    ///
    /// The descent compares values, not node identity: it stops at the first
    /// node whose value equals `target`'s. So a node from another tree
    /// reports the depth its value has in this one, and `None` is returned
    /// when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    /// let one = tree.find(&1).unwrap();
    ///
    /// assert_eq!(tree.depth(one), Some(2));
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize>
    where
        T: Ord,
    {
        self.depth_of(target.value())
    }

    /// The number of edges from the root to the node holding `value`.
    pub fn depth_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// Whether, at every node, the heights of the two subtrees differ by at
    /// most one. The empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        // A post-order walk finishes both subtrees of a node right before the
        // node itself, so their heights are on top of the stack, right last.
        let mut heights: Vec<isize> = Vec::new();
        for node in self.nodes(Order::PostOrder) {
            let right = node.right().and_then(|_| heights.pop()).unwrap_or(-1);
            let left = node.left().and_then(|_| heights.pop()).unwrap_or(-1);
            if left.abs_diff(right) > 1 {
                return false;
            }
            heights.push(1 + left.max(right));
        }
        true
    }

    /// Rebuilds the tree into a height-minimal shape holding the same values.
    ///
    /// The values are drained breadth-first from the current shape and fed
    /// back through [`build`][Tree::build], which does the sorting.
    #[instrument(level = "debug", skip_all)]
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let old_height = enabled!(Level::DEBUG).then(|| self.height());
        let values: Vec<T> = IntoIter::new(self.root.take()).collect();
        let len = values.len();

        *self = Self::build(values);
        debug!(len, ?old_height, "rebalanced");
    }

    /// Asserts the ordering invariant in tests. An in-order walk must be
    /// strictly ascending.
    fn check_invariants(&self)
    where
        T: Ord,
    {
        if cfg!(test) {
            let mut values = self.in_order();
            if let Some(mut previous) = values.next() {
                for value in values {
                    assert!(previous < value, "in-order walk must be strictly ascending");
                    previous = value;
                }
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Builds a subtree from sorted, unique `values`, rooting it at the element
/// at `len / 2`.
fn build_sorted<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    let right = values.split_off(mid + 1);
    let value = values.pop()?;

    Some(Box::new(Node {
        value,
        left: build_sorted(values),
        right: build_sorted(right),
    }))
}

/// Unlinks `node` from its subtree and returns what takes its place.
fn remove<T>(mut node: Box<Node<T>>) -> Link<T> {
    if node.left.is_none() {
        return node.right.take();
    }
    if node.right.is_none() {
        return node.left.take();
    }

    // Two children: keep this node and move the in-order successor's value
    // into it.
    if let Some(successor) = take_min(&mut node.right) {
        node.value = successor;
    }
    Some(node)
}

/// Removes the leftmost node of the subtree at `link`, putting its right
/// child in its place, and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}
