//! The `Node` record owned by a [`Tree`][crate::Tree].

use std::fmt;

/// An owned, possibly empty, child relation.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and two child relations. Each child is owned
/// exclusively by this node so clearing or reassigning a child relation drops
/// the whole subtree below it.
///
/// Nodes carry no behavior of their own beyond read-only access. All
/// algorithms live on [`Tree`][crate::Tree].
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf with the given `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any. Every value in it is less than
    /// [`value`][Node::value].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. Every value in it is greater
    /// than [`value`][Node::value].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// A node with no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Shows only the values of the direct children so formatting a node never
/// walks its whole subtree.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}
