//! Depth-first and breadth-first walks over a [`Tree`].
//!
//! Every walk is computed fresh from the current shape of the tree and uses an
//! explicit stack or queue, so degenerate trees are walked without deep
//! recursion.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};
use crate::Tree;

/// The order in which a walk visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth-first: the root, then every node at depth 1 from left to right,
    /// then depth 2, and so on.
    LevelOrder,
}

enum State<'a, T> {
    InOrder {
        stack: Vec<&'a Node<T>>,
        cursor: Option<&'a Node<T>>,
    },
    PreOrder {
        stack: Vec<&'a Node<T>>,
    },
    /// The flag marks nodes whose children have already been pushed.
    PostOrder {
        stack: Vec<(&'a Node<T>, bool)>,
    },
    LevelOrder {
        queue: VecDeque<&'a Node<T>>,
    },
}

/// An iterator over the nodes of a tree in a given [`Order`].
///
/// Created by [`Tree::nodes`].
pub struct Nodes<'a, T> {
    state: State<'a, T>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        let state = match order {
            Order::InOrder => State::InOrder {
                stack: Vec::new(),
                cursor: root,
            },
            Order::PreOrder => State::PreOrder {
                stack: root.into_iter().collect(),
            },
            Order::PostOrder => State::PostOrder {
                stack: root.map(|n| (n, false)).into_iter().collect(),
            },
            Order::LevelOrder => State::LevelOrder {
                queue: root.into_iter().collect(),
            },
        };
        Self { state }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::InOrder { stack, cursor } => {
                while let Some(node) = *cursor {
                    stack.push(node);
                    *cursor = node.left();
                }
                let node = stack.pop()?;
                *cursor = node.right();
                Some(node)
            }
            State::PreOrder { stack } => {
                let node = stack.pop()?;
                // Right first so the left subtree is popped first.
                stack.extend(node.right());
                stack.extend(node.left());
                Some(node)
            }
            State::PostOrder { stack } => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    return Some(node);
                }
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
            },
            State::LevelOrder { queue } => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                Some(node)
            }
        }
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

/// An iterator over the values of a tree in a given [`Order`].
///
/// Created by [`Tree::values`] and the per-order shorthands such as
/// [`Tree::in_order`].
pub struct Values<'a, T>(Nodes<'a, T>);

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Node::value)
    }
}

impl<T> FusedIterator for Values<'_, T> {}

/// An owning iterator that takes a tree apart in level order.
///
/// Created by [`Tree::into_iter`]. Nodes are unlinked one at a time so
/// dropping a partially consumed iterator never recurses.
pub struct IntoIter<T> {
    queue: VecDeque<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        let Node { value, left, right } = *node;
        self.queue.extend(left);
        self.queue.extend(right);
        Some(value)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<T> Tree<T> {
    /// Walks the nodes of this tree in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Order, Tree};
    ///
    /// let tree = Tree::build([1, 2, 3]);
    /// let leaves = tree.nodes(Order::PreOrder).filter(|n| n.is_leaf()).count();
    ///
    /// assert_eq!(leaves, 2);
    /// ```
    pub fn nodes(&self, order: Order) -> Nodes<'_, T> {
        Nodes::new(self.root(), order)
    }

    /// Walks the values of this tree in the given `order`.
    pub fn values(&self, order: Order) -> Values<'_, T> {
        Values(self.nodes(order))
    }

    /// Calls `visit` on every node of this tree in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Order, Tree};
    ///
    /// let tree = Tree::build([3, 1, 2]);
    /// let mut sum = 0;
    /// tree.walk(Order::PostOrder, |node| sum += node.value());
    ///
    /// assert_eq!(sum, 6);
    /// ```
    pub fn walk<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        for node in self.nodes(order) {
            visit(node);
        }
    }

    /// Values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([5, 3, 9, 3, 1]);
    ///
    /// assert!(tree.in_order().eq(&[1, 3, 5, 9]));
    /// ```
    pub fn in_order(&self) -> Values<'_, T> {
        self.values(Order::InOrder)
    }

    /// Values with each node before its subtrees.
    pub fn pre_order(&self) -> Values<'_, T> {
        self.values(Order::PreOrder)
    }

    /// Values with each node after its subtrees.
    pub fn post_order(&self) -> Values<'_, T> {
        self.values(Order::PostOrder)
    }

    /// Values breadth-first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    ///
    /// assert!(tree.level_order().eq(&[4, 2, 6, 1, 3, 5, 7]));
    /// ```
    pub fn level_order(&self) -> Values<'_, T> {
        self.values(Order::LevelOrder)
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in level order.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
