//! A Binary Search Tree over unique values that is balanced when it is built
//! and whenever it is explicitly rebalanced.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean no value is ever stored twice, and visiting the left
//! subtree, then the subtree root, then the right subtree yields the values in
//! sorted order.
//!
//! ## Balance
//!
//! Searching takes `O(height)`. [`Tree::build`] always produces a tree of
//! height `floor(lg N)`, but [`Tree::insert`] and [`Tree::delete`] do no
//! balancing of their own: inserting already sorted values degrades the tree
//! into a list. [`Tree::rebalance`] restores a minimal height by rebuilding the
//! whole tree from its values.
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::build([1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.level_order().eq(&[4, 2, 6, 1, 3, 5, 7]));
//!
//! for x in 8..=10 {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.height(), 5);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
pub mod iter;
mod node;
mod tree;

pub use iter::Order;
pub use node::Node;
pub use tree::Tree;
