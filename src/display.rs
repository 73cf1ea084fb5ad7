//! Renders a [`Tree`] sideways as indented text.
//!
//! The right subtree is printed above its parent and the left subtree below,
//! so turning the output a quarter turn clockwise shows the usual picture:
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```

use std::fmt;

use crate::{Node, Tree};

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_subtree(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `is_left` says whether `node` hangs below
/// its parent's line; the root is drawn as if it did.
fn write_subtree<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        write_subtree(f, right, &prefix, false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        write_subtree(f, left, &prefix, true)?;
    }
    Ok(())
}
