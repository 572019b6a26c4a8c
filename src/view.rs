//! Read-only access to the tree's structure, for callers that draw the tree or decide when to
//! rotate it. A [`NodeView`] borrows the tree immutably, so nothing can change underneath it.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{NodeView, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1] {
//!     tree.insert(x).unwrap();
//! }
//!
//! /// Pre-order list of `(value, depth)` pairs, enough to lay the tree out.
//! fn walk(view: NodeView<'_, i32>, depth: usize, out: &mut Vec<(i32, usize)>) {
//!     out.push((*view.value(), depth));
//!     for child in [view.left(), view.right()].into_iter().flatten() {
//!         walk(child, depth + 1, out);
//!     }
//! }
//!
//! let mut out = Vec::new();
//! walk(tree.root_view().unwrap(), 0, &mut out);
//! assert_eq!(out, [(5, 0), (3, 1), (1, 2), (8, 1)]);
//! ```

use std::fmt;

use crate::linked::{NodeId, Tree};
use crate::util::Side;

/// A node of a [`Tree`] seen through a shared borrow.
pub struct NodeView<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<'a, T> Clone for NodeView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeView<'a, T> {}

impl<'a, T> fmt::Debug for NodeView<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T> NodeView<'a, T> {
    /// `id` must be live in `tree`.
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The handle of the viewed node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value held by the node.
    pub fn value(&self) -> &'a T {
        &self.tree.node(self.id).value
    }

    /// The left child.
    pub fn left(&self) -> Option<Self> {
        self.child(Side::Left)
    }

    /// The right child.
    pub fn right(&self) -> Option<Self> {
        self.child(Side::Right)
    }

    /// The child on `side`.
    pub fn child(&self, side: Side) -> Option<Self> {
        self.tree
            .node(self.id)
            .child(side)
            .map(|id| Self::new(self.tree, id))
    }

    /// The parent, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        self.tree
            .node(self.id)
            .parent
            .map(|id| Self::new(self.tree, id))
    }

    /// Which child slot of its parent holds this node, `None` at the root.
    pub fn side(&self) -> Option<Side> {
        let parent = self.parent()?;
        if parent.tree.node(parent.id).left == Some(self.id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// How many children (0, 1 or 2) the node has.
    pub fn children_count(&self) -> usize {
        self.tree.node(self.id).children_count()
    }

    /// The number of levels in the subtree rooted here, 1 for a leaf.
    pub fn height(&self) -> usize {
        self.tree.subtree_height(self.id)
    }
}
