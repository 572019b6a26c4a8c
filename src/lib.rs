//! This crate exposes a mutable Binary Search Tree (BST) whose nodes link back to their parents,
//! together with the rotation primitives a self-balancing tree is built from.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the height of a BST can
//! be limited to `O(lg N)` where `N` is the number of nodes in the tree.
//!
//! ## Parent links and rotations
//!
//! Every `Node` here also knows its parent, and the tree keeps one more invariant:
//!
//! 3. For every `Node` with a child, the child's parent is that `Node`. The root has no parent.
//!
//! Rotations move a child up into its parent's place while keeping the ordering invariants.
//! They are how AVL and red-black trees keep their height logarithmic. [`Tree`] offers them as
//! operations but never calls them itself: deciding *when* to rotate is left to the caller.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod linked;
pub mod util;
pub mod view;

pub use error::{TreeError, TreeResult};
pub use linked::{Lookup, NodeId, Tree};
pub use util::Side;
pub use view::NodeView;
