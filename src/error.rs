//! The errors returned by tree operations.

use thiserror::Error;

use crate::util::Side;

/// Everything that can go wrong when operating on a [`Tree`][crate::linked::Tree].
///
/// None of these leave the tree partially modified: a call that fails has not touched
/// any link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The value is not held by the tree.
    #[error("value not found in tree")]
    NotFound,

    /// The operation needs at least one node.
    #[error("operation requires a non-empty tree")]
    EmptyTree,

    /// The rotation's pivot lacks the child that would take its place.
    #[error("cannot rotate {direction}: pivot has no {missing} child", missing = .direction.opposite())]
    InvalidRotation {
        /// The requested rotation.
        direction: Side,
    },

    /// An equal value is already held by the tree.
    #[error("value already present in tree")]
    DuplicateValue,

    /// The node handle refers to a node that has since been deleted.
    #[error("node handle no longer refers to a live node")]
    StaleNode,

    /// An invariant check failed.
    #[error("tree invariant violated: {0}")]
    Corrupted(String),
}

/// Shorthand for results of tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
