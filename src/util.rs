//! Small shared types.

use std::fmt;

/// Which child slot of a node is meant. Also names the direction of a rotation: rotating
/// `Left` moves the pivot down into its right child's left slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child, holding smaller values.
    Left,
    /// The right child, holding larger values.
    Right,
}

impl Side {
    /// The mirror image of this side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
