//! A mutable BST whose nodes keep a link back to their parent. Nodes live in an arena and refer
//! to each other by [`NodeId`], so the parent link never owns anything and upward navigation is a
//! single index lookup.
//!
//! The tree never rebalances itself. It exposes single rotations as primitives so that a
//! balancing policy (AVL, for example) can decide when to call them.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.lookup(&1), Err(TreeError::EmptyTree));
//!
//! for x in [2, 1, 3] {
//!     tree.insert(x).unwrap();
//! }
//! assert!(tree.contains(&1));
//!
//! // Rotating left at the root lifts its right child into the root slot.
//! let root = tree.root().unwrap();
//! let new_root = tree.rotate_left(root).unwrap();
//! assert_eq!(tree.root(), Some(new_root));
//! assert_eq!(tree.value(new_root), Some(&3));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&2), Ok(2));
//! assert_eq!(tree.lookup(&2), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::error::{TreeError, TreeResult};
use crate::iter::Iter;
use crate::util::Side;
use crate::view::NodeView;

/// A handle to a node of a [`Tree`]. Handles stay valid across rotations and across deletions of
/// other nodes. Once the node itself is destroyed, the handle is stale and every operation taking
/// it reports [`TreeError::StaleNode`] (or returns `None` for plain accessors).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

/// Where a successful lookup stopped: the node holding the value and that node's parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lookup {
    /// The node holding the value.
    pub node: NodeId,
    /// Its parent, `None` when `node` is the root.
    pub parent: Option<NodeId>,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// Back-link only. The child slots of `parent` are what hold this node.
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn children_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}

/// A Binary Search Tree with parent links. This can be used for inserting, finding, deleting and
/// rotating values. Values are unique: an equal value is never stored twice.
#[derive(Clone)]
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Removes every node. All previously handed out [`NodeId`]s become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// The value held by `id`.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id.0).map(|n| &n.value)
    }

    /// The parent of `id`. `None` for the root or a stale handle.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id.0)?.parent
    }

    /// The left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id.0)?.left
    }

    /// The right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id.0)?.right
    }

    /// How many children (0, 1 or 2) `id` has. `None` for a stale handle.
    pub fn children_count(&self, id: NodeId) -> Option<usize> {
        self.arena.get(id.0).map(Node::children_count)
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.subtree_height(root))
    }

    /// The node holding the smallest value.
    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// The node holding the largest value.
    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// The node holding the next larger value, found by walking child and parent links.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Side::Right)
    }

    /// The node holding the next smaller value.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Side::Left)
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8, 1] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A read-only view of `id` and, through it, of its subtree.
    pub fn view(&self, id: NodeId) -> Option<NodeView<'_, T>> {
        self.arena.get(id.0).map(|_| NodeView::new(self, id))
    }

    /// A read-only view of the root.
    pub fn root_view(&self) -> Option<NodeView<'_, T>> {
        self.root.map(|root| NodeView::new(self, root))
    }

    /// Re-derives every parent link from the child links, walking the whole tree. This is a
    /// repair pass: no operation of the tree relies on it.
    #[instrument(level = "debug", skip_all)]
    pub fn refresh_parents(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        self.node_mut(root).parent = None;

        let mut visited = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            visited += 1;
            if visited > self.arena.len() {
                debug!("child links form a cycle, giving up");
                return;
            }
            let node = self.node(id);
            for child in [node.left, node.right].into_iter().flatten() {
                self.node_mut(child).parent = Some(id);
                stack.push(child);
            }
        }
    }

    /// Resolves `id`, reporting why it can't be used as an operation's argument.
    fn live(&self, id: NodeId) -> TreeResult<&Node<T>> {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree);
        }
        self.arena.get(id.0).ok_or(TreeError::StaleNode)
    }

    /// Resolves an id the tree itself handed out through a link. These are always live.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id.0).expect("linked node is live")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena.get_mut(id.0).expect("linked node is live")
    }

    pub(crate) fn subtree_height(&self, id: NodeId) -> usize {
        let mut height = 0;
        let mut stack = vec![(id, 1)];
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1)),
            );
        }
        height
    }

    /// Follows `side` links from `id` until there are none left.
    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.node(id).child(side) {
            id = child;
        }
        id
    }

    /// The in-order neighbour of `id` on `side`.
    fn step(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let node = self.arena.get(id.0)?;
        if let Some(child) = node.child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        // Nothing below on `side`: climb while we are the parent's `side` child. The first
        // ancestor we reach from its other side is the neighbour.
        let mut current = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let p_node = self.node(p);
            if p_node.child(side) != Some(current) {
                return Some(p);
            }
            current = p;
            parent = p_node.parent;
        }
        None
    }

    /// Puts `new` in the slot of `parent` that holds `old`, or in the root handle when `parent`
    /// is `None`, and points `new` back at `parent`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
            None => {
                debug!(old_root = ?old, new_root = ?new, "root replaced");
                self.root = new;
            }
        }
        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }

    /// Removes an already unlinked node from the arena.
    fn take_node(&mut self, id: NodeId) -> T {
        let node = self.arena.remove(id.0).expect("unlinked node is live");
        debug!(node = ?id, "destroyed");
        node.value
    }

    /// The child that takes `pivot`'s place when rotating it in `direction`.
    fn rotation_heir(&self, pivot: NodeId, direction: Side) -> TreeResult<NodeId> {
        self.live(pivot)?
            .child(direction.opposite())
            .ok_or(TreeError::InvalidRotation { direction })
    }

    /// Rotate `pivot` in `direction`, `heir` being its child on the opposite side.
    ///
    /// # Diagram
    ///
    /// For `direction == Side::Left`:
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///    pivot                     heir
    ///    /   \                     /   \
    ///   a    heir     rotate ->  pivot  c
    ///        /  \                /  \
    ///      inner c              a   inner
    /// ```
    fn relink_rotation(&mut self, pivot: NodeId, heir: NodeId, direction: Side) {
        let parent = self.node(pivot).parent;
        let inner = self.node(heir).child(direction);

        self.replace_child(parent, pivot, Some(heir));

        *self.node_mut(pivot).child_mut(direction.opposite()) = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }

        *self.node_mut(heir).child_mut(direction) = Some(pivot);
        self.node_mut(pivot).parent = Some(heir);
        debug!(?pivot, ?heir, %direction, "rotated");
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Finds the node holding `value`, starting at the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] when there is nothing to search, [`TreeError::NotFound`] when no
    /// node holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// let five = tree.insert(5).unwrap();
    /// let three = tree.insert(3).unwrap();
    ///
    /// let found = tree.lookup(&3).unwrap();
    /// assert_eq!(found.node, three);
    /// assert_eq!(found.parent, Some(five));
    /// assert_eq!(tree.lookup(&42), Err(TreeError::NotFound));
    /// ```
    pub fn lookup(&self, value: &T) -> TreeResult<Lookup> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        self.lookup_from(root, value)
    }

    /// Finds the node holding `value` within the subtree rooted at `start`.
    ///
    /// # Errors
    ///
    /// As [`Tree::lookup`], plus [`TreeError::StaleNode`] when `start` was deleted.
    pub fn lookup_from(&self, start: NodeId, value: &T) -> TreeResult<Lookup> {
        let mut current = start;
        let mut node = self.live(start)?;
        loop {
            let next = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    return Ok(Lookup {
                        node: current,
                        parent: node.parent,
                    })
                }
            };
            trace!(?current, ?next, "descending");
            current = next.ok_or(TreeError::NotFound)?;
            node = self.node(current);
        }
    }

    /// The node holding `value`, if any.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.lookup(value).ok().map(|found| found.node)
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts `value` as a new leaf and returns its node. The first value becomes the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateValue`] when an equal value is already stored. The tree is left as
    /// it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.insert(2).unwrap();
    /// let right = tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.right(root), Some(right));
    /// assert_eq!(tree.parent(right), Some(root));
    /// assert_eq!(tree.insert(3), Err(TreeError::DuplicateValue));
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn insert(&mut self, value: T) -> TreeResult<NodeId> {
        let Some(mut current) = self.root else {
            let id = NodeId(self.arena.insert(Node::new(value, None)));
            self.root = Some(id);
            debug!(node = ?id, "seeded root");
            return Ok(id);
        };

        let side = loop {
            let node = self.node(current);
            let side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Err(TreeError::DuplicateValue),
            };
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        let id = NodeId(self.arena.insert(Node::new(value, Some(current))));
        *self.node_mut(current).child_mut(side) = Some(id);
        debug!(node = ?id, parent = ?current, %side, "inserted");

        self.debug_validate();
        Ok(id)
    }

    /// Deletes `value` from the tree and returns it.
    ///
    /// A node with two children keeps its place (and its [`NodeId`]) and takes over the value of
    /// its in-order successor. The successor's node is the one destroyed.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] or [`TreeError::NotFound`] when there is nothing to delete. The
    /// tree is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(x).unwrap();
    /// }
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(tree.delete(&5), Ok(5));
    /// assert_eq!(tree.root(), Some(root));
    /// assert_eq!(tree.value(root), Some(&7));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn delete(&mut self, value: &T) -> TreeResult<T> {
        let Lookup {
            node: target,
            parent,
        } = self.lookup(value)?;
        let node = self.node(target);

        let removed = match (node.left, node.right) {
            (None, None) => {
                self.replace_child(parent, target, None);
                self.take_node(target)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_child(parent, target, Some(child));
                self.take_node(target)
            }
            (Some(_), Some(right)) => {
                let mut successor_parent = target;
                let mut successor = right;
                while let Some(left) = self.node(successor).left {
                    successor_parent = successor;
                    successor = left;
                }
                trace!(?successor, ?successor_parent, "found successor");

                // The successor has no left child, so its right child (if any) takes its slot.
                let successor_right = self.node(successor).right;
                self.replace_child(Some(successor_parent), successor, successor_right);
                let promoted = self.take_node(successor);
                mem::replace(&mut self.node_mut(target).value, promoted)
            }
        };

        self.debug_validate();
        Ok(removed)
    }

    /// Rotate `pivot` to the left. This moves its right child up into `pivot`'s place and
    /// `pivot` down to become that child's left child. Returns the node now in `pivot`'s place.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRotation`] when `pivot` has no right child, [`TreeError::EmptyTree`]
    /// and [`TreeError::StaleNode`] when `pivot` is not in the tree. The tree is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let two = tree.insert(2).unwrap();
    /// let one = tree.insert(1).unwrap();
    /// let three = tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.rotate_left(two), Ok(three));
    /// assert_eq!(tree.root(), Some(three));
    /// assert_eq!(tree.left(three), Some(two));
    /// assert_eq!(tree.left(two), Some(one));
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn rotate_left(&mut self, pivot: NodeId) -> TreeResult<NodeId> {
        self.rotate(pivot, Side::Left)
    }

    /// Rotate `pivot` to the right, the mirror image of [`Tree::rotate_left`].
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRotation`] when `pivot` has no left child, [`TreeError::EmptyTree`]
    /// and [`TreeError::StaleNode`] when `pivot` is not in the tree.
    #[instrument(level = "debug", skip_all)]
    pub fn rotate_right(&mut self, pivot: NodeId) -> TreeResult<NodeId> {
        self.rotate(pivot, Side::Right)
    }

    /// Rotate `pivot`'s left child left, then `pivot` right. Returns the node now in `pivot`'s
    /// place, which was `pivot`'s left child's right child.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidRotation`] when either rotation lacks its child. Both are checked
    /// before anything moves.
    #[instrument(level = "debug", skip_all)]
    pub fn rotate_left_right(&mut self, pivot: NodeId) -> TreeResult<NodeId> {
        self.double_rotate(pivot, Side::Right)
    }

    /// Rotate `pivot`'s right child right, then `pivot` left.
    ///
    /// # Errors
    ///
    /// As [`Tree::rotate_left_right`].
    #[instrument(level = "debug", skip_all)]
    pub fn rotate_right_left(&mut self, pivot: NodeId) -> TreeResult<NodeId> {
        self.double_rotate(pivot, Side::Left)
    }

    fn rotate(&mut self, pivot: NodeId, direction: Side) -> TreeResult<NodeId> {
        let heir = self.rotation_heir(pivot, direction)?;
        self.relink_rotation(pivot, heir, direction);

        self.debug_validate();
        Ok(heir)
    }

    /// `direction` is the direction of the second, outer rotation.
    fn double_rotate(&mut self, pivot: NodeId, direction: Side) -> TreeResult<NodeId> {
        let child = self.rotation_heir(pivot, direction)?;
        let grandchild = self.rotation_heir(child, direction.opposite())?;

        self.relink_rotation(child, grandchild, direction.opposite());
        self.relink_rotation(pivot, grandchild, direction);

        self.debug_validate();
        Ok(grandchild)
    }

    /// Checks ordering, parent links and reachability over the whole tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Corrupted`] describing the first violation found.
    pub fn validate(&self) -> TreeResult<()> {
        let Some(root) = self.root else {
            if self.arena.is_empty() {
                return Ok(());
            }
            return Err(TreeError::Corrupted(format!(
                "{} nodes stored in an empty tree",
                self.arena.len()
            )));
        };

        let root_node = self
            .arena
            .get(root.0)
            .ok_or_else(|| TreeError::Corrupted("root handle is stale".to_string()))?;
        if let Some(parent) = root_node.parent {
            return Err(TreeError::Corrupted(format!(
                "root {root:?} has parent {parent:?}"
            )));
        }

        let mut visited = 0;
        let mut stack: Vec<(NodeId, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((id, lower, upper)) = stack.pop() {
            visited += 1;
            if visited > self.arena.len() {
                return Err(TreeError::Corrupted("child links reach a node twice".to_string()));
            }

            let node = self.node(id);
            if lower.map_or(false, |lower| node.value <= *lower)
                || upper.map_or(false, |upper| node.value >= *upper)
            {
                return Err(TreeError::Corrupted(format!("{id:?} is out of order")));
            }

            let children = [
                (node.left, lower, Some(&node.value)),
                (node.right, Some(&node.value), upper),
            ];
            for (child, lower, upper) in children {
                let Some(child) = child else {
                    continue;
                };
                let child_node = self.arena.get(child.0).ok_or_else(|| {
                    TreeError::Corrupted(format!("{id:?} links to stale {child:?}"))
                })?;
                if child_node.parent != Some(id) {
                    return Err(TreeError::Corrupted(format!(
                        "{child:?} points back to {:?} instead of {id:?}",
                        child_node.parent
                    )));
                }
                stack.push((child, lower, upper));
            }
        }

        if visited != self.arena.len() {
            return Err(TreeError::Corrupted(format!(
                "{} of {} nodes unreachable from the root",
                self.arena.len() - visited,
                self.arena.len()
            )));
        }
        Ok(())
    }

    /// In debug builds, assert the invariants hold after a mutation.
    fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.validate() {
                panic!("{err}");
            }
        }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts,
    /// deletes and rotations we have the same values in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    let expected = if set.insert(x.clone()) {
                        Ok(())
                    } else {
                        Err(TreeError::DuplicateValue)
                    };
                    assert_eq!(bst.insert(x.clone()).map(|_| ()), expected);
                }
                Op::Remove(x) => {
                    assert_eq!(bst.delete(x).ok(), set.take(x));
                }
                Op::RotateLeft(x)
                | Op::RotateRight(x)
                | Op::RotateLeftRight(x)
                | Op::RotateRightLeft(x) => {
                    let Some(pivot) = bst.find(x) else {
                        continue;
                    };
                    let result = match op {
                        Op::RotateLeft(_) => bst.rotate_left(pivot),
                        Op::RotateRight(_) => bst.rotate_right(pivot),
                        Op::RotateLeftRight(_) => bst.rotate_left_right(pivot),
                        _ => bst.rotate_right_left(pivot),
                    };
                    match result {
                        Ok(heir) => assert_eq!(bst.parent(pivot), Some(heir)),
                        Err(err) => assert!(matches!(err, TreeError::InvalidRotation { .. })),
                    }
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.validate().is_ok()
                && tree.len() == set.len()
                && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                let _ = tree.insert(*x);
            }

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn rotate_round_trip(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                let _ = tree.insert(*x);
            }

            xs.iter().all(|x| {
                let mut rotated = tree.clone();
                let pivot = rotated.find(x).unwrap();
                match rotated.rotate_left(pivot) {
                    Ok(heir) => {
                        rotated.rotate_right(heir) == Ok(pivot) && same_links(&tree, &rotated)
                    }
                    Err(err) => err == TreeError::InvalidRotation { direction: Side::Left },
                }
            })
        }
    }

    /// Whether both trees link the same node ids the same way.
    fn same_links(a: &Tree<i8>, b: &Tree<i8>) -> bool {
        a.root() == b.root()
            && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            && a
                .arena
                .iter()
                .all(|(index, node)| match b.arena.get(index) {
                    Some(other) => {
                        node.left == other.left
                            && node.right == other.right
                            && node.parent == other.parent
                    }
                    None => false,
                })
    }
}
