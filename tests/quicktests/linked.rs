use linked_bst::{NodeView, Tree, TreeError};

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord + std::fmt::Debug,
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
                let expected = if set.is_empty() {
                    Err(TreeError::EmptyTree)
                } else {
                    set.take(x).ok_or(TreeError::NotFound)
                };
                assert_eq!(bst.delete(x), expected);
            }
        }
    }
}

fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        let _ = tree.insert(*x);
    }
    tree
}

/// Whether every child below `view` points back at its holder.
fn parents_consistent(view: NodeView<'_, i8>) -> bool {
    [view.left(), view.right()].into_iter().flatten().all(|child| {
        child.parent().map(|p| p.id()) == Some(view.id()) && parents_consistent(child)
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.lookup(x).map(|found| tree.value(found.node)) == Ok(Some(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let values: Vec<_> = tree.iter().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let mut still_present: Vec<_> = xs
        .iter()
        .copied()
        .filter(|x| !deletes.contains(x))
        .collect();
    still_present.sort_unstable();
    still_present.dedup();

    deletes
        .iter()
        .all(|x| matches!(tree.lookup(x), Err(TreeError::NotFound | TreeError::EmptyTree)))
        && tree.iter().copied().eq(still_present)
        && tree.root_view().map_or(true, parents_consistent)
}

#[quickcheck]
fn rotations_keep_order_and_parents(xs: Vec<i8>, pivots: Vec<(i8, bool)>) -> bool {
    let mut tree = tree_of(&xs);
    let before: Vec<_> = tree.iter().copied().collect();

    for (x, left) in pivots {
        let Some(pivot) = tree.find(&x) else {
            continue;
        };
        let result = if left {
            tree.rotate_left(pivot)
        } else {
            tree.rotate_right(pivot)
        };
        if let Err(err) = result {
            if !matches!(err, TreeError::InvalidRotation { .. }) {
                return false;
            }
        }
    }

    tree.iter().copied().eq(before)
        && tree.root_view().map_or(true, |root| {
            root.parent().is_none() && parents_consistent(root)
        })
}
