use bst::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and rebuilds we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                bst.delete(x);
                set.remove(x);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether every adjacent pair of `values` is strictly ascending.
fn strictly_ascending<T: Ord>(values: &[&T]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().eq(set.iter())
}

#[quickcheck]
fn in_order_stays_ascending(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    strictly_ascending(&tree.in_order().collect::<Vec<_>>())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.depth_of(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn insert_then_delete_round_trips(xs: Vec<i8>, x: i8) -> bool {
    let original = Tree::build(xs);
    if original.contains(&x) {
        return true;
    }

    let mut tree = original.clone();
    tree.insert(x);
    let found = *tree.find(&x).map(|n| n.value()).unwrap_or(&x);
    tree.delete(&found);

    tree.in_order().eq(original.in_order())
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut once = Tree::build(xs);
    once.insert(x);
    let mut twice = once.clone();
    twice.insert(x);

    once == twice
}

#[quickcheck]
fn rebalance_balances(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());
    let before: Vec<i8> = tree.in_order().copied().collect();

    tree.rebalance();
    tree.is_balanced() && tree.in_order().copied().eq(before)
}

#[quickcheck]
fn depth_bounded_by_height(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    let height = tree.height();

    tree.nodes(Order::PreOrder)
        .all(|n| matches!(tree.depth(n), Some(d) if d as isize <= height))
}

#[quickcheck]
fn every_order_visits_every_value(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let expected: BTreeSet<_> = tree.in_order().collect();

    [Order::PreOrder, Order::PostOrder, Order::LevelOrder]
        .into_iter()
        .all(|order| tree.values(order).collect::<BTreeSet<_>>() == expected)
}
