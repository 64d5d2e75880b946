use ordered_tree::OrderedTree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<V>(ops: &[Op<V>], bst: &mut OrderedTree<V>, set: &mut HashSet<V>)
where
    V: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                assert_eq!(bst.delete(v), set.remove(v));
            }
        }
    }
}

/// In-order output is strictly ascending exactly when every node respects the BST ordering.
fn is_strictly_ascending<V: Ord>(values: &[&V]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|value| tree.contains(value))
        && tree.in_order().len() == set.len()
        && is_strictly_ascending(&tree.in_order())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn duplicate_inserts_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.to_text();
    let height = tree.height();

    for x in &xs {
        tree.insert(*x);
    }

    tree.to_text() == before && tree.height() == height
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && is_strictly_ascending(&tree.in_order())
}

#[quickcheck]
fn absent_delete_leaves_output_unchanged(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree = OrderedTree::new();
    for x in xs.iter().filter(|x| **x != absent) {
        tree.insert(*x);
    }
    let before = tree.to_text();

    !tree.delete(&absent) && tree.to_text() == before
}

#[quickcheck]
fn to_text_matches_sorted_values(xs: Vec<u16>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();
    let expected: String = expected.iter().map(|x| format!("{x} ")).collect();

    tree.to_text() == expected
}

#[quickcheck]
fn deep_clone_is_independent(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let mut copy = tree.deep_clone();
    let same_shape = copy.height() == tree.height() && copy.to_text() == tree.to_text();
    let before = tree.to_text();

    for delete in &deletes {
        copy.delete(delete);
    }

    same_shape && tree.to_text() == before
}
