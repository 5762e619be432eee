use dsviz::bst::Tree;

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a tree and a counting map. This way we can ensure that
/// after a random smattering of inserts and deletes we hold the same multiset of keys.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, counts: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
                *counts.entry(*k).or_default() += 1;
            }
            Op::Remove(k) => {
                let removed = tree.delete(k);
                match counts.get_mut(k) {
                    Some(count) => {
                        assert_eq!(removed, Some(*k));
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(k);
                        }
                    }
                    None => assert_eq!(removed, None),
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();
    do_ops(&ops, &mut tree, &mut counts);

    let expected: Vec<i8> = counts
        .iter()
        .flat_map(|(k, n)| std::iter::repeat(*k).take(*n))
        .collect();

    tree.iter().copied().collect::<Vec<_>>() == expected
        && tree.len() == expected.len()
        && (i8::MIN..=i8::MAX).all(|k| tree.contains(&k) == counts.contains_key(&k))
        && tree.max() == counts.keys().next_back()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.delete(delete).is_some() {}
    }

    deletes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !deletes.contains(x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn height_bounds(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let n = xs.len();
    // At least as tall as a perfectly balanced tree, at most one node per level.
    let balanced = (usize::BITS - n.leading_zeros()) as usize;
    (balanced..=n).contains(&tree.height())
}

#[quickcheck]
fn preorder_rebuilds_same_shape(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let rebuilt: Tree<_> = tree.preorder().copied().collect();
    tree.snapshot() == rebuilt.snapshot()
}

#[quickcheck]
fn matching_agrees_with_filter(words: Vec<String>, query: String) -> bool {
    let tree: Tree<_> = words.iter().cloned().collect();
    let needle = query.to_lowercase();

    let mut found: Vec<&String> = tree.matching(&query).collect();
    let mut expected: Vec<&String> = if query.is_empty() {
        Vec::new()
    } else {
        words
            .iter()
            .filter(|w| w.to_lowercase().contains(&needle))
            .collect()
    };
    found.sort();
    expected.sort();
    found == expected
}
