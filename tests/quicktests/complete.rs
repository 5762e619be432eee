use dsviz::complete::Tree;

#[quickcheck]
fn complete_tree_keeps_insertion_order_by_level(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let slots = tree.snapshot();

    // Node i's children are 2i + 1 and 2i + 2, just like an array-backed heap.
    tree.level_order().copied().eq(xs.iter().copied())
        && slots.iter().all(|s| {
            s.left == Some(2 * s.id + 1).filter(|&c| c < xs.len())
                && s.right == Some(2 * s.id + 2).filter(|&c| c < xs.len())
        })
}
