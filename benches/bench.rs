use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dsviz::bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Builds a tree by inserting values in ascending order, so every node only has a right child
/// and the tree is as tall as it is long.
fn get_degenerate_tree(num_nodes: usize) -> Tree<i32> {
    (0..num_nodes as i32).collect()
}

/// Builds a tree by inserting the middle of each range first, so the tree is perfectly
/// balanced even though `Tree` never rebalances.
fn get_balanced_tree(num_nodes: usize) -> Tree<i32> {
    let xs = (0..num_nodes as i32).collect::<Vec<_>>();
    let mut tree = Tree::new();
    let mut ranges = vec![&xs[..]];
    while let Some(range) = ranges.pop() {
        if range.is_empty() {
            continue;
        }
        let mid = range.len() / 2;
        tree.insert(range[mid]);
        ranges.push(&range[..mid]);
        ranges.push(&range[mid + 1..]);
    }

    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let num_nodes = num_nodes_in_full_tree(num_levels);
        let largest_element_in_tree = num_nodes as i32 - 1;

        let tree_tests = [
            ("balanced", get_balanced_tree(num_nodes)),
            ("degenerate", get_degenerate_tree(num_nodes)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.height());
    });

    bench_helper(c, "contains-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
