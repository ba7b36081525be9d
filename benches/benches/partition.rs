// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sunburst_partition::{TreeNode, max_depth, partition};

/// Full tree with `fanout` children per node down to `depth`, unevenly weighted.
fn synthetic(depth: usize, fanout: usize) -> TreeNode {
    if depth == 0 {
        return TreeNode::new("leaf", 1.0);
    }
    let children: Vec<TreeNode> = (0..fanout)
        .map(|i| {
            let mut child = synthetic(depth - 1, fanout);
            child.value *= 1.0 + i as f64;
            child
        })
        .collect();
    let total = children.iter().map(|c| c.value).sum();
    TreeNode::new("node", total).with_children(children)
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    // Wide and shallow versus narrow and deep trees of similar size.
    for (depth, fanout) in [(2usize, 64usize), (4, 8), (12, 2)] {
        let tree = synthetic(depth, fanout);
        let nodes = tree.node_count();
        group.throughput(Throughput::Elements(nodes as u64));

        group.bench_with_input(
            BenchmarkId::new("partition", format!("{depth}x{fanout}")),
            &tree,
            |b, tree| b.iter(|| black_box(partition(black_box(tree)))),
        );
        group.bench_with_input(
            BenchmarkId::new("max_depth", format!("{depth}x{fanout}")),
            &tree,
            |b, tree| b.iter(|| black_box(max_depth(black_box(tree)))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
