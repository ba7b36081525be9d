// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use sunburst_chart::{ArcId, ChartOptions, SunburstChart, TreeNode};
use sunburst_zoom::ZoomTween;

fn wide_tree(fanout: usize) -> TreeNode {
    let children = (0..fanout).map(|_| {
        TreeNode::new("mid", fanout as f64)
            .with_children((0..fanout).map(|_| TreeNode::new("leaf", 1.0)))
    });
    TreeNode::new("root", (fanout * fanout) as f64).with_children(children)
}

fn bench_tween_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom");
    let tree = wide_tree(48);
    let chart = SunburstChart::new(&tree, ChartOptions::default());
    let arcs = chart.arcs();

    // Hypothesis: per-frame cost is dominated by projecting every animating arc twice.
    group.bench_function("tween_all_arcs_one_frame", |b| {
        let zoom = ZoomTween::new(&arcs[0], &arcs[1]);
        b.iter(|| {
            for arc in arcs {
                black_box(zoom.arc(arc).at(black_box(0.5)));
            }
        });
    });

    group.bench_function("click_root_plan", |b| {
        b.iter_batched(
            || chart.clone(),
            |mut chart| black_box(chart.on_arc_clicked(ArcId::ROOT, 0)),
            BatchSize::LargeInput,
        );
    });

    group.bench_function("frame_at_midpoint", |b| {
        let mut animating = chart.clone();
        animating.on_arc_clicked(ArcId::ROOT, 0);
        b.iter(|| black_box(animating.frame(black_box(500))));
    });

    group.finish();
}

criterion_group!(benches, bench_tween_frame);
criterion_main!(benches);
