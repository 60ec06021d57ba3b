// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing and hover/click dispatch over deeply nested parse trees.

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use parsescope::{DiagnosticLog, PathPanel, Visualizer, VizConfig};
use parsescope_regions::{LocalRegion, QueryFilter, RegionId, RegionTree};

const RULES: [&str; 4] = ["Statement", "Expression", "Term", "Factor"];

/// A `Program` root with a chain of `depth` nested regions under it. Every level
/// also gets `fanout - 1` siblings that do not cover the sampled point.
fn gen_nested(depth: usize, fanout: usize) -> (RegionTree, RegionId) {
    let size = (depth + 1) as f64 * 10.0;
    let mut tree = RegionTree::new();
    let mut parent = tree.insert(
        None,
        LocalRegion::new("Program", Rect::new(0.0, 0.0, size, size)),
    );
    for level in 0..depth {
        let inset = (level + 1) as f64;
        let outer = tree.bounds(parent).unwrap_or_default();
        let rule = RULES[level % RULES.len()];
        let chain = LocalRegion::new(rule, Rect::new(0.0, 0.0, outer.x1 - inset, outer.y1 - inset));
        for s in 1..fanout {
            let x0 = outer.x1 - inset * 0.5 - s as f64 * 0.01;
            let sibling = LocalRegion::new(rule, Rect::new(x0, 0.0, outer.x1, outer.y1));
            tree.insert(Some(parent), sibling);
        }
        parent = tree.insert(Some(parent), chain);
    }
    (tree, parent)
}

fn filter() -> QueryFilter {
    QueryFilter {
        visible_only: true,
        pickable_only: true,
    }
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_point");
    for &depth in &[8_usize, 32, 128] {
        let (tree, _) = gen_nested(depth, 4);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("depth{depth}"), |b| {
            b.iter(|| tree.hit_test_point(black_box(Point::new(0.5, 0.5)), filter()));
        });
    }
    group.finish();
}

fn bench_pointer_over(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_over");
    for &depth in &[8_usize, 32, 128] {
        let (tree, leaf) = gen_nested(depth, 4);
        let mut log = DiagnosticLog::new();
        let Ok(mut viz) = Visualizer::new(tree, &VizConfig::default(), PathPanel::new(), &mut log)
        else {
            continue;
        };
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("depth{depth}"), |b| {
            b.iter(|| viz.pointer_over(black_box(leaf)));
        });
    }
    group.finish();
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_move_sweep");
    let depth = 32;
    let (tree, _) = gen_nested(depth, 4);
    let size = (depth + 1) as f64 * 10.0;
    let points: Vec<Point> = (0..64)
        .map(|i| {
            let t = i as f64 / 64.0 * size;
            Point::new(t, t)
        })
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("diagonal_depth32", |b| {
        b.iter_batched(
            || {
                let mut log = DiagnosticLog::new();
                Visualizer::new(tree.clone(), &VizConfig::default(), PathPanel::new(), &mut log)
            },
            |viz| {
                let Ok(mut viz) = viz else { return };
                for &pt in &points {
                    black_box(viz.pointer_move(pt));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_click(c: &mut Criterion) {
    let (tree, leaf) = gen_nested(32, 4);
    let mut log = DiagnosticLog::new();
    let Ok(mut viz) = Visualizer::new(tree, &VizConfig::default(), PathPanel::new(), &mut log)
    else {
        return;
    };
    c.bench_function("click_region_depth32", |b| {
        b.iter(|| {
            let out = viz.click_region(black_box(leaf));
            let _ = viz.take_damage();
            out
        });
    });
}

criterion_group!(
    benches,
    bench_hit_test,
    bench_pointer_over,
    bench_pointer_sweep,
    bench_click
);
criterion_main!(benches);
