// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::Quadtree;

use rstar::RTree;

const SIZE: f64 = 2048.0;

fn gen_grid_points(n: usize) -> Vec<Point> {
    let cell = SIZE / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            // Jitter off the split lines so no leaf sees coincident points.
            out.push(Point::new(
                (x as f64 + 0.37) * cell,
                (y as f64 + 0.61) * cell,
            ));
        }
    }
    out
}

fn bench_nearest_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n);
        let query = Point::new(SIZE * 0.501, SIZE * 0.499);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::new(SIZE),
                |mut tree| {
                    for &p in &points {
                        let _ = tree.insert(p);
                    }
                    black_box(tree.find_nearest(query));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                RTree::<[f64; 2]>::new,
                |mut tree| {
                    for p in &points {
                        tree.insert([p.x, p.y]);
                    }
                    black_box(tree.nearest_neighbor(&[query.x, query.y]).copied());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.nearest_neighbor(&[query.x, query.y]).copied());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_external_compare);
criterion_main!(benches);
