// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::{NearestMode, Quadtree, QuadtreeConfig};

const SIZE: f64 = 2048.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * SIZE, rng.next_f64() * SIZE))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            spread + rng.next_f64() * (SIZE - 2.0 * spread),
            spread + rng.next_f64() * (SIZE - 2.0 * spread),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build(points: &[Point], nearest: NearestMode) -> Quadtree {
    let mut tree = Quadtree::with_config(QuadtreeConfig {
        size: SIZE,
        nearest,
        ..Default::default()
    })
    .unwrap();
    for &p in points {
        let _ = tree.insert(p);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::new(SIZE),
                |mut tree| {
                    for &p in &points {
                        let _ = tree.insert(p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(32, 512, 40.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter_batched(
            || Quadtree::new(SIZE),
            |mut tree| {
                for &p in &points {
                    let _ = tree.insert(p);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_nearest");
    let queries = {
        let mut rng = Rng::new(0xBADC_F00D_1234_5678);
        (0..1024)
            .map(|_| Point::new(rng.next_f64() * SIZE, rng.next_f64() * SIZE))
            .collect::<Vec<_>>()
    };
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &n in &[1_000usize, 50_000] {
        let points = gen_uniform_points(n);
        for mode in [NearestMode::Exact, NearestMode::LeafOnly] {
            let tree = build(&points, mode);
            group.bench_function(format!("{:?}_n{}", mode, n), |b| {
                b.iter(|| {
                    let mut found = 0_usize;
                    for &q in &queries {
                        if let Ok(Some(_)) = tree.nearest(q) {
                            found += 1;
                        }
                    }
                    black_box(found);
                })
            });
        }
    }
    let clustered = build(&gen_clustered_points(32, 512, 40.0), NearestMode::Exact);
    group.bench_function("Exact_clustered", |b| {
        b.iter(|| {
            for &q in &queries {
                black_box(clustered.find_nearest(q));
            }
        })
    });
    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_bounds");
    let tree = build(&gen_uniform_points(50_000), NearestMode::Exact);
    group.throughput(Throughput::Elements(tree.leaf_count() as u64));
    group.bench_function("collect_reuse_buffer", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            buf.clear();
            tree.collect_quadrant_bounds(&mut buf);
            black_box(buf.len());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_nearest, bench_bounds);
criterion_main!(benches);
