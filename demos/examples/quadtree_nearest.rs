// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compare exact and leaf-only nearest-point search near a quadrant boundary.

use kurbo::Point;
use understory_quadtree::{NearestMode, Quadtree, QuadtreeConfig};

fn build(nearest: NearestMode) -> Quadtree {
    let mut tree = Quadtree::with_config(QuadtreeConfig {
        size: 100.0,
        nearest,
        ..Default::default()
    })
    .unwrap();
    for (x, y) in [(49.5, 49.5), (51.0, 51.0), (10.0, 90.0), (90.0, 10.0)] {
        tree.insert(Point::new(x, y)).unwrap();
    }
    tree
}

fn main() {
    let query = Point::new(50.0, 50.0);
    for mode in [NearestMode::Exact, NearestMode::LeafOnly] {
        let tree = build(mode);
        println!("{:?}: nearest to {:?} = {:?}", mode, query, tree.nearest(query));
    }

    // A small simulation step: every agent looks up its closest neighbour.
    let mut tree = Quadtree::new(64.0);
    let agents: Vec<Point> = (0..32)
        .map(|i| {
            let t = i as f64;
            Point::new((t * 7.3) % 64.0, (t * 13.1) % 64.0)
        })
        .collect();
    for &a in &agents {
        if let Err(err) = tree.insert(a) {
            println!("skipped {a:?}: {err}");
        }
    }
    for a in agents.iter().take(4) {
        let probe = Point::new(a.x + 0.5, a.y + 0.5);
        println!("near {:?}: {:?}", probe, tree.find_nearest(probe));
    }
}
