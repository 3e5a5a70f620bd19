// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics: insert points, watch leaves split, and list quadrant bounds.

use kurbo::Point;
use understory_quadtree::Quadtree;

fn main() {
    let mut tree = Quadtree::new(100.0);

    for (x, y) in [(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)] {
        tree.insert(Point::new(x, y)).unwrap();
    }
    println!("after 3 points: {} leaf", tree.leaf_count());

    // Fourth point fills the root; it splits, and NW (which got all four) splits again.
    tree.insert(Point::new(40.0, 40.0)).unwrap();
    println!("after 4 points: {:?}", tree);

    for (region, points) in tree.leaves() {
        println!("  {:?} holds {:?}", region, points);
    }

    // Points on a split line go right/down.
    tree.insert(Point::new(50.0, 50.0)).unwrap();
    let bounds = tree.quadrant_bounds();
    println!("{} quadrants, last = {:?}", bounds.len(), bounds.last());

    match tree.insert(Point::new(100.0, 0.0)) {
        Ok(()) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {err}"),
    }
}
