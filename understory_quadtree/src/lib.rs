// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a Kurbo-native point quadtree.
//!
//! Understory Quadtree is an in-memory acceleration structure for simulations that keep
//! adding points and asking "what is near here?" (particles, agents, boids).
//!
//! - Insert [`kurbo::Point`]s into a square region `[0, size) × [0, size)`.
//! - Leaves split into four quadrants once they reach a fixed capacity (4 by default).
//! - Enumerate leaf quadrant bounds for debug drawing.
//! - Find the nearest stored point, exactly or with a cheaper leaf-only scan.
//!
//! Points are append-only: there is no removal, update, or rebalancing.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::Quadtree;
//! use kurbo::{Point, Rect};
//!
//! let mut tree = Quadtree::new(100.0);
//! for (x, y) in [(10.0, 10.0), (70.0, 20.0), (30.0, 80.0)] {
//!     tree.insert(Point::new(x, y)).unwrap();
//! }
//! // Still a single leaf.
//! assert_eq!(tree.quadrant_bounds(), vec![Rect::new(0.0, 0.0, 100.0, 100.0)]);
//!
//! // The fourth point fills the leaf and splits it into four 50×50 quadrants.
//! tree.insert(Point::new(60.0, 60.0)).unwrap();
//! assert_eq!(tree.quadrant_bounds().len(), 4);
//!
//! assert_eq!(tree.find_nearest(Point::new(55.0, 50.0)), Some(Point::new(60.0, 60.0)));
//! ```
//!
//! ## Containment
//!
//! Regions are half-open: a point belongs to a quadrant when `x0 <= x < x1` and
//! `y0 <= y < y1`, so a point on a split line belongs to the quadrant to its right
//! or below. Inserting a point outside the root fails with
//! [`QuadtreeError::OutOfBounds`].
//!
//! ## Nearest-point queries
//!
//! - [`Quadtree::find_nearest`] is exact. It visits quadrants nearest-first and stops once
//!   no remaining quadrant can hold a closer point.
//! - [`Quadtree::find_nearest_in_leaf`] scans only the leaf containing the query. Near a
//!   quadrant boundary it can return a point that is farther than one just across the line:
//!
//! ```rust
//! use understory_quadtree::Quadtree;
//! use kurbo::Point;
//!
//! let mut tree = Quadtree::new(100.0);
//! for (x, y) in [(49.5, 49.5), (51.0, 51.0), (10.0, 90.0), (90.0, 10.0)] {
//!     tree.insert(Point::new(x, y)).unwrap();
//! }
//! let q = Point::new(50.0, 50.0);
//! assert_eq!(tree.find_nearest(q), Some(Point::new(49.5, 49.5)));
//! assert_eq!(tree.find_nearest_in_leaf(q).unwrap(), Some(Point::new(51.0, 51.0)));
//! ```
//!
//! [`QuadtreeConfig::nearest`] picks which of the two [`Quadtree::nearest`] runs.
//!
//! ## Depth limit
//!
//! Coincident points never separate, so splitting them would recurse forever.
//! Splits stop at [`QuadtreeConfig::max_depth`]; an insert that would need a deeper
//! split fails with [`QuadtreeError::DepthLimit`] and leaves the tree untouched.
//!
//! ### Float semantics
//!
//! Query points are assumed to be finite. Debug builds assert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
mod node;
pub mod tree;
pub mod types;

pub use config::{NearestMode, QuadtreeConfig};
pub use error::QuadtreeError;
pub use tree::{Leaves, Quadtree};
pub use types::Quadrant;
