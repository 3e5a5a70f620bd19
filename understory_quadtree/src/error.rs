// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by quadtree operations.

use thiserror::Error;

/// Failures reported by [`Quadtree`](crate::Quadtree) operations.
///
/// Every failing operation leaves the tree exactly as it was before the call.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum QuadtreeError {
    /// The point lies outside every candidate region.
    ///
    /// Raised for insertions outside the root region (including NaN
    /// coordinates) and when a leaf-only query has to be routed from a
    /// branch for a point outside the root.
    #[error("point ({x}, {y}) is outside the quadtree bounds")]
    OutOfBounds {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
    },

    /// Storing the point would split a node below the configured maximum depth.
    ///
    /// This happens when `capacity` points are coincident, or closer together
    /// than the smallest quadrant the depth limit allows.
    #[error("inserting ({x}, {y}) would split past the maximum depth {depth}")]
    DepthLimit {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
        /// The configured maximum depth.
        depth: u32,
    },

    /// The configuration cannot describe a usable tree.
    #[error("invalid quadtree configuration: {0}")]
    InvalidConfig(&'static str),
}

impl QuadtreeError {
    pub(crate) fn out_of_bounds(p: kurbo::Point) -> Self {
        Self::OutOfBounds { x: p.x, y: p.y }
    }
}
