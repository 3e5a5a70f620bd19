// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant naming and region helpers.

use kurbo::{Point, Rect};

/// One of the four children of a split node.
///
/// The discriminants double as child slot indices, and the declaration order
/// (NW, NE, SW, SE) is the order used for routing and for bounds collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top-left: `x < mid_x`, `y < mid_y`.
    NorthWest = 0,
    /// Top-right: `x >= mid_x`, `y < mid_y`.
    NorthEast = 1,
    /// Bottom-left: `x < mid_x`, `y >= mid_y`.
    SouthWest = 2,
    /// Bottom-right: `x >= mid_x`, `y >= mid_y`.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in routing order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Slot index of this quadrant within a node's children.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The sub-region of `parent` covered by this quadrant.
    ///
    /// Both axes are bisected at [`midpoint`], so the four results tile
    /// `parent` exactly under half-open containment.
    pub fn region_of(self, parent: Rect) -> Rect {
        let mx = midpoint(parent.x0, parent.x1);
        let my = midpoint(parent.y0, parent.y1);
        match self {
            Self::NorthWest => Rect::new(parent.x0, parent.y0, mx, my),
            Self::NorthEast => Rect::new(mx, parent.y0, parent.x1, my),
            Self::SouthWest => Rect::new(parent.x0, my, mx, parent.y1),
            Self::SouthEast => Rect::new(mx, my, parent.x1, parent.y1),
        }
    }
}

/// Midpoint of `[low, high)`, computed as `low + (high - low) / 2`.
///
/// Unlike `0.5 * (low + high)` this cannot overflow for large coordinates.
#[inline]
pub fn midpoint(low: f64, high: f64) -> f64 {
    low + (high - low) / 2.0
}

/// Half-open containment: `x0 <= x < x1` and `y0 <= y < y1`.
///
/// NaN coordinates are never contained.
#[inline]
pub fn contains_half_open(region: &Rect, p: Point) -> bool {
    // kurbo's `Rect::contains` uses the same half-open rule.
    region.contains(p)
}

/// Squared distance from `p` to the closest point of `region`.
///
/// Zero when `p` lies inside or on the boundary. Used as the pruning bound
/// for nearest-point search.
#[inline]
pub fn min_distance_squared(region: &Rect, p: Point) -> f64 {
    let dx = axis_gap(p.x, region.x0, region.x1);
    let dy = axis_gap(p.y, region.y0, region.y1);
    dx * dx + dy * dy
}

#[inline]
fn axis_gap(v: f64, low: f64, high: f64) -> f64 {
    if v < low {
        low - v
    } else if v > high {
        v - high
    } else {
        0.0
    }
}
