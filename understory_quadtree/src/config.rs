// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use crate::error::QuadtreeError;

/// Which search [`Quadtree::nearest`](crate::Quadtree::nearest) performs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NearestMode {
    /// Exact nearest point, visiting neighboring quadrants as needed.
    #[default]
    Exact,
    /// Scan only the leaf whose region contains the query.
    ///
    /// Cheaper, but misses closer points that sit across a quadrant boundary.
    LeafOnly,
}

/// Parameters fixed when a [`Quadtree`](crate::Quadtree) is built.
///
/// Use struct update syntax to override individual fields:
///
/// ```
/// use understory_quadtree::{NearestMode, Quadtree, QuadtreeConfig};
///
/// let tree = Quadtree::with_config(QuadtreeConfig {
///     size: 512.0,
///     nearest: NearestMode::LeafOnly,
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(tree.config().capacity, 4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadtreeConfig {
    /// Side length of the root region `[0, size) × [0, size)`.
    pub size: f64,
    /// Number of points at which a leaf splits. A leaf holds at most
    /// `capacity - 1` points between operations.
    pub capacity: usize,
    /// Deepest level a split may create. The root is depth 0.
    pub max_depth: u32,
    /// Search used by [`Quadtree::nearest`](crate::Quadtree::nearest).
    pub nearest: NearestMode,
}

impl QuadtreeConfig {
    /// Default leaf capacity.
    pub const DEFAULT_CAPACITY: usize = 4;
    /// Default depth limit.
    pub const DEFAULT_MAX_DEPTH: u32 = 32;
    /// Largest accepted `max_depth`. Splits and the pre-insert depth check
    /// recurse once per level.
    pub const MAX_DEPTH_LIMIT: u32 = 256;

    pub(crate) fn validate(&self) -> Result<(), QuadtreeError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(QuadtreeError::InvalidConfig(
                "size must be finite and positive",
            ));
        }
        if self.capacity < 2 {
            return Err(QuadtreeError::InvalidConfig("capacity must be at least 2"));
        }
        if self.max_depth > Self::MAX_DEPTH_LIMIT {
            return Err(QuadtreeError::InvalidConfig(
                "max_depth must not exceed 256",
            ));
        }
        Ok(())
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            capacity: Self::DEFAULT_CAPACITY,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            nearest: NearestMode::Exact,
        }
    }
}
