// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree implementation: insertion, splitting, bounds collection, queries.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use kurbo::{Point, Rect};

use crate::config::{NearestMode, QuadtreeConfig};
use crate::error::QuadtreeError;
use crate::node::{NodeIdx, NodeKind, QuadNode};
use crate::types::{Quadrant, contains_half_open, min_distance_squared};

const ROOT: NodeIdx = NodeIdx::new(0);

/// A point quadtree over the square `[0, size) × [0, size)`.
///
/// Leaves hold points until they reach [`QuadtreeConfig::capacity`], at which
/// point they split into four quadrants and hand every point down to exactly
/// one child. Nodes are never merged and points are never removed.
pub struct Quadtree {
    config: QuadtreeConfig,
    arena: Vec<QuadNode>,
    len: usize,
}

impl core::fmt::Debug for Quadtree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("size", &self.config.size)
            .field("capacity", &self.config.capacity)
            .field("points", &self.len)
            .field("nodes", &self.arena.len())
            .field("leaves", &self.leaf_count())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

impl Quadtree {
    /// Create an empty tree covering `[0, size) × [0, size)` with default settings.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not finite and positive. Use [`Quadtree::with_config`]
    /// to get an error instead.
    pub fn new(size: f64) -> Self {
        assert!(
            size.is_finite() && size > 0.0,
            "quadtree size must be finite and positive"
        );
        Self::build(QuadtreeConfig {
            size,
            ..Default::default()
        })
    }

    /// Create an empty tree from an explicit configuration.
    pub fn with_config(config: QuadtreeConfig) -> Result<Self, QuadtreeError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: QuadtreeConfig) -> Self {
        log::debug!(
            "quadtree: size={} capacity={} max_depth={} nearest={:?}",
            config.size,
            config.capacity,
            config.max_depth,
            config.nearest
        );
        let root = QuadNode::leaf(
            Rect::new(0.0, 0.0, config.size, config.size),
            0,
            config.capacity,
        );
        Self {
            config,
            arena: vec![root],
            len: 0,
        }
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    /// The root region.
    pub fn bounds(&self) -> Rect {
        self.node(ROOT).region
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no points have been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of nodes, branches included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of leaf quadrants.
    pub fn leaf_count(&self) -> usize {
        self.arena.iter().filter(|n| n.is_leaf()).count()
    }

    /// Depth of the deepest node. A tree that never split has depth 0.
    pub fn depth(&self) -> u32 {
        self.arena.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Insert a point.
    ///
    /// The point must lie in the root region under half-open containment.
    /// If it fills its leaf to capacity, the leaf splits before this returns.
    ///
    /// On error nothing is stored and the tree is unchanged.
    pub fn insert(&mut self, p: Point) -> Result<(), QuadtreeError> {
        if !contains_half_open(&self.bounds(), p) {
            return Err(QuadtreeError::out_of_bounds(p));
        }
        let leaf = self.leaf_for(p)?;
        self.check_split_depth(leaf, p)?;
        self.insert_at(leaf, p)?;
        self.len += 1;
        Ok(())
    }

    /// Regions of all leaf quadrants, in NW, NE, SW, SE depth-first order.
    ///
    /// The regions tile [`Quadtree::bounds`] with no gaps and no overlaps.
    pub fn quadrant_bounds(&self) -> Vec<Rect> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_quadrant_bounds(&mut out);
        out
    }

    /// Append the regions of all leaf quadrants to `out`.
    ///
    /// Same order as [`Quadtree::quadrant_bounds`]; lets per-frame callers reuse
    /// one buffer.
    pub fn collect_quadrant_bounds(&self, out: &mut Vec<Rect>) {
        self.collect_from(ROOT, out);
    }

    /// Iterate over leaves as `(region, points)`, in the same order as
    /// [`Quadtree::quadrant_bounds`].
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            tree: self,
            stack: vec![ROOT],
        }
    }

    /// The stored point closest to `query` by Euclidean distance.
    ///
    /// This is an exact search: quadrants are visited nearest-first and a
    /// quadrant is skipped once its region is no closer than the best point
    /// found so far. `query` may lie outside [`Quadtree::bounds`].
    ///
    /// Returns `None` for an empty tree. Among equidistant points the one
    /// found first wins; within one leaf that is the earliest inserted.
    pub fn find_nearest(&self, query: Point) -> Option<Point> {
        debug_assert!(query.is_finite(), "query point must be finite");
        if self.is_empty() {
            return None;
        }
        let mut best: Option<(f64, Point)> = None;
        let mut queue = BinaryHeap::new();
        queue.push(Candidate {
            dist2: min_distance_squared(&self.bounds(), query),
            idx: ROOT,
        });
        while let Some(Candidate { dist2, idx }) = queue.pop() {
            if let Some((best_dist2, _)) = best
                && dist2 >= best_dist2
            {
                break;
            }
            match &self.node(idx).kind {
                NodeKind::Leaf(points) => scan_closest(points, query, &mut best),
                NodeKind::Branch(children) => {
                    for &child in children {
                        queue.push(Candidate {
                            dist2: min_distance_squared(&self.node(child).region, query),
                            idx: child,
                        });
                    }
                }
            }
        }
        best.map(|(_, p)| p)
    }

    /// The stored point closest to `query` within the leaf that contains it.
    ///
    /// Only that one leaf is scanned, so a closer point just across a quadrant
    /// boundary is missed. Use [`Quadtree::find_nearest`] for an exact answer.
    ///
    /// Returns `Ok(None)` if the leaf is empty, and
    /// [`QuadtreeError::OutOfBounds`] if the tree has split and `query` lies
    /// outside every child of a branch on the way down.
    pub fn find_nearest_in_leaf(&self, query: Point) -> Result<Option<Point>, QuadtreeError> {
        let leaf = self.leaf_for(query)?;
        let mut best = None;
        scan_closest(self.node(leaf).points(), query, &mut best);
        Ok(best.map(|(_, p)| p))
    }

    /// Nearest point using the search selected by [`QuadtreeConfig::nearest`].
    pub fn nearest(&self, query: Point) -> Result<Option<Point>, QuadtreeError> {
        match self.config.nearest {
            NearestMode::Exact => Ok(self.find_nearest(query)),
            NearestMode::LeafOnly => self.find_nearest_in_leaf(query),
        }
    }

    fn node(&self, idx: NodeIdx) -> &QuadNode {
        &self.arena[idx.get()]
    }

    /// Walk from the root to the leaf whose region contains `p`.
    fn leaf_for(&self, p: Point) -> Result<NodeIdx, QuadtreeError> {
        let mut idx = ROOT;
        while let NodeKind::Branch(children) = &self.node(idx).kind {
            idx = self.sort(children, p)?;
        }
        Ok(idx)
    }

    /// The child of a branch whose region contains `p`, checked NW, NE, SW, SE.
    fn sort(&self, children: &[NodeIdx; 4], p: Point) -> Result<NodeIdx, QuadtreeError> {
        children
            .iter()
            .copied()
            .find(|&c| contains_half_open(&self.node(c).region, p))
            .ok_or_else(|| QuadtreeError::out_of_bounds(p))
    }

    fn insert_at(&mut self, mut idx: NodeIdx, p: Point) -> Result<(), QuadtreeError> {
        loop {
            match &mut self.arena[idx.get()].kind {
                NodeKind::Branch(children) => {
                    let children = *children;
                    idx = self.sort(&children, p)?;
                }
                NodeKind::Leaf(points) => {
                    points.push(p);
                    if points.len() >= self.config.capacity {
                        self.split(idx)?;
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Turn a full leaf into a branch and hand its points down.
    ///
    /// Points go through [`Self::insert_at`], so a child that fills up splits in turn.
    fn split(&mut self, idx: NodeIdx) -> Result<(), QuadtreeError> {
        let node = &mut self.arena[idx.get()];
        let (region, depth) = (node.region, node.depth);
        let NodeKind::Leaf(points) = &mut node.kind else {
            return Ok(());
        };
        let points = core::mem::take(points);
        debug_assert!(
            depth < self.config.max_depth,
            "split past max depth should have been rejected"
        );
        log::trace!("quadtree: split {region:?} at depth {depth}");

        let mut children = [ROOT; 4];
        for q in Quadrant::ALL {
            children[q.index()] = NodeIdx::new(self.arena.len());
            self.arena.push(QuadNode::leaf(
                q.region_of(region),
                depth + 1,
                self.config.capacity,
            ));
        }
        self.arena[idx.get()].kind = NodeKind::Branch(children);

        for p in points {
            let child = self.sort(&children, p)?;
            self.insert_at(child, p)?;
        }
        Ok(())
    }

    /// Reject `p` if storing it in `leaf` would cascade splits past `max_depth`.
    ///
    /// A node splits exactly when it receives `capacity` points, so partitioning
    /// the leaf's points plus `p` reproduces the cascade without touching the tree.
    fn check_split_depth(&self, leaf: NodeIdx, p: Point) -> Result<(), QuadtreeError> {
        let node = self.node(leaf);
        let held = node.points();
        if held.len() + 1 < self.config.capacity {
            return Ok(());
        }
        let mut pending = Vec::with_capacity(held.len() + 1);
        pending.extend_from_slice(held);
        pending.push(p);
        if self.cascade_fits(node.region, node.depth, &pending) {
            Ok(())
        } else {
            log::warn!(
                "quadtree: rejected ({}, {}); split would exceed max depth {}",
                p.x,
                p.y,
                self.config.max_depth
            );
            Err(QuadtreeError::DepthLimit {
                x: p.x,
                y: p.y,
                depth: self.config.max_depth,
            })
        }
    }

    fn cascade_fits(&self, region: Rect, depth: u32, points: &[Point]) -> bool {
        if points.len() < self.config.capacity {
            return true;
        }
        if depth >= self.config.max_depth {
            return false;
        }
        Quadrant::ALL.iter().all(|q| {
            let sub = q.region_of(region);
            let inside: Vec<Point> = points
                .iter()
                .copied()
                .filter(|&pt| contains_half_open(&sub, pt))
                .collect();
            self.cascade_fits(sub, depth + 1, &inside)
        })
    }

    fn collect_from(&self, idx: NodeIdx, out: &mut Vec<Rect>) {
        let node = self.node(idx);
        match &node.kind {
            NodeKind::Leaf(_) => out.push(node.region),
            NodeKind::Branch(children) => {
                for &child in children {
                    self.collect_from(child, out);
                }
            }
        }
    }
}

/// Linear scan keeping the first point with strictly smaller squared distance.
fn scan_closest(points: &[Point], query: Point, best: &mut Option<(f64, Point)>) {
    for &p in points {
        let d = p.distance_squared(query);
        if best.is_none_or(|(best_d, _)| d < best_d) {
            *best = Some((d, p));
        }
    }
}

/// Search queue entry; `BinaryHeap` pops the nearest region first.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    dist2: f64,
    idx: NodeIdx,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal distances prefer the older node.
        other
            .dist2
            .total_cmp(&self.dist2)
            .then_with(|| other.idx.get().cmp(&self.idx.get()))
    }
}

/// Iterator over leaf quadrants returned by [`Quadtree::leaves`].
#[derive(Debug)]
pub struct Leaves<'a> {
    tree: &'a Quadtree,
    stack: Vec<NodeIdx>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (Rect, &'a [Point]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            let node = self.tree.node(idx);
            match &node.kind {
                NodeKind::Leaf(points) => return Some((node.region, points)),
                NodeKind::Branch(children) => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}
