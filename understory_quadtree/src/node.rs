// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena node storage.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// A node is either a leaf holding points, or a branch with exactly four children.
#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
    Leaf(Vec<Point>),
    /// Children indexed by [`Quadrant::index`](crate::Quadrant::index).
    Branch([NodeIdx; 4]),
}

#[derive(Clone, Debug)]
pub(crate) struct QuadNode {
    pub(crate) region: Rect,
    pub(crate) depth: u32,
    pub(crate) kind: NodeKind,
}

impl QuadNode {
    pub(crate) fn leaf(region: Rect, depth: u32, capacity: usize) -> Self {
        Self {
            region,
            depth,
            kind: NodeKind::Leaf(Vec::with_capacity(capacity)),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Points held directly by this node; always empty for a branch.
    pub(crate) fn points(&self) -> &[Point] {
        match &self.kind {
            NodeKind::Leaf(points) => points,
            NodeKind::Branch(_) => &[],
        }
    }
}
