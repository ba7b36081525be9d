// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Index of an [`ArcDescriptor`] within the sequence returned by [`partition`](crate::partition).
///
/// The root arc is always [`ArcId::ROOT`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcId(pub usize);

impl ArcId {
    /// The root arc; partitioning emits it first.
    pub const ROOT: Self = Self(0);

    /// Returns the index into the arc sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One ring segment of the chart: an angular span at a depth level.
///
/// Angles are in radians, measured clockwise from 12 o'clock. A child's span is
/// nested within its parent's span up to rounding and its level is one greater.
///
/// Each descriptor also records its place in the pre-order sequence: its own
/// [`ArcId`] and the end of the contiguous run of its descendants. Subtree
/// membership is decided from those indices, never from angles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcDescriptor {
    /// Position of this arc in the partitioned sequence.
    pub id: ArcId,
    /// One past the index of this arc's last descendant.
    pub subtree_end: usize,
    /// Start of the span.
    pub start_angle: f64,
    /// End of the span; never less than `start_angle`.
    pub stop_angle: f64,
    /// Depth in the tree; the root is `0`.
    pub level: usize,
    /// Copied from the source node.
    pub name: String,
    /// Copied from the source node.
    pub description: String,
    /// Copied from the source node.
    pub value: f64,
}

impl ArcDescriptor {
    /// Angular extent of the arc.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.stop_angle - self.start_angle
    }

    /// Number of arcs in this arc's subtree, itself included.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        self.subtree_end - self.id.index()
    }

    /// Returns `true` if `other` is this arc or one of its descendants.
    ///
    /// This is the subtree test used when zooming. Both arcs must come from the
    /// same partitioned sequence.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        (self.id.index()..self.subtree_end).contains(&other.id.index())
    }
}
