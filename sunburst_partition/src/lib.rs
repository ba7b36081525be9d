// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sunburst Partition: turn a weighted tree into flat angular arc descriptors.
//!
//! A sunburst chart draws each depth level of a tree as a ring. Every node
//! becomes one [`ArcDescriptor`] whose angular span is its share of its
//! parent's span, proportional to `child.value / parent.value`.
//!
//! This crate only computes the descriptors. It does not know about radii,
//! paths, or colors; a renderer maps each descriptor's `level` to a ring and
//! its angles to a sector.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::f64::consts::TAU;
//! use sunburst_partition::{TreeNode, max_depth, partition};
//!
//! let tree = TreeNode::new("root", 10.0)
//!     .with_child(TreeNode::new("a", 4.0))
//!     .with_child(TreeNode::new("b", 6.0));
//!
//! let arcs = partition(&tree);
//! assert_eq!(arcs.len(), 3);
//!
//! // Pre-order: the root comes first and spans the full circle.
//! assert_eq!(arcs[0].stop_angle, TAU);
//!
//! // Siblings are contiguous.
//! assert_eq!(arcs[1].stop_angle, arcs[2].start_angle);
//! assert_eq!(max_depth(&tree), 1);
//! ```
//!
//! ## Degenerate weights
//!
//! Partitioning never fails. A node whose span collapses to zero (a zero
//! `value`) is left out along with its whole subtree. A parent with a zero
//! value cannot divide its span, so its children are left out too. Use
//! [`TreeNode::validate`] to reject such input up front instead.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`TreeNode`], [`ArcDescriptor`]
//!   and [`ArcId`]. The tree format is `{ name, description, value, children }`
//!   where `description` and `children` may be omitted.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arc;
mod partition;
mod tree;

pub use arc::{ArcDescriptor, ArcId};
pub use partition::{max_depth, partition, partition_range};
pub use tree::{TreeError, TreeErrorKind, TreeNode};
