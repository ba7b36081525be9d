// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sunburst Zoom: interpolate arc geometry between two focus frames.
//!
//! Zooming a sunburst into an arc stretches that arc to the full circle and
//! moves it to the innermost ring. Every other arc is re-expressed relative to
//! it:
//!
//! - `start = (arc.start - focus.start) / focus.span * 2π`
//! - `stop = (arc.stop - focus.start) / focus.span * 2π`
//! - `level = arc.level - focus.level`
//!
//! A [`FocusFrame`] performs that projection. A [`ZoomTween`] pairs the frame
//! being left (`base`) with the frame being entered (`target`), and produces an
//! [`ArcTween`] per arc that linearly interpolates each component with progress
//! in `[0, 1]`.
//!
//! Interpolation is exact at both ends: progress `0` reproduces the base
//! projection bit for bit and progress `1` the target projection, so a renderer
//! can swap between resting and animated geometry without a visible jump.
//!
//! ## Minimal example
//!
//! ```rust
//! use sunburst_partition::{TreeNode, partition};
//! use sunburst_zoom::{ZoomTween, project};
//!
//! let tree = TreeNode::new("root", 2.0)
//!     .with_child(TreeNode::new("a", 1.0).with_child(TreeNode::new("a1", 1.0)))
//!     .with_child(TreeNode::new("b", 1.0));
//! let arcs = partition(&tree);
//!
//! // Zoom from the root into `a`.
//! let zoom = ZoomTween::new(&arcs[0], &arcs[1]);
//! let a1 = zoom.arc(&arcs[2]);
//!
//! assert_eq!(a1.at(0.0), project(&arcs[2], &arcs[0]));
//! assert_eq!(a1.at(1.0), project(&arcs[2], &arcs[1]));
//! assert_eq!(a1.at(1.0).level, 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod lerp;
mod tween;

pub use lerp::{Lerp, lerp};
pub use tween::{ArcState, ArcTween, FocusFrame, ZoomTween, project};
