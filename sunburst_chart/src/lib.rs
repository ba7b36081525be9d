// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sunburst Chart: a headless, click-to-zoom sunburst.
//!
//! A [`SunburstChart`] partitions a weighted tree into ring arcs (see
//! `sunburst_partition`), tracks which arc is focused (see `sunburst_history`),
//! and turns clicks into animated zoom transitions (see `sunburst_zoom`).
//!
//! It does **not** draw anything. Callers are expected to:
//! - Map pointer input to an [`ArcId`], for example with [`SunburstChart::arc_at`].
//! - Apply the [`ZoomPlan`] returned for each accepted click: fade out `hide`,
//!   fade in `show`, and animate the geometry of `tween`.
//! - Drive time by calling [`SunburstChart::poll`] each frame, or by scheduling
//!   [`SunburstChart::finish_transition`] after the plan's duration.
//! - Turn arc geometry into drawables through an [`ArcRenderer`]. [`RingLayout`]
//!   is a ready-made renderer producing `kurbo` paths.
//!
//! ## Click semantics
//!
//! - Clicking the focused arc, when there is a previous focus, is a
//!   **drill-back**: the previous focus becomes the zoom target and every arc
//!   within it becomes visible again.
//! - Clicking any other visible arc is a **drill-down**: it becomes the zoom
//!   target and every arc outside its subtree is hidden.
//! - In both directions the clicked arc and its descendants are animated from
//!   the current focus frame to the target frame.
//! - While a transition is in flight, clicks are dropped. History is updated
//!   only when the transition completes, so accepted clicks commit in order.
//!
//! ## Minimal example
//!
//! ```rust
//! use sunburst_chart::{ArcId, ChartOptions, SunburstChart, TreeNode, ZoomDirection};
//!
//! let tree = TreeNode::new("root", 10.0)
//!     .with_child(TreeNode::new("docs", 4.0).with_child(TreeNode::new("conf", 4.0)))
//!     .with_child(TreeNode::new("examples", 6.0));
//! let mut chart = SunburstChart::new(&tree, ChartOptions::default());
//!
//! let docs = ArcId(1);
//! let plan = chart.on_arc_clicked(docs, 0).unwrap();
//! assert_eq!(plan.direction, ZoomDirection::DrillDown);
//! assert_eq!(plan.tween, [ArcId(1), ArcId(2)]);
//!
//! // Clicks are ignored until the transition completes.
//! assert!(chart.on_arc_clicked(docs, 500).is_none());
//! assert_eq!(chart.poll(1000), Some(ZoomDirection::DrillDown));
//! assert_eq!(chart.focus(), docs);
//!
//! // Clicking the focused arc zooms back out.
//! let plan = chart.on_arc_clicked(docs, 1000).unwrap();
//! assert_eq!(plan.direction, ZoomDirection::DrillBack);
//! chart.finish_transition();
//! assert_eq!(chart.focus(), ArcId::ROOT);
//! ```
//!
//! ## Logging
//!
//! Accepted and committed transitions are reported through the `log` facade at
//! `debug` level; dropped clicks at `trace`. No logger is installed.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo` for floating point math.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ChartOptions`] and the
//!   input tree.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chart;
mod layout;
mod options;

pub use chart::{SunburstChart, Transition, Visibility, ZoomDirection, ZoomPlan, ZoomState};
pub use layout::{ArcRenderer, RingLayout};
pub use options::ChartOptions;

pub use sunburst_partition::{ArcDescriptor, ArcId, TreeError, TreeNode};
pub use sunburst_zoom::{ArcState, ArcTween};
