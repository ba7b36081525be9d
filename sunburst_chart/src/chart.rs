// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sunburst chart and its click-to-zoom state machine.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use log::{debug, trace, warn};
use sunburst_history::NavigationHistory;
use sunburst_partition::{ArcDescriptor, ArcId, TreeError, TreeNode, max_depth, partition};
use sunburst_zoom::{ArcState, ArcTween, FocusFrame, ZoomTween};

use crate::{ArcRenderer, ChartOptions, RingLayout};

/// Whether an arc is currently shown and clickable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Drawn and interactive.
    #[default]
    Visible,
    /// Faded out and ignoring clicks; outside the focused subtree.
    Hidden,
}

/// Which way a zoom goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Focus moves into the clicked arc.
    DrillDown,
    /// Focus moves back to the previously focused arc.
    DrillBack,
}

/// Instructions for animating one accepted click.
///
/// Returned by [`SunburstChart::on_arc_clicked`]. The renderer fades out
/// `hide`, fades in `show`, and animates the geometry of `tween` with
/// [`ZoomPlan::tween_for`], all over `duration` milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomPlan {
    /// Drill-down or drill-back.
    pub direction: ZoomDirection,
    /// The arc that was clicked.
    pub selected: ArcId,
    /// Focus before the zoom.
    pub base: ArcId,
    /// Focus after the zoom.
    pub target: ArcId,
    /// Arcs to hide and make non-interactive (drill-down only).
    pub hide: Vec<ArcId>,
    /// Arcs to show and make interactive again (drill-back only).
    pub show: Vec<ArcId>,
    /// Arcs whose geometry animates: the clicked arc and its descendants.
    pub tween: Vec<ArcId>,
    /// Frame interpolation from `base` to `target`.
    pub zoom: ZoomTween,
    /// Transition length in milliseconds.
    pub duration: u64,
}

impl ZoomPlan {
    /// Per-arc interpolator for an arc in [`ZoomPlan::tween`].
    #[must_use]
    pub fn tween_for(&self, arc: &ArcDescriptor) -> ArcTween {
        self.zoom.arc(arc)
    }
}

/// A zoom in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    direction: ZoomDirection,
    selected: ArcId,
    tween: Vec<ArcId>,
    zoom: ZoomTween,
    started_at: u64,
    duration: u64,
}

impl Transition {
    /// Drill-down or drill-back.
    #[must_use]
    pub fn direction(&self) -> ZoomDirection {
        self.direction
    }

    /// Timestamp at which the transition completes.
    #[must_use]
    pub fn deadline(&self) -> u64 {
        self.started_at.saturating_add(self.duration)
    }

    /// Progress at `now`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed as f64 / self.duration as f64).min(1.0)
    }
}

/// Click handling state.
///
/// Only one transition can be in flight; clicks while [`ZoomState::Animating`]
/// are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ZoomState {
    /// Waiting for a click.
    #[default]
    Idle,
    /// A zoom is animating and will commit when it completes.
    Animating(Transition),
}

/// A headless sunburst chart.
///
/// Owns the partitioned arcs, per-arc visibility, the navigation history of
/// focused arcs, and the click state machine. It never draws; hosts read arc
/// geometry from it and hand it to an [`ArcRenderer`].
///
/// Time is supplied by the host as a millisecond timestamp. After an accepted
/// click, the host either calls [`SunburstChart::poll`] on each frame or
/// schedules [`SunburstChart::finish_transition`] after the plan's duration.
#[derive(Clone, Debug)]
pub struct SunburstChart {
    options: ChartOptions,
    arcs: Vec<ArcDescriptor>,
    depth: usize,
    visibility: Vec<Visibility>,
    history: NavigationHistory<ArcId>,
    state: ZoomState,
}

impl SunburstChart {
    /// Partitions `tree` and creates a chart focused on the root.
    ///
    /// The tree is not validated; see [`SunburstChart::try_new`].
    #[must_use]
    pub fn new(tree: &TreeNode, options: ChartOptions) -> Self {
        let arcs = partition(tree);
        debug_assert!(!arcs.is_empty(), "partitioning always emits the root");
        debug!("partitioned {} arcs from tree {:?}", arcs.len(), tree.name);
        Self {
            options,
            visibility: vec![Visibility::Visible; arcs.len()],
            depth: max_depth(tree),
            arcs,
            history: NavigationHistory::with_root(ArcId::ROOT),
            state: ZoomState::Idle,
        }
    }

    /// Validates `tree` and creates a chart focused on the root.
    pub fn try_new(tree: &TreeNode, options: ChartOptions) -> Result<Self, TreeError> {
        tree.validate()?;
        Ok(Self::new(tree, options))
    }

    /// The configuration this chart was built with.
    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// All arcs in pre-order; index with [`ArcId::index`].
    #[must_use]
    pub fn arcs(&self) -> &[ArcDescriptor] {
        &self.arcs
    }

    /// Looks up one arc.
    #[must_use]
    pub fn arc(&self, id: ArcId) -> Option<&ArcDescriptor> {
        self.arcs.get(id.index())
    }

    /// Depth of the input tree.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.depth
    }

    /// Ring layout for this chart's options and depth.
    #[must_use]
    pub fn layout(&self) -> RingLayout {
        RingLayout::new(&self.options, self.depth)
    }

    /// Focus history; the current entry is the focused arc.
    #[must_use]
    pub fn history(&self) -> &NavigationHistory<ArcId> {
        &self.history
    }

    /// The focused arc.
    #[must_use]
    pub fn focus(&self) -> ArcId {
        self.history.current().copied().unwrap_or(ArcId::ROOT)
    }

    /// Click handling state.
    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, ZoomState::Animating(_))
    }

    /// Visibility of one arc; unknown arcs report `None`.
    #[must_use]
    pub fn visibility(&self, id: ArcId) -> Option<Visibility> {
        self.visibility.get(id.index()).copied()
    }

    /// Handles a click on `selected` at time `now`.
    ///
    /// Clicking the focused arc when there is somewhere to go back to zooms out
    /// to the previous focus. Clicking anything else zooms into it. The plan is
    /// applied to visibility immediately; history is committed when the
    /// transition finishes.
    ///
    /// Returns `None` and changes nothing if a transition is already in flight,
    /// if `selected` is not an arc of this chart, or if it is hidden.
    pub fn on_arc_clicked(&mut self, selected: ArcId, now: u64) -> Option<ZoomPlan> {
        if self.is_animating() {
            trace!("ignoring click on {selected:?}: transition in flight");
            return None;
        }
        let Some(selected_arc) = self.arcs.get(selected.index()) else {
            warn!("ignoring click on unknown arc {selected:?}");
            return None;
        };
        if self.visibility[selected.index()] == Visibility::Hidden {
            trace!("ignoring click on hidden arc {selected:?}");
            return None;
        }

        let base = *self.history.current()?;
        let (direction, target) = if selected == base && self.history.size() > 1 {
            (ZoomDirection::DrillBack, *self.history.previous()?)
        } else {
            (ZoomDirection::DrillDown, selected)
        };
        let target_arc = &self.arcs[target.index()];

        let mut hide = Vec::new();
        let mut show = Vec::new();
        let mut tween = Vec::new();
        for (index, arc) in self.arcs.iter().enumerate() {
            let id = ArcId(index);
            match direction {
                ZoomDirection::DrillBack if target_arc.contains(arc) => show.push(id),
                ZoomDirection::DrillDown if !selected_arc.contains(arc) => hide.push(id),
                _ => {}
            }
            if selected_arc.contains(arc) {
                tween.push(id);
            }
        }

        let zoom = ZoomTween::new(&self.arcs[base.index()], target_arc);
        let duration = self.options.transition_duration;

        for id in &hide {
            self.visibility[id.index()] = Visibility::Hidden;
        }
        for id in &show {
            self.visibility[id.index()] = Visibility::Visible;
        }

        debug!(
            "{direction:?} from {base:?} to {target:?}: {} hidden, {} shown, {} animated",
            hide.len(),
            show.len(),
            tween.len()
        );
        self.state = ZoomState::Animating(Transition {
            direction,
            selected,
            tween: tween.clone(),
            zoom,
            started_at: now,
            duration,
        });

        Some(ZoomPlan {
            direction,
            selected,
            base,
            target,
            hide,
            show,
            tween,
            zoom,
            duration,
        })
    }

    /// Transition progress at `now`, or `None` when idle.
    #[must_use]
    pub fn progress(&self, now: u64) -> Option<f64> {
        match &self.state {
            ZoomState::Idle => None,
            ZoomState::Animating(transition) => Some(transition.progress(now)),
        }
    }

    /// Commits the in-flight transition if its deadline has passed.
    ///
    /// Returns the direction of the committed transition, if any.
    pub fn poll(&mut self, now: u64) -> Option<ZoomDirection> {
        match &self.state {
            ZoomState::Animating(transition) if now >= transition.deadline() => {
                self.finish_transition()
            }
            _ => None,
        }
    }

    /// Ends the in-flight transition now and commits it to the history.
    ///
    /// A drill-down pushes the clicked arc; a drill-back pops the current
    /// focus. Does nothing when idle.
    pub fn finish_transition(&mut self) -> Option<ZoomDirection> {
        let ZoomState::Animating(transition) = core::mem::take(&mut self.state) else {
            return None;
        };
        match transition.direction {
            ZoomDirection::DrillDown => self.history.navigate(transition.selected),
            ZoomDirection::DrillBack => self.history.back(),
        }
        debug!(
            "committed {:?}; focus is now {:?} (history depth {})",
            transition.direction,
            self.focus(),
            self.history.size()
        );
        Some(transition.direction)
    }

    /// Geometry of `id` while idle: the arc projected into the focused frame.
    #[must_use]
    pub fn resting_state(&self, id: ArcId) -> Option<ArcState> {
        let arc = self.arcs.get(id.index())?;
        Some(self.focus_frame().project(arc))
    }

    /// Geometry of every animating arc at `now`; empty when idle.
    #[must_use]
    pub fn frame(&self, now: u64) -> Vec<(ArcId, ArcState)> {
        let ZoomState::Animating(transition) = &self.state else {
            return Vec::new();
        };
        let progress = transition.progress(now);
        transition
            .tween
            .iter()
            .map(|&id| {
                let arc = &self.arcs[id.index()];
                (id, transition.zoom.arc(arc).at(progress))
            })
            .collect()
    }

    /// Builds drawables for every visible arc at rest.
    pub fn render_resting<R>(&self, renderer: &R) -> Vec<(ArcId, R::Path)>
    where
        R: ArcRenderer,
    {
        let frame = self.focus_frame();
        self.visible_arcs()
            .map(|(id, arc)| (id, renderer.build_arc(&frame.project(arc))))
            .collect()
    }

    /// Builds drawables for every animating arc at `now`; empty when idle.
    pub fn render_frame<R>(&self, renderer: &R, now: u64) -> Vec<(ArcId, R::Path)>
    where
        R: ArcRenderer,
    {
        self.frame(now)
            .into_iter()
            .map(|(id, state)| (id, renderer.build_arc(&state)))
            .collect()
    }

    /// Finds the visible arc under `point` in the resting layout.
    #[must_use]
    pub fn arc_at(&self, point: Point) -> Option<ArcId> {
        let layout = self.layout();
        let frame = self.focus_frame();
        self.visible_arcs()
            .find(|(_, arc)| layout.hit_test(&frame.project(arc), point))
            .map(|(id, _)| id)
    }

    fn visible_arcs(&self) -> impl Iterator<Item = (ArcId, &ArcDescriptor)> + '_ {
        self.arcs
            .iter()
            .zip(&self.visibility)
            .enumerate()
            .filter(|(_, (_, vis))| **vis == Visibility::Visible)
            .map(|(index, (arc, _))| (ArcId(index), arc))
    }

    fn focus_frame(&self) -> FocusFrame {
        FocusFrame::new(&self.arcs[self.focus().index()])
    }
}
