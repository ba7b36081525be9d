// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use sunburst_partition::ArcDescriptor;

use crate::Lerp;

/// Transient geometry of an arc as drawn: angles in radians and a ring level.
///
/// Unlike [`ArcDescriptor::level`], the level here is fractional while a zoom is
/// in flight, and may be negative for arcs above the focused one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcState {
    /// Start of the span.
    pub start_angle: f64,
    /// End of the span.
    pub stop_angle: f64,
    /// Ring index relative to the focused arc.
    pub level: f64,
}

impl From<&ArcDescriptor> for ArcState {
    fn from(arc: &ArcDescriptor) -> Self {
        Self {
            start_angle: arc.start_angle,
            stop_angle: arc.stop_angle,
            level: arc.level as f64,
        }
    }
}

/// A focus frame: the reference arc that zoomed geometry is expressed against.
///
/// Projecting through a frame stretches the reference arc's span to the full
/// circle and shifts levels so the reference arc sits on ring `0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusFrame {
    start_angle: f64,
    span: f64,
    level: f64,
}

impl FocusFrame {
    /// Creates a frame focused on `reference`.
    ///
    /// `reference` must have a non-zero span; a zero span yields non-finite
    /// projections. Arcs produced by partitioning always satisfy this.
    #[must_use]
    pub fn new(reference: &ArcDescriptor) -> Self {
        Self {
            start_angle: reference.start_angle,
            span: reference.span(),
            level: reference.level as f64,
        }
    }

    /// Re-expresses `arc` in this frame.
    #[must_use]
    pub fn project(&self, arc: &ArcDescriptor) -> ArcState {
        ArcState {
            start_angle: self.project_angle(arc.start_angle),
            stop_angle: self.project_angle(arc.stop_angle),
            level: arc.level as f64 - self.level,
        }
    }

    fn project_angle(&self, angle: f64) -> f64 {
        (angle - self.start_angle) / self.span * TAU
    }
}

/// Shorthand for `FocusFrame::new(reference).project(arc)`.
#[must_use]
pub fn project(arc: &ArcDescriptor, reference: &ArcDescriptor) -> ArcState {
    FocusFrame::new(reference).project(arc)
}

/// Interpolates arcs from one focus frame to another.
///
/// Build one per zoom transition from the arc currently in focus (`base`) and
/// the arc being zoomed to (`target`), then call [`ZoomTween::arc`] for each
/// arc being animated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomTween {
    base: FocusFrame,
    target: FocusFrame,
}

impl ZoomTween {
    /// Creates a tween from the `base` frame to the `target` frame.
    #[must_use]
    pub fn new(base: &ArcDescriptor, target: &ArcDescriptor) -> Self {
        Self {
            base: FocusFrame::new(base),
            target: FocusFrame::new(target),
        }
    }

    /// Frame in effect at progress `0`.
    #[must_use]
    pub fn base(&self) -> &FocusFrame {
        &self.base
    }

    /// Frame in effect at progress `1`.
    #[must_use]
    pub fn target(&self) -> &FocusFrame {
        &self.target
    }

    /// Returns the interpolator for one arc.
    #[must_use]
    pub fn arc(&self, arc: &ArcDescriptor) -> ArcTween {
        let from = self.base.project(arc);
        let to = self.target.project(arc);
        ArcTween {
            start_angle: Lerp::new(from.start_angle, to.start_angle),
            stop_angle: Lerp::new(from.stop_angle, to.stop_angle),
            level: Lerp::new(from.level, to.level),
        }
    }
}

/// Per-arc interpolator produced by [`ZoomTween::arc`].
///
/// The three components are interpolated independently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcTween {
    /// Start angle, from the base projection to the target projection.
    pub start_angle: Lerp,
    /// Stop angle, from the base projection to the target projection.
    pub stop_angle: Lerp,
    /// Level, from the base projection to the target projection.
    pub level: Lerp,
}

impl ArcTween {
    /// Geometry at `progress`, where `0` is the base frame and `1` the target frame.
    #[must_use]
    pub fn at(&self, progress: f64) -> ArcState {
        ArcState {
            start_angle: self.start_angle.at(progress),
            stop_angle: self.stop_angle.at(progress),
            level: self.level.at(progress),
        }
    }
}
