// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring geometry: map arc states to annular sectors in view space.

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Arc, BezPath, Point, Vec2};
use sunburst_zoom::ArcState;

use crate::ChartOptions;

/// Flattening tolerance used when converting arcs to cubic Béziers.
const ARC_TOLERANCE: f64 = 0.1;

/// Turns an [`ArcState`] into something drawable.
///
/// This is the seam between the headless chart and whatever draws it. The
/// chart hands out arc states (resting or mid-transition) and the renderer
/// decides what a "path" is: a [`BezPath`], an SVG string, a GPU mesh.
pub trait ArcRenderer {
    /// Drawable produced for one arc.
    type Path;

    /// Builds the drawable for `arc`.
    fn build_arc(&self, arc: &ArcState) -> Self::Path;
}

/// Concentric ring layout centered in the plot.
///
/// Ring thickness is chosen so that `max_depth + 2` rings fit in half the plot
/// width. Ring `l` spans radii `[gap * l, gap * l + 1]` in thickness units, so
/// fractional levels during a zoom slide rings smoothly in or out.
///
/// Angles follow the chart convention: `0` at 12 o'clock, increasing clockwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingLayout {
    center: Point,
    thickness: f64,
    ring_gap: f64,
}

impl RingLayout {
    /// Computes the layout for a tree of the given depth.
    #[must_use]
    pub fn new(options: &ChartOptions, max_depth: usize) -> Self {
        let width = options.plot_width;
        let thickness = width / 2.0 / (max_depth as f64 + 2.0) * options.ring_gap;
        Self {
            center: Point::new(width / 2.0, options.height() * options.vertical_anchor),
            thickness,
            ring_gap: options.ring_gap,
        }
    }

    /// Center of the rings in view space.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radial thickness of one ring.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Inner and outer radius of ring `level`.
    ///
    /// Either may be negative for levels below zero.
    #[must_use]
    pub fn radii(&self, level: f64) -> (f64, f64) {
        let inner = self.ring_gap * level * self.thickness;
        let outer = (self.ring_gap * level + 1.0) * self.thickness;
        (inner, outer)
    }

    /// Returns the point at `radius` along chart angle `angle`.
    #[must_use]
    pub fn point_at(&self, angle: f64, radius: f64) -> Point {
        self.center + Vec2::from_angle(angle - FRAC_PI_2) * radius
    }

    /// Returns `true` if `point` falls inside the sector drawn for `arc`.
    #[must_use]
    pub fn hit_test(&self, arc: &ArcState, point: Point) -> bool {
        let (inner, outer) = self.radii(arc.level);
        if outer <= 0.0 {
            return false;
        }
        let offset = point - self.center;
        let radius = offset.hypot();
        if radius < inner.max(0.0) || radius > outer {
            return false;
        }
        let mut angle = offset.atan2() + FRAC_PI_2;
        if angle < 0.0 {
            angle += TAU;
        }
        angle >= arc.start_angle && angle <= arc.stop_angle
    }

    /// Builds the outline of the sector drawn for `arc`.
    ///
    /// Rings whose outer radius is not positive, and arcs with an empty or
    /// inverted span, produce an empty path. When the inner radius is not
    /// positive the sector is a wedge reaching the center.
    #[must_use]
    pub fn sector(&self, arc: &ArcState) -> BezPath {
        let mut path = BezPath::new();
        let (inner, outer) = self.radii(arc.level);
        let sweep = arc.stop_angle - arc.start_angle;
        if outer <= 0.0 || sweep.is_nan() || sweep <= 0.0 {
            return path;
        }

        let start = arc.start_angle - FRAC_PI_2;
        path.move_to(self.point_at(arc.start_angle, outer));
        path.extend(self.ring_arc(outer, start, sweep).append_iter(ARC_TOLERANCE));
        if inner > 0.0 {
            path.line_to(self.point_at(arc.stop_angle, inner));
            path.extend(
                self.ring_arc(inner, start + sweep, -sweep)
                    .append_iter(ARC_TOLERANCE),
            );
        } else {
            path.line_to(self.center);
        }
        path.close_path();
        path
    }

    fn ring_arc(&self, radius: f64, start_angle: f64, sweep_angle: f64) -> Arc {
        Arc {
            center: self.center,
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle,
            x_rotation: 0.0,
        }
    }
}

impl ArcRenderer for RingLayout {
    type Path = BezPath;

    fn build_arc(&self, arc: &ArcState) -> BezPath {
        self.sector(arc)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use kurbo::{PathEl, Shape};

    use super::*;

    fn layout() -> RingLayout {
        // Depth 2: four rings across a 400 wide plot.
        RingLayout::new(&ChartOptions::default(), 2)
    }

    #[test]
    fn dimensions_follow_options() {
        let l = layout();
        assert!((l.thickness() - 200.0 / 4.0 * 1.1).abs() < 1e-9);
        assert!((l.center() - Point::new(200.0, 208.0)).hypot() < 1e-9);
        let (inner, outer) = l.radii(1.0);
        assert!((inner - 1.1 * l.thickness()).abs() < 1e-9);
        assert!((outer - 2.1 * l.thickness()).abs() < 1e-9);
    }

    #[test]
    fn unit_gap_makes_rings_touch() {
        let opts = ChartOptions::default()
            .with_ring_gap(1.0)
            .with_vertical_anchor(0.5);
        let l = RingLayout::new(&opts, 2);
        assert_eq!(l.thickness(), 50.0);
        assert_eq!(l.center(), Point::new(200.0, 200.0));
        assert_eq!(l.radii(1.0), (50.0, 100.0));
        assert_eq!(l.radii(2.0).0, l.radii(1.0).1);
    }

    #[test]
    fn angles_run_clockwise_from_top() {
        let l = layout();
        let top = l.point_at(0.0, 10.0);
        assert!((top.x - 200.0).abs() < 1e-9 && (top.y - 198.0).abs() < 1e-9);
        let right = l.point_at(PI / 2.0, 10.0);
        assert!((right.x - 210.0).abs() < 1e-9 && (right.y - 208.0).abs() < 1e-9);
    }

    #[test]
    fn annulus_sector_has_two_arcs() {
        let l = layout();
        let arc = ArcState {
            start_angle: 0.0,
            stop_angle: PI / 2.0,
            level: 1.0,
        };
        let path = l.sector(&arc);
        let els = path.elements();
        assert!(matches!(els.first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(els.last(), Some(PathEl::ClosePath)));
        assert!(els.iter().filter(|e| matches!(e, PathEl::CurveTo(..))).count() >= 2);

        let bbox = path.bounding_box();
        let (_, outer) = l.radii(1.0);
        assert!(bbox.x1 <= 200.0 + outer + ARC_TOLERANCE);
        assert!(bbox.y0 >= 208.0 - outer - ARC_TOLERANCE);
        // Entirely in the upper-right quadrant.
        assert!(bbox.x0 >= 200.0 - 1e-6 && bbox.y1 <= 208.0 + 1e-6);
    }

    #[test]
    fn collapsed_rings_are_empty() {
        let l = layout();
        let above_focus = ArcState {
            start_angle: 0.0,
            stop_angle: TAU,
            level: -1.0,
        };
        assert!(l.sector(&above_focus).elements().is_empty());

        let empty_span = ArcState {
            start_angle: 1.0,
            stop_angle: 1.0,
            level: 0.0,
        };
        assert!(l.sector(&empty_span).elements().is_empty());
    }

    #[test]
    fn hit_test_matches_sector() {
        let l = layout();
        let arc = ArcState {
            start_angle: 0.0,
            stop_angle: PI / 2.0,
            level: 1.0,
        };
        let (inner, outer) = l.radii(1.0);
        let mid = (inner + outer) / 2.0;
        assert!(l.hit_test(&arc, l.point_at(PI / 4.0, mid)));
        assert!(!l.hit_test(&arc, l.point_at(PI, mid)));
        assert!(!l.hit_test(&arc, l.point_at(PI / 4.0, inner / 2.0)));

        // The center ring reaches all the way in.
        let root = ArcState {
            start_angle: 0.0,
            stop_angle: TAU,
            level: 0.0,
        };
        assert!(l.hit_test(&root, l.center()));
        assert!(l.hit_test(&root, l.point_at(3.0 * PI / 2.0, 5.0)));
    }
}
