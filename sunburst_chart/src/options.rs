// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Chart configuration.
///
/// All lengths are in view units (typically pixels). Defaults produce a 400×400
/// plot with a one second zoom transition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartOptions {
    /// Plot width.
    pub plot_width: f64,
    /// Plot height; `None` means square (same as the width).
    pub plot_height: Option<f64>,
    /// Duration of a zoom transition in milliseconds.
    pub transition_duration: u64,
    /// Spacing factor between rings; ring `l` starts at `ring_gap * l` thicknesses.
    pub ring_gap: f64,
    /// Vertical position of the chart center as a fraction of the plot height.
    pub vertical_anchor: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            plot_width: 400.0,
            plot_height: None,
            transition_duration: 1000,
            ring_gap: 1.1,
            vertical_anchor: 0.52,
        }
    }
}

impl ChartOptions {
    /// Returns the effective plot height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.plot_height.unwrap_or(self.plot_width)
    }

    /// Sets the plot width, keeping the height square unless it was set explicitly.
    #[must_use]
    pub fn with_plot_width(mut self, width: f64) -> Self {
        self.plot_width = width;
        self
    }

    /// Sets an explicit plot height.
    #[must_use]
    pub fn with_plot_height(mut self, height: f64) -> Self {
        self.plot_height = Some(height);
        self
    }

    /// Sets the zoom transition duration in milliseconds.
    #[must_use]
    pub fn with_transition_duration(mut self, millis: u64) -> Self {
        self.transition_duration = millis;
        self
    }

    /// Sets the ring spacing factor.
    #[must_use]
    pub fn with_ring_gap(mut self, ring_gap: f64) -> Self {
        self.ring_gap = ring_gap;
        self
    }

    /// Sets the vertical anchor of the chart center.
    #[must_use]
    pub fn with_vertical_anchor(mut self, anchor: f64) -> Self {
        self.vertical_anchor = anchor;
        self
    }
}
