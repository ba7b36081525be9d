// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Linearly interpolates from `a` to `b`.
///
/// Evaluated as `a * (1 - t) + b * t` so that `t = 0` yields exactly `a` and
/// `t = 1` yields exactly `b` for finite inputs. Values of `t` outside `[0, 1]`
/// extrapolate.
#[must_use]
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// A captured pair of endpoints, evaluated with [`lerp`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lerp {
    /// Value at `t = 0`.
    pub from: f64,
    /// Value at `t = 1`.
    pub to: f64,
}

impl Lerp {
    /// Creates an interpolator between `from` and `to`.
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Evaluates the interpolation at `t`.
    #[must_use]
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        lerp(self.from, self.to, t)
    }
}
