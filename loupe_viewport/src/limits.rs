// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default lower bound for the image scale.
pub const DEFAULT_MIN_SCALE: f64 = 0.2;

/// Default upper bound for the image scale.
pub const DEFAULT_MAX_SCALE: f64 = 5.0;

/// Default scale increment for a single wheel tick or zoom button click.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Inclusive range the image scale is kept in.
///
/// Used by [`crate::ViewportController::set_scale`] and
/// [`crate::ViewportController::zoom_by`], which saturate at either bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// The default `[0.2, 5.0]` range.
    pub const DEFAULT: Self = Self {
        min: DEFAULT_MIN_SCALE,
        max: DEFAULT_MAX_SCALE,
    };

    /// Creates a range from two bounds.
    ///
    /// The bounds are normalized so that `min <= max`. A bound that is not
    /// finite is replaced by its default.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min } else { DEFAULT_MIN_SCALE };
        let max = if max.is_finite() { max } else { DEFAULT_MAX_SCALE };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Saturates `scale` into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
