// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_viewport::ScaleLimits;

/// Zoom slider in percent units.
///
/// The range is `[min_scale * 100, max_scale * 100]`. The displayed value is
/// written in two directions: by the user through [`ZoomSlider::input`], and
/// from the controller through [`ZoomSlider::sync`] after every apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSlider {
    min: f64,
    max: f64,
    value: f64,
}

impl ZoomSlider {
    /// Creates a slider covering `limits` and showing `scale`.
    #[must_use]
    pub fn new(limits: ScaleLimits, scale: f64) -> Self {
        let mut slider = Self {
            min: limits.min() * 100.0,
            max: limits.max() * 100.0,
            value: 100.0,
        };
        slider.sync(scale);
        slider
    }

    /// Lower end of the range, in percent.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper end of the range, in percent.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Displayed value, in percent.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Shows `scale` as `round(scale * 100)`.
    pub fn sync(&mut self, scale: f64) {
        self.value = (scale * 100.0).round();
    }

    /// Applies a user-entered value and returns the scale it stands for.
    ///
    /// The value is clamped to the slider range, mirroring a range input.
    pub fn input(&mut self, percent: f64) -> f64 {
        self.value = percent.clamp(self.min, self.max);
        self.value / 100.0
    }
}

#[cfg(test)]
mod tests {
    use loupe_viewport::ScaleLimits;

    use super::ZoomSlider;

    #[test]
    fn range_is_limits_in_percent() {
        let slider = ZoomSlider::new(ScaleLimits::DEFAULT, 1.0);
        assert_eq!(slider.min(), 20.0);
        assert_eq!(slider.max(), 500.0);
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn sync_rounds_accumulated_scale() {
        let mut slider = ZoomSlider::new(ScaleLimits::DEFAULT, 1.0);
        // 1.0 + 0.1 + 0.1 + 0.1 is not exactly 1.3.
        slider.sync(1.0 + 0.1 + 0.1 + 0.1);
        assert_eq!(slider.value(), 130.0);
    }

    #[test]
    fn input_clamps_to_range() {
        let mut slider = ZoomSlider::new(ScaleLimits::DEFAULT, 1.0);
        assert_eq!(slider.input(250.0), 2.5);
        assert_eq!(slider.input(900.0), 5.0);
        assert_eq!(slider.value(), 500.0);
        assert_eq!(slider.input(1.0), 0.2);
    }
}
