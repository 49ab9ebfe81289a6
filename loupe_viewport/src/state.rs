// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Pan/zoom state of the viewed image.
///
/// The image is scaled uniformly about its own center and then translated by
/// `translation` pixels. Translation is not bounded: the image may be panned
/// entirely out of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in view pixels (`tx`, `ty`).
    pub translation: Vec2,
}

impl ViewportState {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a state from a scale and a translation.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Horizontal translation.
    #[must_use]
    pub fn tx(&self) -> f64 {
        self.translation.x
    }

    /// Vertical translation.
    #[must_use]
    pub fn ty(&self) -> f64 {
        self.translation.y
    }

    /// Returns the on-screen rectangle covered by an image of `natural` size
    /// laid out centered in a viewport of `viewport` size.
    #[must_use]
    pub fn screen_rect(&self, natural: Size, viewport: Size) -> Rect {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0) + self.translation;
        Rect::from_center_size(center, natural * self.scale)
    }

    /// Returns the affine map for this state with the scale applied about `origin`.
    ///
    /// `origin` is the image's transform origin in the same space as the
    /// translation, normally the center of the laid-out image.
    #[must_use]
    pub fn to_affine(&self, origin: Point) -> Affine {
        let origin = origin.to_vec2();
        Affine::translate(self.translation + origin)
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }

    /// Returns the transform to push onto the image element.
    #[must_use]
    pub fn image_transform(&self) -> ImageTransform {
        ImageTransform {
            translation: self.translation,
            scale: self.scale,
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Visual transform applied to the image element.
///
/// The [`Display`](fmt::Display) form is the CSS transform function list,
/// for example `translate(12px, -4px) scale(1.5)`, meant to be used with a
/// centered `transform-origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform {
    /// Translation in pixels.
    pub translation: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl fmt::Display for ImageTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translation.x, self.translation.y, self.scale
        )
    }
}
