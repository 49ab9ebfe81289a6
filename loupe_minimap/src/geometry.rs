// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry for the minimap: thumbnail fitting and the view box.

use kurbo::{Point, Rect, Size, Vec2};
use loupe_viewport::ViewportState;

/// Default side length of the square minimap, in pixels.
pub const DEFAULT_MAP_SIZE: f64 = 80.0;

/// Position and size of the view box inside the minimap.
///
/// All values are in minimap-local pixels. The box size never exceeds the
/// minimap size, but its position is not clamped: panning beyond the natural
/// travel range moves the box past the minimap edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapGeometry {
    /// The view box rectangle (`x0` is `left`, `y0` is `top`).
    pub view_box: Rect,
    /// Fraction of the scaled image visible through the viewport, per axis.
    ///
    /// Values above `1.0` mean the whole image fits on that axis.
    pub visible_fraction: Vec2,
    /// Translation as a fraction of the maximum travel at the current scale.
    ///
    /// Conceptually in `[-1, 1]`, unclamped.
    pub normalized_offset: Vec2,
}

impl MinimapGeometry {
    /// View box width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.view_box.width()
    }

    /// View box height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.view_box.height()
    }

    /// View box left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.view_box.x0
    }

    /// View box top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.view_box.y0
    }
}

/// Computes the view box for `state`.
///
/// `natural` is the image's intrinsic size, `viewport` the size of the window
/// the image is shown in and `map_size` the side of the square minimap.
///
/// Returns `None` when the natural size or the scale cannot produce a
/// meaningful box (zero, negative or non-finite), for example before the
/// image has loaded.
#[must_use]
pub fn recompute_geometry(
    state: &ViewportState,
    natural: Size,
    viewport: Size,
    map_size: f64,
) -> Option<MinimapGeometry> {
    if !is_positive_size(natural) || !(state.scale.is_finite() && state.scale > 0.0) {
        return None;
    }
    let scaled = natural * state.scale;

    let visible_fraction = Vec2::new(viewport.width / scaled.width, viewport.height / scaled.height);
    let box_size = Size::new(
        visible_fraction.x.min(1.0) * map_size,
        visible_fraction.y.min(1.0) * map_size,
    );

    // Half the travel available before an image edge enters the viewport.
    let max_travel = Vec2::new(
        (scaled.width - viewport.width) / 2.0,
        (scaled.height - viewport.height) / 2.0,
    );
    let normalized_offset = Vec2::new(
        normalized(state.translation.x, max_travel.x),
        normalized(state.translation.y, max_travel.y),
    );

    let half_map = map_size / 2.0;
    let origin = Point::new(
        half_map - box_size.width / 2.0 - normalized_offset.x * half_map,
        half_map - box_size.height / 2.0 - normalized_offset.y * half_map,
    );

    Some(MinimapGeometry {
        view_box: Rect::from_origin_size(origin, box_size),
        visible_fraction,
        normalized_offset,
    })
}

/// Scaled-down copy of the image, fitted and centered inside the minimap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thumbnail {
    /// Natural size of the source image.
    pub natural: Size,
    /// Scale from natural pixels to minimap pixels.
    pub base_scale: f64,
    /// Area the thumbnail covers in minimap-local pixels.
    pub rect: Rect,
}

impl Thumbnail {
    /// Fits an image of `natural` size into a `map_size` square, preserving
    /// aspect ratio.
    ///
    /// Returns `None` for an empty or non-finite natural size.
    #[must_use]
    pub fn fit(natural: Size, map_size: f64) -> Option<Self> {
        if !is_positive_size(natural) {
            return None;
        }
        let base_scale = (map_size / natural.width).min(map_size / natural.height);
        let center = Point::new(map_size / 2.0, map_size / 2.0);
        Some(Self {
            natural,
            base_scale,
            rect: Rect::from_center_size(center, natural * base_scale),
        })
    }
}

fn normalized(offset: f64, max_travel: f64) -> f64 {
    if max_travel != 0.0 {
        offset / max_travel
    } else {
        0.0
    }
}

fn is_positive_size(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};
    use loupe_viewport::ViewportState;

    use super::{DEFAULT_MAP_SIZE, Thumbnail, recompute_geometry};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn end_to_end_box_size() {
        let state = ViewportState::new(2.0, Vec2::ZERO);
        let geom = recompute_geometry(
            &state,
            Size::new(2000.0, 1000.0),
            Size::new(800.0, 600.0),
            DEFAULT_MAP_SIZE,
        )
        .unwrap();

        assert!(approx(geom.visible_fraction.x, 0.2));
        assert!(approx(geom.visible_fraction.y, 0.3));
        assert!(approx(geom.width(), 16.0));
        assert!(approx(geom.height(), 24.0));
        // Centered when not panned.
        assert!(approx(geom.left(), 32.0));
        assert!(approx(geom.top(), 28.0));
    }

    #[test]
    fn fully_visible_image_fills_the_map() {
        let state = ViewportState::new(0.2, Vec2::ZERO);
        let geom = recompute_geometry(
            &state,
            Size::new(2000.0, 1000.0),
            Size::new(800.0, 600.0),
            DEFAULT_MAP_SIZE,
        )
        .unwrap();
        assert_eq!(geom.view_box, Rect::new(0.0, 0.0, 80.0, 80.0));
    }

    #[test]
    fn zero_travel_yields_zero_offset() {
        // natural width * scale == viewport width exactly.
        let state = ViewportState::new(1.0, Vec2::new(35.0, 0.0));
        let geom = recompute_geometry(
            &state,
            Size::new(800.0, 900.0),
            Size::new(800.0, 600.0),
            DEFAULT_MAP_SIZE,
        )
        .unwrap();
        assert_eq!(geom.normalized_offset.x, 0.0);
        assert!(geom.left().is_finite());
        assert!(approx(geom.left(), 0.0));
    }

    #[test]
    fn pan_to_the_right_moves_box_left() {
        let natural = Size::new(2000.0, 1000.0);
        let viewport = Size::new(800.0, 600.0);
        // max travel at scale 2 is (4000 - 800) / 2 = 1600 horizontally.
        let state = ViewportState::new(2.0, Vec2::new(1600.0, 0.0));
        let geom = recompute_geometry(&state, natural, viewport, DEFAULT_MAP_SIZE).unwrap();
        assert!(approx(geom.normalized_offset.x, 1.0));
        // 40 - 16 / 2 - 1 * 40
        assert!(approx(geom.left(), -8.0));

        // Beyond the travel range the box leaves the map; that is accepted.
        let state = ViewportState::new(2.0, Vec2::new(-3200.0, 0.0));
        let geom = recompute_geometry(&state, natural, viewport, DEFAULT_MAP_SIZE).unwrap();
        assert!(approx(geom.normalized_offset.x, -2.0));
        assert!(geom.view_box.x1 > DEFAULT_MAP_SIZE);
    }

    #[test]
    fn unknown_natural_size_is_skipped() {
        let state = ViewportState::IDENTITY;
        let viewport = Size::new(800.0, 600.0);
        assert!(recompute_geometry(&state, Size::ZERO, viewport, DEFAULT_MAP_SIZE).is_none());
        assert!(
            recompute_geometry(&state, Size::new(100.0, 0.0), viewport, DEFAULT_MAP_SIZE)
                .is_none()
        );
        assert!(
            recompute_geometry(
                &state,
                Size::new(f64::NAN, 10.0),
                viewport,
                DEFAULT_MAP_SIZE
            )
            .is_none()
        );
    }

    #[test]
    fn thumbnail_preserves_aspect_and_centers() {
        let thumb = Thumbnail::fit(Size::new(2000.0, 1000.0), 80.0).unwrap();
        assert!(approx(thumb.base_scale, 0.04));
        assert!(approx(thumb.rect.width(), 80.0));
        assert!(approx(thumb.rect.height(), 40.0));
        assert!(approx(thumb.rect.y0, 20.0));

        let tall = Thumbnail::fit(Size::new(500.0, 1000.0), 80.0).unwrap();
        assert!(approx(tall.rect.width(), 40.0));
        assert!(approx(tall.rect.x0, 20.0));

        assert!(Thumbnail::fit(Size::ZERO, 80.0).is_none());
    }
}
