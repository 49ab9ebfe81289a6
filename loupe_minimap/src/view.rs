// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use loupe_viewport::{ScaleLimits, TransformSurface, ViewportController, ViewportState};

use crate::geometry::{MinimapGeometry, Thumbnail, recompute_geometry};
use crate::slider::ZoomSlider;

/// One of the two discrete zoom buttons under the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomButton {
    /// Decreases the scale by one step.
    ZoomOut,
    /// Increases the scale by one step.
    ZoomIn,
}

/// A write request from the minimap widgets back into the controller.
///
/// The minimap never changes the transform itself; the owner of the
/// controller routes these with [`MinimapCommand::apply_to`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MinimapCommand {
    /// Set an absolute scale (from the slider).
    SetScale(f64),
    /// Change the scale by a delta (from the buttons).
    ZoomBy(f64),
}

impl MinimapCommand {
    /// Forwards the command to `controller`.
    pub fn apply_to<S: TransformSurface>(self, controller: &mut ViewportController<S>) {
        match self {
            Self::SetScale(scale) => controller.set_scale(scale),
            Self::ZoomBy(delta) => controller.zoom_by(delta),
        }
    }
}

/// Overview of the image with a view box and zoom widgets.
///
/// A `MinimapView` is cheap to build and is meant to be dropped when hidden;
/// [`sync`](Self::sync) rebuilds everything it shows from the current
/// [`ViewportState`], so a fresh view never shows stale geometry.
#[derive(Clone, Debug)]
pub struct MinimapView {
    map_size: f64,
    zoom_step: f64,
    thumbnail: Option<Thumbnail>,
    geometry: Option<MinimapGeometry>,
    slider: ZoomSlider,
}

impl MinimapView {
    /// Creates an empty minimap of side `map_size`.
    ///
    /// The slider covers `limits`; the buttons change the scale by `zoom_step`.
    /// Nothing is shown until the first [`sync`](Self::sync).
    #[must_use]
    pub fn new(map_size: f64, limits: ScaleLimits, zoom_step: f64) -> Self {
        Self {
            map_size,
            zoom_step,
            thumbnail: None,
            geometry: None,
            slider: ZoomSlider::new(limits, 1.0),
        }
    }

    /// Side length of the square map, in pixels.
    #[must_use]
    pub fn map_size(&self) -> f64 {
        self.map_size
    }

    /// The fitted thumbnail, once the natural size is known.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    /// The current view box, once the natural size is known.
    #[must_use]
    pub fn geometry(&self) -> Option<&MinimapGeometry> {
        self.geometry.as_ref()
    }

    /// The zoom slider.
    #[must_use]
    pub fn slider(&self) -> &ZoomSlider {
        &self.slider
    }

    /// Re-ranges the slider to `limits`, showing `scale`.
    pub fn set_limits(&mut self, limits: ScaleLimits, scale: f64) {
        self.slider = ZoomSlider::new(limits, scale);
    }

    /// Brings every widget in line with `state`.
    ///
    /// The slider is always synced. When `natural` is unknown the thumbnail
    /// and view box are left as they are; a later call with a known size
    /// fills them in.
    pub fn sync(&mut self, state: &ViewportState, natural: Option<Size>, viewport: Size) {
        self.slider.sync(state.scale);

        let Some(natural) = natural else {
            tracing::trace!("natural size unknown, minimap geometry skipped");
            return;
        };
        if self.thumbnail.is_none_or(|t| t.natural != natural) {
            self.thumbnail = Thumbnail::fit(natural, self.map_size);
        }
        if let Some(geometry) = recompute_geometry(state, natural, viewport, self.map_size) {
            self.geometry = Some(geometry);
        }
    }

    /// The user moved the slider to `percent`.
    pub fn slider_input(&mut self, percent: f64) -> MinimapCommand {
        MinimapCommand::SetScale(self.slider.input(percent))
    }

    /// The user clicked one of the zoom buttons.
    #[must_use]
    pub fn button_clicked(&self, button: ZoomButton) -> MinimapCommand {
        match button {
            ZoomButton::ZoomOut => MinimapCommand::ZoomBy(-self.zoom_step),
            ZoomButton::ZoomIn => MinimapCommand::ZoomBy(self.zoom_step),
        }
    }
}
