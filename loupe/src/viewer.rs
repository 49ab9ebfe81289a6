// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_input::{Dispatch, InputEncoder, ViewerInput, dispatch};
use loupe_minimap::{MinimapView, ZoomButton};
use loupe_viewport::{ScaleLimits, ViewportController, ViewportState};
use ui_events::keyboard::KeyboardEvent;
use ui_events::pointer::PointerEvent;

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::host::{ImageLocator, ViewerHost};
use crate::preferences::{PreferenceChange, PreferenceStore};
use crate::surface::ViewerSurface;

/// A pan/zoom viewer attached to one image.
///
/// The viewer owns its [`ViewportController`] and routes everything that can
/// change the transform through it: decoded input, minimap widgets, and
/// resets. Several viewers can live side by side; none of them share state.
#[derive(Clone, Debug)]
pub struct Viewer<H> {
    controller: ViewportController<ViewerSurface<H>>,
    encoder: InputEncoder,
    config: ViewerConfig,
}

impl<H: ViewerHost> Viewer<H> {
    /// Finds the image named by `config.target_id` and attaches to it.
    ///
    /// Fails with [`ViewerError::MissingTarget`] when the element does not
    /// exist, and with [`ViewerError::Config`] when `config` is invalid.
    pub fn attach<L>(locator: &mut L, config: ViewerConfig) -> Result<Self>
    where
        L: ImageLocator<Host = H>,
    {
        config.validate()?;
        let Some(host) = locator.locate(&config.target_id) else {
            tracing::debug!(target_id = %config.target_id, "no image to attach to");
            return Err(ViewerError::MissingTarget(config.target_id));
        };
        Ok(Self::new(host, config))
    }

    /// Attaches to an already located image.
    ///
    /// If the image has finished loading the transform is applied right
    /// away; otherwise the host calls [`on_image_load`](Self::on_image_load)
    /// later.
    ///
    /// Unlike [`attach`](Self::attach) this cannot fail: an invalid `config`
    /// is logged, and out-of-range scale bounds fall back to the defaults.
    pub fn new(mut host: H, config: ViewerConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "invalid viewer configuration");
        }
        host.prepare();
        let surface = ViewerSurface::new(host);
        let controller = ViewportController::with_limits(surface, config.limits());
        let mut viewer = Self {
            controller,
            encoder: InputEncoder::new(config.bindings()),
            config,
        };
        tracing::debug!(target_id = %viewer.config.target_id, "viewer attached");
        if viewer.host().is_complete() {
            viewer.controller.apply();
        }
        viewer
    }

    /// The image finished loading; applies the current transform.
    pub fn on_image_load(&mut self) {
        self.controller.apply();
    }

    /// Feeds a keyboard event; see [`InputEncoder::encode_keyboard`].
    pub fn handle_keyboard(&mut self, event: &KeyboardEvent) -> Dispatch {
        let outcome = self.encoder.encode_keyboard(event, &mut self.controller);
        self.finish(outcome)
    }

    /// Feeds a pointer event; see [`InputEncoder::encode`].
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Dispatch {
        let outcome = self.encoder.encode(event, &mut self.controller);
        self.finish(outcome)
    }

    /// Feeds an already decoded input.
    pub fn handle_input(&mut self, input: ViewerInput) -> Dispatch {
        let outcome = dispatch(&mut self.controller, input);
        self.finish(outcome)
    }

    fn finish(&mut self, outcome: Dispatch) -> Dispatch {
        if outcome == Dispatch::Dismiss {
            self.controller.surface_mut().host_mut().dismiss();
        }
        outcome
    }

    /// Shows or hides the minimap.
    ///
    /// A newly shown minimap is built from the current state, so it never
    /// shows a stale view box. Hiding drops it entirely.
    pub fn set_minimap_enabled(&mut self, enabled: bool) {
        if enabled == self.is_minimap_enabled() {
            return;
        }
        if enabled {
            let map = MinimapView::new(
                self.config.map_size,
                self.controller.limits(),
                self.config.zoom_step,
            );
            let state = self.controller.state();
            self.controller.surface_mut().show_minimap(map, &state);
            tracing::debug!("minimap shown");
        } else if self.controller.surface_mut().hide_minimap() {
            tracing::debug!("minimap hidden");
        }
    }

    /// Whether the minimap is shown.
    #[must_use]
    pub fn is_minimap_enabled(&self) -> bool {
        self.minimap().is_some()
    }

    /// The minimap, if shown.
    #[must_use]
    pub fn minimap(&self) -> Option<&MinimapView> {
        self.controller.surface().minimap()
    }

    /// The user moved the minimap slider to `percent`.
    pub fn minimap_slider_input(&mut self, percent: f64) {
        let Some(map) = self.controller.surface_mut().minimap_mut() else {
            return;
        };
        let command = map.slider_input(percent);
        command.apply_to(&mut self.controller);
    }

    /// The user clicked the minimap zoom-in button.
    pub fn minimap_zoom_in(&mut self) {
        self.minimap_button(ZoomButton::ZoomIn);
    }

    /// The user clicked the minimap zoom-out button.
    pub fn minimap_zoom_out(&mut self) {
        self.minimap_button(ZoomButton::ZoomOut);
    }

    fn minimap_button(&mut self, button: ZoomButton) {
        let Some(map) = self.minimap() else {
            return;
        };
        let command = map.button_clicked(button);
        command.apply_to(&mut self.controller);
    }

    /// The window was resized; refreshes the minimap view box.
    ///
    /// The minimap always reads the current window size from the host, so
    /// this only matters when nothing else changes the transform afterwards.
    pub fn resize(&mut self) {
        let state = self.controller.state();
        self.controller.surface_mut().refresh_minimap(&state);
    }

    /// Replaces the scale limits.
    ///
    /// The current scale is clamped into the new range and an open minimap
    /// slider is re-ranged to match.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.controller.set_limits(limits);
        let state = self.controller.state();
        self.controller.surface_mut().set_minimap_limits(limits, &state);
    }

    /// Reads the minimap flag from `store` and shows or hides the minimap.
    ///
    /// A failing store is logged and the configured default is used.
    /// Returns the flag that was applied.
    pub fn load_preferences(&mut self, store: &impl PreferenceStore) -> bool {
        let default = self.config.show_minimap_default;
        let enabled = store
            .get_bool(
                self.config.preference_area,
                &self.config.preference_key,
                default,
            )
            .unwrap_or_else(|err| {
                tracing::warn!(
                    key = %self.config.preference_key,
                    error = %err,
                    "failed to read minimap preference, using default"
                );
                default
            });
        self.set_minimap_enabled(enabled);
        enabled
    }

    /// Reacts to a preference change delivered by the host.
    ///
    /// Changes to other keys or areas are ignored. A removed flag hides the
    /// minimap. Returns whether the change was relevant.
    pub fn on_preference_changed(&mut self, change: &PreferenceChange) -> bool {
        if change.area != self.config.preference_area || change.key != self.config.preference_key
        {
            return false;
        }
        self.set_minimap_enabled(change.new_value.unwrap_or(false));
        true
    }

    /// The controller driving this viewer.
    #[must_use]
    pub fn controller(&self) -> &ViewportController<ViewerSurface<H>> {
        &self.controller
    }

    /// The current viewport state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.controller.state()
    }

    /// The configuration this viewer was built with.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        self.controller.surface().host()
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        self.controller.surface_mut().host_mut()
    }

    /// Detaches from the image, hiding the minimap and returning the host.
    pub fn detach(mut self) -> H {
        self.set_minimap_enabled(false);
        tracing::debug!(target_id = %self.config.target_id, "viewer detached");
        self.controller.into_surface().into_host()
    }
}
