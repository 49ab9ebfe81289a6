// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_minimap::MinimapView;
use loupe_viewport::{InputMode, ScaleLimits, TransformSurface, ViewportState};

use crate::host::ViewerHost;

/// The [`TransformSurface`] a [`Viewer`](crate::Viewer) renders into.
///
/// Rendering goes to the host; the optional minimap is re-synced after every
/// render against the host's current window size, and the host is told
/// about it.
#[derive(Clone, Debug)]
pub struct ViewerSurface<H> {
    host: H,
    minimap: Option<MinimapView>,
}

impl<H: ViewerHost> ViewerSurface<H> {
    pub(crate) fn new(host: H) -> Self {
        Self {
            host,
            minimap: None,
        }
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The minimap, if shown.
    #[must_use]
    pub fn minimap(&self) -> Option<&MinimapView> {
        self.minimap.as_ref()
    }

    pub(crate) fn minimap_mut(&mut self) -> Option<&mut MinimapView> {
        self.minimap.as_mut()
    }

    pub(crate) fn show_minimap(&mut self, minimap: MinimapView, state: &ViewportState) {
        self.minimap = Some(minimap);
        self.sync_minimap(state);
    }

    pub(crate) fn hide_minimap(&mut self) -> bool {
        if self.minimap.take().is_none() {
            return false;
        }
        self.host.minimap_changed(None);
        true
    }

    pub(crate) fn refresh_minimap(&mut self, state: &ViewportState) {
        self.sync_minimap(state);
    }

    pub(crate) fn set_minimap_limits(&mut self, limits: ScaleLimits, state: &ViewportState) {
        let Some(map) = self.minimap.as_mut() else {
            return;
        };
        map.set_limits(limits, state.scale);
        self.sync_minimap(state);
    }

    pub(crate) fn into_host(self) -> H {
        self.host
    }

    fn sync_minimap(&mut self, state: &ViewportState) {
        let Some(map) = self.minimap.as_mut() else {
            return;
        };
        map.sync(state, self.host.natural_size(), self.host.viewport_size());
        self.host.minimap_changed(Some(&*map));
    }
}

impl<H: ViewerHost> TransformSurface for ViewerSurface<H> {
    fn render(&mut self, state: &ViewportState) {
        self.host.set_transform(state.image_transform());
    }

    fn transform_changed(&mut self, state: &ViewportState) {
        self.sync_minimap(state);
    }

    fn mode_changed(&mut self, mode: InputMode) {
        self.host.set_cursor(mode.cursor());
    }
}
