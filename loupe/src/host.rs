// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cursor_icon::CursorIcon;
use kurbo::Size;
use loupe_minimap::MinimapView;
use loupe_viewport::ImageTransform;

/// The displayed image and the window around it.
///
/// The viewer only ever pushes state into the host; it never asks the host
/// to compute anything beyond the sizes below.
pub trait ViewerHost {
    /// Intrinsic size of the image, or `None` while it is unknown.
    fn natural_size(&self) -> Option<Size>;

    /// Whether the image has finished loading.
    fn is_complete(&self) -> bool;

    /// Size of the window the image is shown in.
    fn viewport_size(&self) -> Size;

    /// Applies a transform to the image element, about its center.
    fn set_transform(&mut self, transform: ImageTransform);

    /// Changes the cursor shown over the image.
    fn set_cursor(&mut self, cursor: CursorIcon) {
        let _ = cursor;
    }

    /// The minimap was shown, updated or hidden (`None`).
    fn minimap_changed(&mut self, minimap: Option<&MinimapView>) {
        let _ = minimap;
    }

    /// Closes the viewer.
    fn dismiss(&mut self);

    /// Called once when a viewer attaches, before anything is rendered.
    ///
    /// Hosts put the transform origin at the image center here.
    fn prepare(&mut self) {}
}

/// Finds the image a viewer attaches to.
pub trait ImageLocator {
    /// Host type produced for a found element.
    type Host: ViewerHost;

    /// Looks up the element with id `id`.
    fn locate(&mut self, id: &str) -> Option<Self::Host>;
}
