// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Minimap: a proportional overview of the viewed image.
//!
//! The minimap shows a thumbnail of the whole image inside a fixed square and
//! overlays a "view box": the part of the image currently visible in the real
//! viewport. It also carries a zoom slider and two zoom buttons.
//!
//! The minimap is a passive observer of a
//! [`ViewportController`](loupe_viewport::ViewportController): it pulls the
//! current [`ViewportState`](loupe_viewport::ViewportState) in
//! [`MinimapView::sync`] and only ever writes back by producing a
//! [`MinimapCommand`] for the controller's owner to route.
//!
//! ## View box geometry
//!
//! For scale `s`, natural size `(W, H)`, viewport `(w, h)` and map side `m`:
//!
//! - visible fraction `vw = w / (W·s)`, `vh = h / (H·s)`;
//! - box size `min(1, vw)·m` by `min(1, vh)·m`;
//! - travel `maxX = (W·s − w) / 2`, normalized offset `nx = tx / maxX`
//!   (`0` when `maxX` is zero);
//! - `left = m/2 − boxW/2 − nx·m/2`, `top` likewise.
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use loupe_minimap::{DEFAULT_MAP_SIZE, recompute_geometry};
//! use loupe_viewport::ViewportState;
//!
//! let state = ViewportState::new(2.0, Vec2::ZERO);
//! let geom = recompute_geometry(
//!     &state,
//!     Size::new(2000.0, 1000.0),
//!     Size::new(800.0, 600.0),
//!     DEFAULT_MAP_SIZE,
//! )
//! .unwrap();
//! assert!((geom.width() - 16.0).abs() < 1e-9);
//! assert!((geom.height() - 24.0).abs() < 1e-9);
//! ```

mod geometry;
mod slider;
mod view;

pub use geometry::{DEFAULT_MAP_SIZE, MinimapGeometry, Thumbnail, recompute_geometry};
pub use slider::ZoomSlider;
pub use view::{MinimapCommand, MinimapView, ZoomButton};
