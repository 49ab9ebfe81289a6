// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe: a pan/zoom image viewer with a synchronized minimap.
//!
//! This crate puts the Loupe kernels together behind a single [`Viewer`]:
//!
//! - [`loupe_viewport`] owns the scale and translation and the input modes;
//! - [`loupe_input`] decodes [`ui_events`] keyboard and pointer events;
//! - [`loupe_minimap`] derives the overview and its zoom widgets.
//!
//! Everything platform specific sits behind two traits. A [`ViewerHost`] is
//! the image element and its window: it receives transforms, cursors and
//! minimap updates. An [`ImageLocator`] finds the element to attach to.
//! The minimap on/off flag is persisted through a [`PreferenceStore`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use loupe::{ImageTransform, MemoryPreferenceStore, Viewer, ViewerConfig, ViewerHost};
//!
//! #[derive(Default)]
//! struct Image {
//!     transform: Option<ImageTransform>,
//! }
//!
//! impl ViewerHost for Image {
//!     fn natural_size(&self) -> Option<Size> {
//!         Some(Size::new(2000.0, 1000.0))
//!     }
//!     fn is_complete(&self) -> bool {
//!         true
//!     }
//!     fn viewport_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//!     fn set_transform(&mut self, transform: ImageTransform) {
//!         self.transform = Some(transform);
//!     }
//!     fn dismiss(&mut self) {}
//! }
//!
//! let mut viewer = Viewer::new(Image::default(), ViewerConfig::default());
//! viewer.load_preferences(&MemoryPreferenceStore::new());
//! viewer.minimap_slider_input(200.0);
//!
//! let transform = viewer.host().transform.unwrap();
//! assert_eq!(transform.to_string(), "translate(0px, 0px) scale(2)");
//!
//! let view_box = viewer.minimap().unwrap().geometry().unwrap();
//! assert!((view_box.width() - 16.0).abs() < 1e-9);
//! assert!((view_box.height() - 24.0).abs() < 1e-9);
//! ```
//!
//! ## Logging
//!
//! The crates emit [`tracing`] events and never install a subscriber:
//! `trace` for every applied transform, `debug` for mode changes, clamping,
//! minimap visibility and dismissal, `warn` for preference failures.

mod config;
mod error;
mod host;
mod preferences;
mod surface;
mod viewer;

pub use config::{DEFAULT_PREFERENCE_KEY, DEFAULT_TARGET_ID, ViewerConfig};
pub use error::{PreferenceError, Result, ViewerError};
pub use host::{ImageLocator, ViewerHost};
pub use preferences::{
    MemoryPreferenceStore, PreferenceChange, PreferenceStore, PreferenceToggle, StorageArea,
};
pub use surface::ViewerSurface;
pub use viewer::Viewer;

pub use cursor_icon::CursorIcon;
pub use loupe_input::{Dispatch, InputBindings, ViewerInput};
pub use loupe_minimap::{MinimapCommand, MinimapView, ZoomButton};
pub use loupe_viewport::{ImageTransform, InputMode, ScaleLimits, ViewportState};
