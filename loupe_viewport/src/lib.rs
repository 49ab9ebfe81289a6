// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Viewport: pan/zoom state machine for a single viewed image.
//!
//! This crate provides a small, headless model of an image viewer's
//! transform. It focuses on:
//! - The authoritative pan/zoom state ([`ViewportState`]): a uniform scale
//!   about the image center plus an unbounded translation.
//! - Scale limits that saturate rather than fail ([`ScaleLimits`]).
//! - The pan-key/drag state machine ([`InputMode`]) with named transition
//!   methods on [`ViewportController`].
//! - Synchronous render + notify after every change ([`TransformSurface`]).
//!
//! It does **not** own the image element, the window, or any widget.
//! Callers are expected to:
//! - Implement [`TransformSurface`] to push transforms onto their image and
//!   update observers such as a minimap.
//! - Decode raw input events into the transition methods at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_viewport::{InputMode, PointerDown, ViewportController};
//!
//! // `()` is a surface that renders nowhere.
//! let mut vp = ViewportController::new(());
//!
//! // Wheel or button zoom saturates at the limits.
//! for _ in 0..100 {
//!     vp.zoom_by(0.1);
//! }
//! assert_eq!(vp.scale(), 5.0);
//!
//! // Hold the pan key and drag.
//! vp.space_down();
//! assert_eq!(vp.pointer_down(Point::new(100.0, 100.0)), PointerDown::Drag);
//! vp.drag_to(Point::new(150.0, 120.0));
//! vp.pointer_up();
//! assert_eq!(vp.translation(), Vec2::new(50.0, 20.0));
//! assert_eq!(vp.mode(), InputMode::SpaceHeld);
//!
//! // Escape.
//! vp.reset();
//! assert_eq!(vp.scale(), 1.0);
//! assert_eq!(vp.translation(), Vec2::ZERO);
//! ```
//!
//! ## Design notes
//!
//! - Scale is applied about the image's own center, not the pointer; zooming
//!   while panned moves the apparent focal point.
//! - Translation is never clamped; the image can be panned fully off-screen.
//! - Rotation and non-uniform scale are out of scope.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod limits;
mod mode;
mod state;

pub use controller::{PointerDown, TransformSurface, ViewportController};
pub use limits::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP, ScaleLimits};
pub use mode::{DragAnchor, InputMode};
pub use state::{ImageTransform, ViewportState};
