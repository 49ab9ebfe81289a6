// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-mode state: whether the pan key is held and whether a drag is active.
//!
//! ## Transitions
//!
//! - `Idle → SpaceHeld` when the pan key goes down.
//! - `SpaceHeld → Dragging` when the pointer goes down while the key is held.
//! - `Dragging → SpaceHeld` when the pointer goes up.
//! - `SpaceHeld | Dragging → Idle` when the pan key goes up.

use cursor_icon::CursorIcon;
use kurbo::{Point, Vec2};

/// Interaction mode of a [`crate::ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    /// No modifier held; a pointer press dismisses the viewer.
    #[default]
    Idle,
    /// The pan key is held; a pointer press starts a drag.
    SpaceHeld,
    /// A pan drag is in progress.
    Dragging,
}

impl InputMode {
    /// Returns `true` while the pan key is held, dragging or not.
    #[must_use]
    pub fn is_pan_key_held(self) -> bool {
        matches!(self, Self::SpaceHeld | Self::Dragging)
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == Self::Dragging
    }

    /// Cursor to show over the image in this mode.
    #[must_use]
    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::Idle => CursorIcon::Pointer,
            Self::SpaceHeld => CursorIcon::Grab,
            Self::Dragging => CursorIcon::Grabbing,
        }
    }
}

/// Anchor of an active drag.
///
/// Stores the pointer position relative to the translation at drag start,
/// so each move can set the translation absolutely instead of accumulating
/// per-event deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragAnchor {
    offset: Option<Vec2>,
}

impl DragAnchor {
    /// Starts a drag at `pointer` with the image currently translated by `translation`.
    pub fn start(&mut self, pointer: Point, translation: Vec2) {
        self.offset = Some(pointer.to_vec2() - translation);
    }

    /// Returns the translation that keeps the grabbed image point under `pointer`.
    ///
    /// Returns `None` when no drag has been started.
    #[must_use]
    pub fn translation_at(&self, pointer: Point) -> Option<Vec2> {
        self.offset.map(|offset| pointer.to_vec2() - offset)
    }

    /// Forgets the anchor.
    pub fn end(&mut self) {
        self.offset = None;
    }

    /// Returns `true` while an anchor is recorded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.offset.is_some()
    }
}
