// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input encoder for mapping user input events to viewport transitions.
//!
//! This crate turns [`ui_events`] keyboard and pointer events into the named
//! transitions of a [`ViewportController`]. It works in two steps:
//!
//! 1. **Decode**: [`InputBindings`] recognizes the handful of gestures the
//!    viewer reacts to and produces a [`ViewerInput`]. Everything else is left
//!    alone, so ordinary page scrolling and typing are not hijacked.
//! 2. **Dispatch**: [`dispatch`] feeds a [`ViewerInput`] into the controller
//!    and reports what the host should do with the original event.
//!
//! [`InputEncoder`] bundles both steps.
//!
//! ## Default bindings
//!
//! | Input                          | Effect                                  |
//! |--------------------------------|-----------------------------------------|
//! | Space down / up                | enter / leave pan mode                  |
//! | Escape down                    | reset to the identity transform         |
//! | Primary press in pan mode      | start a drag                            |
//! | Primary press outside pan mode | dismiss the viewer                      |
//! | Pointer move while dragging    | pan                                     |
//! | Primary release                | end the drag                            |
//! | Alt + wheel                    | zoom by ±0.1 per tick                   |
//!
//! ## Dispatching synthetic input
//!
//! Decoded input is plain data, so the whole state machine can be driven
//! without a windowing system:
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_input::{Dispatch, ViewerInput, dispatch};
//! use loupe_viewport::ViewportController;
//!
//! let mut vp = ViewportController::new(());
//!
//! // A press outside pan mode is a dismiss request.
//! assert_eq!(
//!     dispatch(&mut vp, ViewerInput::PointerDown(Point::new(5.0, 5.0))),
//!     Dispatch::Dismiss
//! );
//!
//! for input in [
//!     ViewerInput::PanKeyDown,
//!     ViewerInput::PointerDown(Point::new(100.0, 100.0)),
//!     ViewerInput::PointerMove(Point::new(150.0, 120.0)),
//!     ViewerInput::PointerUp,
//!     ViewerInput::PanKeyUp,
//! ] {
//!     assert_eq!(dispatch(&mut vp, input), Dispatch::Handled);
//! }
//! assert_eq!(vp.translation(), Vec2::new(50.0, 20.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use loupe_viewport::{DEFAULT_ZOOM_STEP, PointerDown, TransformSurface, ViewportController};
use ui_events::{
    ScrollDelta,
    keyboard::{Code, Key, KeyState, KeyboardEvent, Modifiers, NamedKey},
    pointer::{PointerButton, PointerButtonEvent, PointerEvent, PointerScrollEvent},
};

/// A gesture the viewer reacts to, decoded from a raw event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerInput {
    /// The pan key went down.
    PanKeyDown,
    /// The pan key went up.
    PanKeyUp,
    /// The reset key was pressed.
    Reset,
    /// The primary pointer button went down at a logical position.
    PointerDown(Point),
    /// The pointer moved to a logical position.
    PointerMove(Point),
    /// The primary pointer button went up.
    PointerUp,
    /// Change the scale by this delta.
    Zoom(f64),
}

/// What the host should do with the event after [`dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The viewer did not use the event; let it through.
    Ignored,
    /// The viewer used the event; suppress the default action.
    Handled,
    /// A press outside pan mode; the host should close the viewer.
    Dismiss,
}

/// Which raw inputs map to which [`ViewerInput`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputBindings {
    /// Physical key that enables panning while held.
    pub pan_code: Code,
    /// Logical key that resets the transform.
    pub reset_key: Key,
    /// Modifiers that must be held for the wheel to zoom.
    pub zoom_modifiers: Modifiers,
    /// Scale change per wheel tick.
    pub zoom_step: f64,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            pan_code: Code::Space,
            reset_key: Key::Named(NamedKey::Escape),
            zoom_modifiers: Modifiers::ALT,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl InputBindings {
    /// Sets the scale change per wheel tick.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = step;
        self
    }

    /// Decodes a keyboard event.
    #[must_use]
    pub fn decode_keyboard(&self, event: &KeyboardEvent) -> Option<ViewerInput> {
        if event.code == self.pan_code {
            return Some(match event.state {
                KeyState::Down => ViewerInput::PanKeyDown,
                KeyState::Up => ViewerInput::PanKeyUp,
            });
        }
        if event.key == self.reset_key && event.state.is_down() {
            return Some(ViewerInput::Reset);
        }
        None
    }

    /// Decodes a pointer event.
    ///
    /// Only the primary button takes part. Scrolling zooms only with
    /// [`zoom_modifiers`](Self::zoom_modifiers) held and a non-zero vertical
    /// component; scrolling up (negative delta) zooms in.
    #[must_use]
    pub fn decode_pointer(&self, event: &PointerEvent) -> Option<ViewerInput> {
        match event {
            PointerEvent::Down(e) if is_primary(e) => {
                Some(ViewerInput::PointerDown(e.state.logical_point()))
            }
            PointerEvent::Up(e) if is_primary(e) => Some(ViewerInput::PointerUp),
            PointerEvent::Move(e) => Some(ViewerInput::PointerMove(e.current.logical_point())),
            PointerEvent::Scroll(e) => self.decode_scroll(e),
            _ => None,
        }
    }

    fn decode_scroll(&self, event: &PointerScrollEvent) -> Option<ViewerInput> {
        if !event.state.modifiers.contains(self.zoom_modifiers) {
            return None;
        }
        let dy = match &event.delta {
            ScrollDelta::PixelDelta(pos) => pos.y,
            ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
        };
        if dy == 0.0 || dy.is_nan() {
            return None;
        }
        Some(ViewerInput::Zoom(zoom_for_scroll(dy, self.zoom_step)))
    }
}

/// One zoom step per wheel event, in the direction of the scroll.
///
/// The step does not depend on the scroll magnitude.
#[must_use]
pub fn zoom_for_scroll(delta_y: f64, step: f64) -> f64 {
    if delta_y < 0.0 { step } else { -step }
}

fn is_primary(event: &PointerButtonEvent) -> bool {
    matches!(event.button, None | Some(PointerButton::Primary))
}

/// Feeds one decoded input into `controller`.
pub fn dispatch<S: TransformSurface>(
    controller: &mut ViewportController<S>,
    input: ViewerInput,
) -> Dispatch {
    match input {
        ViewerInput::PanKeyDown => {
            controller.space_down();
            Dispatch::Handled
        }
        ViewerInput::PanKeyUp => {
            controller.space_up();
            Dispatch::Handled
        }
        ViewerInput::Reset => {
            controller.reset();
            Dispatch::Handled
        }
        ViewerInput::PointerDown(pos) => match controller.pointer_down(pos) {
            PointerDown::Drag | PointerDown::Ignored => Dispatch::Handled,
            PointerDown::Dismiss => {
                tracing::debug!("press outside pan mode, dismissing");
                Dispatch::Dismiss
            }
        },
        ViewerInput::PointerMove(pos) => {
            if !controller.mode().is_dragging() {
                return Dispatch::Ignored;
            }
            controller.drag_to(pos);
            Dispatch::Handled
        }
        ViewerInput::PointerUp => {
            if !controller.mode().is_dragging() {
                return Dispatch::Ignored;
            }
            controller.pointer_up();
            Dispatch::Handled
        }
        ViewerInput::Zoom(delta) => {
            controller.zoom_by(delta);
            Dispatch::Handled
        }
    }
}

/// Input event processor with binding configuration.
///
/// This type holds the bindings without owning the controller; events are
/// applied to a controller passed by mutable reference.
#[derive(Clone, Debug, Default)]
pub struct InputEncoder {
    /// Input bindings.
    pub bindings: InputBindings,
}

impl InputEncoder {
    /// Create a new encoder with the given bindings.
    #[must_use]
    pub fn new(bindings: InputBindings) -> Self {
        Self { bindings }
    }

    /// Process a pointer event and apply the resulting transition, if any.
    pub fn encode<S: TransformSurface>(
        &self,
        event: &PointerEvent,
        controller: &mut ViewportController<S>,
    ) -> Dispatch {
        match self.bindings.decode_pointer(event) {
            Some(input) => dispatch(controller, input),
            None => Dispatch::Ignored,
        }
    }

    /// Process a keyboard event and apply the resulting transition, if any.
    pub fn encode_keyboard<S: TransformSurface>(
        &self,
        event: &KeyboardEvent,
        controller: &mut ViewportController<S>,
    ) -> Dispatch {
        match self.bindings.decode_keyboard(event) {
            Some(input) => dispatch(controller, input),
            None => Dispatch::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::vec::Vec;
    use dpi::PhysicalPosition;
    use kurbo::Vec2;
    use loupe_viewport::InputMode;
    use ui_events::pointer::{PointerInfo, PointerState, PointerType, PointerUpdate};

    fn mouse() -> PointerInfo {
        PointerInfo {
            pointer_id: None,
            persistent_device_id: None,
            pointer_type: PointerType::Mouse,
        }
    }

    fn state_at(x: f64, y: f64, modifiers: Modifiers) -> PointerState {
        PointerState {
            position: PhysicalPosition::new(x, y),
            modifiers,
            ..PointerState::default()
        }
    }

    fn button(down: bool, button: Option<PointerButton>) -> PointerEvent {
        let event = PointerButtonEvent {
            button,
            pointer: mouse(),
            state: state_at(10.0, 20.0, Modifiers::empty()),
        };
        if down {
            PointerEvent::Down(event)
        } else {
            PointerEvent::Up(event)
        }
    }

    fn scroll(delta: ScrollDelta, modifiers: Modifiers) -> PointerEvent {
        PointerEvent::Scroll(PointerScrollEvent {
            pointer: mouse(),
            delta,
            state: state_at(0.0, 0.0, modifiers),
        })
    }

    fn key(code: Code, key: Key, state: KeyState) -> KeyboardEvent {
        KeyboardEvent {
            code,
            key,
            state,
            ..KeyboardEvent::default()
        }
    }

    #[test]
    fn space_toggles_pan_mode() {
        let bindings = InputBindings::default();
        let down = key(Code::Space, Key::Character(" ".into()), KeyState::Down);
        let up = key(Code::Space, Key::Character(" ".into()), KeyState::Up);
        assert_eq!(bindings.decode_keyboard(&down), Some(ViewerInput::PanKeyDown));
        assert_eq!(bindings.decode_keyboard(&up), Some(ViewerInput::PanKeyUp));
    }

    #[test]
    fn escape_resets_on_key_down_only() {
        let bindings = InputBindings::default();
        let escape = Key::Named(NamedKey::Escape);
        let down = key(Code::Escape, escape.clone(), KeyState::Down);
        let up = key(Code::Escape, escape, KeyState::Up);
        assert_eq!(bindings.decode_keyboard(&down), Some(ViewerInput::Reset));
        assert_eq!(bindings.decode_keyboard(&up), None);
    }

    #[test]
    fn other_keys_are_not_decoded() {
        let bindings = InputBindings::default();
        let a = key(Code::KeyA, Key::Character("a".into()), KeyState::Down);
        assert_eq!(bindings.decode_keyboard(&a), None);
    }

    #[test]
    fn encoder_routes_keyboard_into_controller() {
        let encoder = InputEncoder::default();
        let mut vp = ViewportController::new(());
        let down = key(Code::Space, Key::Character(" ".into()), KeyState::Down);
        assert_eq!(encoder.encode_keyboard(&down, &mut vp), Dispatch::Handled);
        assert_eq!(vp.mode(), InputMode::SpaceHeld);

        let a = key(Code::KeyA, Key::Character("a".into()), KeyState::Down);
        assert_eq!(encoder.encode_keyboard(&a, &mut vp), Dispatch::Ignored);
    }

    #[test]
    fn alt_wheel_zooms_in_both_directions() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.decode_pointer(&scroll(ScrollDelta::LineDelta(0.0, -1.0), Modifiers::ALT)),
            Some(ViewerInput::Zoom(0.1))
        );
        assert_eq!(
            bindings.decode_pointer(&scroll(ScrollDelta::LineDelta(0.0, 3.0), Modifiers::ALT)),
            Some(ViewerInput::Zoom(-0.1))
        );
        let pixels = ScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -120.0));
        assert_eq!(
            bindings.decode_pointer(&scroll(pixels, Modifiers::ALT | Modifiers::SHIFT)),
            Some(ViewerInput::Zoom(0.1))
        );
    }

    #[test]
    fn wheel_without_alt_or_vertical_motion_is_not_decoded() {
        let bindings = InputBindings::default();
        let down = ScrollDelta::LineDelta(0.0, 1.0);
        assert_eq!(bindings.decode_pointer(&scroll(down, Modifiers::empty())), None);
        assert_eq!(bindings.decode_pointer(&scroll(down, Modifiers::CONTROL)), None);
        let sideways = ScrollDelta::PixelDelta(PhysicalPosition::new(40.0, 0.0));
        assert_eq!(bindings.decode_pointer(&scroll(sideways, Modifiers::ALT)), None);
    }

    #[test]
    fn only_primary_button_is_decoded() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.decode_pointer(&button(true, Some(PointerButton::Primary))),
            Some(ViewerInput::PointerDown(Point::new(10.0, 20.0)))
        );
        // Touch and pen contacts may not report a button.
        assert_eq!(
            bindings.decode_pointer(&button(true, None)),
            Some(ViewerInput::PointerDown(Point::new(10.0, 20.0)))
        );
        assert_eq!(
            bindings.decode_pointer(&button(true, Some(PointerButton::Secondary))),
            None
        );
        assert_eq!(
            bindings.decode_pointer(&button(false, Some(PointerButton::Secondary))),
            None
        );
        assert_eq!(
            bindings.decode_pointer(&button(false, Some(PointerButton::Primary))),
            Some(ViewerInput::PointerUp)
        );
    }

    #[test]
    fn encoder_pans_with_pointer_events() {
        let encoder = InputEncoder::default();
        let mut vp = ViewportController::new(());
        vp.space_down();
        assert_eq!(
            encoder.encode(&button(true, Some(PointerButton::Primary)), &mut vp),
            Dispatch::Handled
        );
        let update = PointerEvent::Move(PointerUpdate {
            pointer: mouse(),
            current: state_at(35.0, 5.0, Modifiers::empty()),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        });
        assert_eq!(encoder.encode(&update, &mut vp), Dispatch::Handled);
        assert_eq!(vp.translation(), Vec2::new(25.0, -15.0));
        assert_eq!(
            encoder.encode(&button(false, Some(PointerButton::Primary)), &mut vp),
            Dispatch::Handled
        );
        assert_eq!(vp.mode(), InputMode::SpaceHeld);
    }

    #[test]
    fn scroll_direction_picks_zoom_sign() {
        assert_eq!(zoom_for_scroll(-120.0, 0.1), 0.1);
        assert_eq!(zoom_for_scroll(3.0, 0.1), -0.1);
    }

    #[test]
    fn moves_outside_a_drag_are_ignored() {
        let mut vp = ViewportController::new(());
        assert_eq!(
            dispatch(&mut vp, ViewerInput::PointerMove(Point::new(10.0, 10.0))),
            Dispatch::Ignored
        );
        assert_eq!(dispatch(&mut vp, ViewerInput::PointerUp), Dispatch::Ignored);
        assert_eq!(vp.translation(), Vec2::ZERO);
    }

    #[test]
    fn wheel_zoom_saturates() {
        let mut vp = ViewportController::new(());
        for _ in 0..100 {
            dispatch(&mut vp, ViewerInput::Zoom(-0.1));
        }
        assert_eq!(vp.scale(), 0.2);
    }

    #[test]
    fn reset_during_drag_keeps_mode() {
        let mut vp = ViewportController::new(());
        dispatch(&mut vp, ViewerInput::PanKeyDown);
        dispatch(&mut vp, ViewerInput::PointerDown(Point::new(0.0, 0.0)));
        dispatch(&mut vp, ViewerInput::PointerMove(Point::new(20.0, 0.0)));
        dispatch(&mut vp, ViewerInput::Reset);
        assert_eq!(vp.translation(), Vec2::ZERO);
        assert_eq!(vp.mode(), InputMode::Dragging);
    }
}
