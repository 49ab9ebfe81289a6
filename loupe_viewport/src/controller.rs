// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::limits::ScaleLimits;
use crate::mode::{DragAnchor, InputMode};
use crate::state::ViewportState;

/// Receiver of everything a [`ViewportController`] produces.
///
/// [`render`](Self::render) pushes the transform onto the image and is always
/// followed by [`transform_changed`](Self::transform_changed), which is where
/// observers such as a minimap are updated. Both run synchronously inside the
/// mutating call.
pub trait TransformSurface {
    /// Pushes the visual transform for `state` onto the rendered image.
    fn render(&mut self, state: &ViewportState);

    /// Called after every [`render`](Self::render).
    fn transform_changed(&mut self, state: &ViewportState) {
        let _ = state;
    }

    /// Called when the [`InputMode`] changes.
    fn mode_changed(&mut self, mode: InputMode) {
        let _ = mode;
    }
}

impl TransformSurface for () {
    fn render(&mut self, _state: &ViewportState) {}
}

/// Result of a pointer press routed through [`ViewportController::pointer_down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerDown {
    /// The press started a pan drag.
    Drag,
    /// The press happened outside pan mode; the host should dismiss the viewer.
    Dismiss,
    /// The press was swallowed (for example a second press during a drag).
    Ignored,
}

/// Owner of the pan/zoom state of a single image.
///
/// `ViewportController` is the only writer of [`ViewportState`]. Every
/// operation that changes the state re-renders through its
/// [`TransformSurface`] before returning; there is no batching.
///
/// Operations called outside the mode they belong to (for example
/// [`drag_to`](Self::drag_to) without a prior [`begin_drag`](Self::begin_drag))
/// are no-ops.
#[derive(Clone, Debug)]
pub struct ViewportController<S> {
    state: ViewportState,
    limits: ScaleLimits,
    mode: InputMode,
    drag: DragAnchor,
    revision: u64,
    surface: S,
}

impl<S: TransformSurface> ViewportController<S> {
    /// Creates a controller at the identity transform with default scale limits.
    ///
    /// Nothing is rendered until [`apply`](Self::apply) is called, so the host
    /// can wait for the image to load first.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_limits(surface, ScaleLimits::DEFAULT)
    }

    /// Creates a controller at the identity transform with the given scale limits.
    ///
    /// The initial scale of `1.0` is clamped into `limits`.
    #[must_use]
    pub fn with_limits(surface: S, limits: ScaleLimits) -> Self {
        Self {
            state: ViewportState {
                scale: limits.clamp(1.0),
                translation: Vec2::ZERO,
            },
            limits,
            mode: InputMode::Idle,
            drag: DragAnchor::default(),
            revision: 0,
            surface,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.state.translation
    }

    /// Returns the current input mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Returns the scale limits.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Number of times the transform has been applied.
    ///
    /// Observers that poll instead of subscribing can compare revisions to
    /// detect a change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the scale limits, clamping the current scale into them.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
        self.set_scale(self.state.scale);
    }

    /// Sets the scale, clamping it into the configured limits.
    ///
    /// Does nothing if the clamped value equals the current scale or if
    /// `scale` is not finite. The comparison is exact, so a scale that has
    /// drifted just past a bound through repeated steps still snaps onto it.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = self.limits.clamp(scale);
        if clamped == self.state.scale {
            return;
        }
        if clamped != scale {
            tracing::debug!(requested = scale, clamped, "scale saturated");
        }
        self.state.scale = clamped;
        self.apply();
    }

    /// Changes the scale by `delta`, saturating at the limits.
    ///
    /// The scale is applied about the image center, so zooming while panned
    /// shifts which part of the image sits under the viewport center.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_scale(self.state.scale + delta);
    }

    /// The pan key went down.
    pub fn space_down(&mut self) {
        if self.mode == InputMode::Idle {
            self.set_mode(InputMode::SpaceHeld);
        }
    }

    /// The pan key went up; ends any drag in progress.
    pub fn space_up(&mut self) {
        if self.mode.is_pan_key_held() {
            self.drag.end();
            self.set_mode(InputMode::Idle);
        }
    }

    /// Routes a primary pointer press.
    pub fn pointer_down(&mut self, pointer: Point) -> PointerDown {
        match self.mode {
            InputMode::SpaceHeld => {
                self.begin_drag(pointer);
                PointerDown::Drag
            }
            InputMode::Dragging => PointerDown::Ignored,
            InputMode::Idle => PointerDown::Dismiss,
        }
    }

    /// Routes a primary pointer release.
    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    /// Starts a drag at `pointer`.
    ///
    /// Only valid while the pan key is held and no drag is active; returns
    /// whether a drag was started.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.mode != InputMode::SpaceHeld {
            return false;
        }
        self.drag.start(pointer, self.state.translation);
        self.set_mode(InputMode::Dragging);
        true
    }

    /// Moves the grabbed image point to `pointer`.
    ///
    /// Translation is not clamped.
    pub fn drag_to(&mut self, pointer: Point) {
        if self.mode != InputMode::Dragging {
            return;
        }
        let Some(translation) = self.drag.translation_at(pointer) else {
            return;
        };
        if translation == self.state.translation {
            return;
        }
        self.state.translation = translation;
        self.apply();
    }

    /// Ends the current drag, returning to [`InputMode::SpaceHeld`].
    pub fn end_drag(&mut self) {
        if self.mode != InputMode::Dragging {
            return;
        }
        self.drag.end();
        self.set_mode(InputMode::SpaceHeld);
    }

    /// Restores the identity transform and re-renders.
    pub fn reset(&mut self) {
        self.state = ViewportState {
            scale: self.limits.clamp(1.0),
            translation: Vec2::ZERO,
        };
        self.apply();
    }

    /// Renders the current state and notifies observers.
    pub fn apply(&mut self) {
        self.surface.render(&self.state);
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(
            scale = self.state.scale,
            tx = self.state.translation.x,
            ty = self.state.translation.y,
            revision = self.revision,
            "transform applied"
        );
        self.surface.transform_changed(&self.state);
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    ///
    /// Changes made through this reference do not touch the transform state.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the controller, returning its surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn set_mode(&mut self, mode: InputMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "input mode changed");
        self.mode = mode;
        self.surface.mode_changed(mode);
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use kurbo::{Point, Vec2};

    use super::{PointerDown, TransformSurface, ViewportController};
    use crate::{InputMode, ScaleLimits, ViewportState};

    #[derive(Debug, Default)]
    struct Recorder {
        rendered: Vec<ViewportState>,
        notified: usize,
        modes: Vec<InputMode>,
    }

    impl TransformSurface for Recorder {
        fn render(&mut self, state: &ViewportState) {
            self.rendered.push(*state);
        }

        fn transform_changed(&mut self, _state: &ViewportState) {
            self.notified += 1;
        }

        fn mode_changed(&mut self, mode: InputMode) {
            self.modes.push(mode);
        }
    }

    #[test]
    fn new_controller_does_not_render() {
        let vp = ViewportController::new(Recorder::default());
        assert_eq!(vp.state(), ViewportState::IDENTITY);
        assert_eq!(vp.revision(), 0);
        assert!(vp.surface().rendered.is_empty());
    }

    #[test]
    fn apply_renders_then_notifies() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.apply();
        vp.apply();
        assert_eq!(vp.surface().rendered.len(), 2);
        assert_eq!(vp.surface().notified, 2);
        assert_eq!(vp.revision(), 2);
    }

    #[test]
    fn unchanged_scale_has_no_side_effect() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.set_scale(1.0);
        assert!(vp.surface().rendered.is_empty());

        vp.set_scale(5.0);
        vp.set_scale(7.0);
        assert_eq!(vp.surface().rendered.len(), 1);
        assert_eq!(vp.scale(), 5.0);
    }

    #[test]
    fn non_finite_scale_is_ignored() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.set_scale(f64::NAN);
        vp.set_scale(f64::INFINITY);
        assert_eq!(vp.scale(), 1.0);
        assert!(vp.surface().rendered.is_empty());
    }

    #[test]
    fn set_limits_reclamps_current_scale() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.set_scale(4.0);
        vp.set_limits(ScaleLimits::new(0.5, 2.0));
        assert_eq!(vp.scale(), 2.0);
        assert_eq!(vp.surface().rendered.len(), 2);
    }

    #[test]
    fn mode_transitions_report_cursor_changes() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.space_down();
        // Key repeat while held is harmless.
        vp.space_down();
        assert_eq!(vp.pointer_down(Point::new(1.0, 1.0)), PointerDown::Drag);
        assert_eq!(vp.pointer_down(Point::new(2.0, 2.0)), PointerDown::Ignored);
        vp.pointer_up();
        vp.space_up();
        assert_eq!(
            vp.surface().modes,
            [
                InputMode::SpaceHeld,
                InputMode::Dragging,
                InputMode::SpaceHeld,
                InputMode::Idle
            ]
        );
    }

    #[test]
    fn press_outside_pan_mode_dismisses() {
        let mut vp = ViewportController::new(Recorder::default());
        assert_eq!(vp.pointer_down(Point::new(10.0, 10.0)), PointerDown::Dismiss);
        assert_eq!(vp.mode(), InputMode::Idle);
        assert!(!vp.begin_drag(Point::new(10.0, 10.0)));
    }

    #[test]
    fn space_up_terminates_drag() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.space_down();
        vp.begin_drag(Point::new(0.0, 0.0));
        vp.space_up();
        assert_eq!(vp.mode(), InputMode::Idle);

        // A stray move after the key is released must not pan.
        vp.drag_to(Point::new(40.0, 40.0));
        assert_eq!(vp.translation(), Vec2::ZERO);
    }

    #[test]
    fn drag_to_same_point_does_not_rerender() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.space_down();
        vp.begin_drag(Point::new(10.0, 10.0));
        vp.drag_to(Point::new(10.0, 10.0));
        assert!(vp.surface().rendered.is_empty());
        vp.drag_to(Point::new(12.0, 10.0));
        assert_eq!(vp.surface().rendered.len(), 1);
    }

    #[test]
    fn zoom_does_not_move_translation() {
        let mut vp = ViewportController::new(Recorder::default());
        vp.space_down();
        vp.begin_drag(Point::new(0.0, 0.0));
        vp.drag_to(Point::new(30.0, 40.0));
        vp.end_drag();
        vp.zoom_by(0.5);
        assert_eq!(vp.translation(), Vec2::new(30.0, 40.0));
        assert_eq!(vp.scale(), 1.5);
    }

    #[test]
    fn stepping_down_lands_exactly_on_min() {
        let mut vp = ViewportController::new(Recorder::default());
        for _ in 0..8 {
            vp.zoom_by(-0.1);
        }
        // 1.0 - 8 * 0.1 drifts to 0.20000000000000015.
        assert!(vp.scale() > 0.2, "expected float drift above the bound");
        vp.zoom_by(-0.1);
        assert_eq!(vp.scale(), 0.2);

        let renders = vp.surface().rendered.len();
        vp.zoom_by(-0.1);
        assert_eq!(vp.surface().rendered.len(), renders);
    }

    #[test]
    fn limits_above_one_clamp_identity() {
        let mut vp = ViewportController::with_limits((), ScaleLimits::new(2.0, 4.0));
        assert_eq!(vp.scale(), 2.0);
        vp.zoom_by(1.0);
        vp.reset();
        assert_eq!(vp.scale(), 2.0);
        assert_eq!(vp.translation(), Vec2::ZERO);
    }
}
