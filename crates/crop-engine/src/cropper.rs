//! The cropper state machine.
//!
//! Transition validity lives in the operations themselves: an invalid
//! call returns an error instead of relying on caller discipline. The
//! one deliberate exception is [`CropperState::end_drag`], which is
//! idempotent because pointer-up and pointer-leave can both fire for the
//! same drag.

use reframe_common::{ReframeError, ReframeResult};
use reframe_session_model::{
    clamp_position, compute_cropper_rect, AspectRatio, CropSnapshot, CropperRect, DisplayBounds,
    Point,
};

/// Where the cropper is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropperPhase {
    /// No rectangle; the overlay is hidden.
    Inactive,
    /// Active with a computed rectangle, not being dragged.
    Idle,
    /// Active and following the pointer.
    Dragging,
}

/// Ephemeral drag bookkeeping: the offset between the pointer and the
/// rect origin at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_offset: Point,
}

/// The cropper rectangle and its interaction state.
#[derive(Debug, Clone)]
pub struct CropperState {
    phase: CropperPhase,
    aspect: AspectRatio,
    bounds: DisplayBounds,
    rect: CropperRect,
    drag: Option<DragSession>,
}

impl CropperState {
    /// Create an inactive cropper with a zero rect. Display bounds are
    /// unknown until the first [`display_bounds_changed`] call.
    ///
    /// [`display_bounds_changed`]: CropperState::display_bounds_changed
    pub fn new(aspect: AspectRatio) -> Self {
        Self {
            phase: CropperPhase::Inactive,
            aspect,
            bounds: DisplayBounds::default(),
            rect: CropperRect::ZERO,
            drag: None,
        }
    }

    pub fn phase(&self) -> CropperPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != CropperPhase::Inactive
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect
    }

    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    pub fn rect(&self) -> CropperRect {
        self.rect
    }

    /// The rect/bounds pair downstream consumers may use, or `None`
    /// while the cropper is inactive or not yet laid out.
    pub fn snapshot(&self) -> Option<CropSnapshot> {
        if !self.is_active() || self.bounds.is_degenerate() || self.rect.is_zero() {
            return None;
        }
        Some(CropSnapshot {
            rect: self.rect,
            bounds: self.bounds,
        })
    }

    /// Activate the cropper, computing the rect from the given bounds.
    pub fn activate(&mut self, bounds: DisplayBounds) -> ReframeResult<()> {
        if self.is_active() {
            return Err(ReframeError::cropper("cropper already active"));
        }
        if bounds.is_degenerate() {
            return Err(ReframeError::cropper("display bounds not yet known"));
        }

        self.bounds = bounds;
        self.rect = compute_cropper_rect(bounds, self.aspect);
        self.phase = CropperPhase::Idle;
        tracing::debug!(rect = ?self.rect, "Cropper activated");
        Ok(())
    }

    /// Deactivate: discard the rect and any in-progress drag. Idempotent.
    pub fn deactivate(&mut self) {
        self.rect = CropperRect::ZERO;
        self.drag = None;
        self.phase = CropperPhase::Inactive;
    }

    /// Select a new aspect ratio. Valid in any state; when active the
    /// rect is recomputed immediately and an in-progress drag is
    /// cancelled, since the dimensions change under the pointer.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) {
        self.aspect = aspect;
        if self.is_active() {
            self.cancel_drag();
            self.recompute();
        }
    }

    /// Record a new display-bounds snapshot. While active this recomputes
    /// the rect and cancels any drag; while inactive it only stores the
    /// bounds for the next activation.
    pub fn display_bounds_changed(&mut self, bounds: DisplayBounds) {
        self.bounds = bounds;
        if self.is_active() {
            self.cancel_drag();
            self.recompute();
        }
    }

    /// Begin dragging from the given pointer position.
    pub fn begin_drag(&mut self, pointer: Point) -> ReframeResult<()> {
        if self.phase != CropperPhase::Idle {
            return Err(ReframeError::cropper("cropper is not idle"));
        }

        self.drag = Some(DragSession {
            origin_offset: Point::new(
                pointer.x - self.rect.position.x,
                pointer.y - self.rect.position.y,
            ),
        });
        self.phase = CropperPhase::Dragging;
        Ok(())
    }

    /// Move the rect to follow the pointer, clamped to the bounds.
    /// Dragging never alters the dimensions.
    pub fn update_drag(&mut self, pointer: Point) -> ReframeResult<()> {
        let Some(drag) = self.drag else {
            return Err(ReframeError::cropper("no drag in progress"));
        };

        let proposed = Point::new(
            pointer.x - drag.origin_offset.x,
            pointer.y - drag.origin_offset.y,
        );
        self.rect.position = clamp_position(proposed, self.rect.dimensions, self.bounds);
        Ok(())
    }

    /// Finish the drag. Safe to call when already idle.
    pub fn end_drag(&mut self) {
        if self.phase == CropperPhase::Dragging {
            self.phase = CropperPhase::Idle;
        }
        self.drag = None;
    }

    fn cancel_drag(&mut self) {
        if self.phase == CropperPhase::Dragging {
            tracing::debug!("Drag cancelled by recompute");
        }
        self.end_drag();
    }

    fn recompute(&mut self) {
        if self.bounds.is_degenerate() {
            // Video not laid out; hold a zero rect until bounds arrive.
            self.rect = CropperRect::ZERO;
        } else {
            self.rect = compute_cropper_rect(self.bounds, self.aspect);
        }
    }
}

#[cfg(test)]
mod tests {
    use reframe_session_model::Dimensions;

    use super::*;

    fn active_cropper() -> CropperState {
        let mut cropper = CropperState::new(AspectRatio::NINE_SIXTEEN);
        cropper.activate(DisplayBounds::new(960.0, 540.0)).unwrap();
        cropper
    }

    #[test]
    fn test_activation_computes_centered_rect() {
        let cropper = active_cropper();
        assert_eq!(cropper.phase(), CropperPhase::Idle);

        let rect = cropper.rect();
        assert!((rect.dimensions.height - 540.0).abs() < 1e-9);
        assert!((rect.dimensions.width - 303.75).abs() < 1e-9);
        assert!((rect.position.x - 328.125).abs() < 1e-9);
    }

    #[test]
    fn test_activate_rejects_unknown_bounds() {
        let mut cropper = CropperState::new(AspectRatio::default());
        assert!(cropper.activate(DisplayBounds::default()).is_err());
        assert_eq!(cropper.phase(), CropperPhase::Inactive);
    }

    #[test]
    fn test_activate_twice_is_an_error() {
        let mut cropper = active_cropper();
        assert!(cropper.activate(DisplayBounds::new(960.0, 540.0)).is_err());
    }

    #[test]
    fn test_deactivate_zeroes_rect() {
        let mut cropper = active_cropper();
        cropper.deactivate();
        assert_eq!(cropper.phase(), CropperPhase::Inactive);
        assert!(cropper.rect().is_zero());
        assert!(cropper.snapshot().is_none());

        // Idempotent.
        cropper.deactivate();
        assert_eq!(cropper.phase(), CropperPhase::Inactive);
    }

    #[test]
    fn test_drag_follows_pointer_with_origin_offset() {
        let mut cropper = CropperState::new(AspectRatio::NINE_SIXTEEN);
        cropper.activate(DisplayBounds::new(960.0, 540.0)).unwrap();

        // Pin the rect at a known x first.
        cropper.begin_drag(Point::new(400.0, 100.0)).unwrap();
        cropper.update_drag(Point::new(100.0, 100.0)).unwrap();
        cropper.end_drag();
        let x0 = cropper.rect().position.x;

        cropper.begin_drag(Point::new(100.0, 50.0)).unwrap();
        cropper.update_drag(Point::new(150.0, 60.0)).unwrap();
        // Pointer moved +50/+10; y clamps back to 0 (full-height rect).
        assert!((cropper.rect().position.x - (x0 + 50.0)).abs() < 1e-9);
        assert_eq!(cropper.rect().position.y, 0.0);
    }

    #[test]
    fn test_drag_never_changes_dimensions_and_stays_in_bounds() {
        let mut cropper = active_cropper();
        let dims = cropper.rect().dimensions;
        let bounds = cropper.bounds();

        cropper.begin_drag(Point::new(500.0, 200.0)).unwrap();
        for pointer in [
            Point::new(-2000.0, -2000.0),
            Point::new(5000.0, 5000.0),
            Point::new(700.0, 10.0),
            Point::new(0.0, 539.0),
        ] {
            cropper.update_drag(pointer).unwrap();
            let rect = cropper.rect();
            assert_eq!(rect.dimensions, dims);
            assert!(rect.position.x >= 0.0);
            assert!(rect.position.y >= 0.0);
            assert!(rect.right() <= bounds.width + 1e-9);
            assert!(rect.bottom() <= bounds.height + 1e-9);
        }
    }

    #[test]
    fn test_drag_requires_idle_phase() {
        let mut cropper = CropperState::new(AspectRatio::default());
        assert!(cropper.begin_drag(Point::new(0.0, 0.0)).is_err());

        cropper.activate(DisplayBounds::new(960.0, 540.0)).unwrap();
        cropper.begin_drag(Point::new(400.0, 100.0)).unwrap();
        assert!(cropper.begin_drag(Point::new(400.0, 100.0)).is_err());
    }

    #[test]
    fn test_update_without_drag_is_an_error() {
        let mut cropper = active_cropper();
        assert!(cropper.update_drag(Point::new(10.0, 10.0)).is_err());
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let mut cropper = active_cropper();
        cropper.begin_drag(Point::new(400.0, 100.0)).unwrap();
        cropper.end_drag();
        assert_eq!(cropper.phase(), CropperPhase::Idle);
        cropper.end_drag();
        assert_eq!(cropper.phase(), CropperPhase::Idle);
    }

    #[test]
    fn test_ratio_change_recomputes_and_cancels_drag() {
        let mut cropper = active_cropper();
        cropper.begin_drag(Point::new(400.0, 100.0)).unwrap();

        cropper.set_aspect_ratio(AspectRatio::new(1, 1).unwrap());
        assert_eq!(cropper.phase(), CropperPhase::Idle);

        // 1:1 on 960x540 -> 540x540 centered.
        let rect = cropper.rect();
        assert_eq!(rect.dimensions, Dimensions::new(540.0, 540.0));
        assert!((rect.position.x - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_change_recomputes_and_cancels_drag() {
        let mut cropper = active_cropper();
        cropper.begin_drag(Point::new(400.0, 100.0)).unwrap();

        cropper.display_bounds_changed(DisplayBounds::new(540.0, 540.0));
        assert_eq!(cropper.phase(), CropperPhase::Idle);
        assert!((cropper.rect().dimensions.width - 303.75).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_bounds_while_active_hold_zero_rect() {
        let mut cropper = active_cropper();
        cropper.display_bounds_changed(DisplayBounds::default());
        assert!(cropper.is_active());
        assert!(cropper.rect().is_zero());
        assert!(cropper.snapshot().is_none());

        cropper.display_bounds_changed(DisplayBounds::new(960.0, 540.0));
        assert!(cropper.snapshot().is_some());
    }

    #[test]
    fn test_ratio_change_while_inactive_applies_on_activation() {
        let mut cropper = CropperState::new(AspectRatio::NINE_SIXTEEN);
        cropper.set_aspect_ratio(AspectRatio::new(4, 3).unwrap());
        cropper.activate(DisplayBounds::new(960.0, 540.0)).unwrap();

        // 4:3 on 960x540 -> 720 wide.
        assert!((cropper.rect().dimensions.width - 720.0).abs() < 1e-9);
    }
}
