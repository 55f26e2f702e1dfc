use cgmath::{Point2, Vector2, Zero};

use crate::{CameraBasis, DragInput, FaceSelection};

/// Dominant direction of a drag, locked once the pointer has moved far
/// enough.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// Mostly left/right.
    Horizontal,
    /// Mostly up/down.
    Vertical,
}

/// Pointer drag progress since pointer-down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragTracker {
    start: Point2<f32>,
    delta: Vector2<f32>,
    axis: Option<DragAxis>,
}
impl DragTracker {
    /// Starts tracking a drag at `start`.
    pub fn new(start: Point2<f32>) -> Self {
        Self {
            start,
            delta: Vector2::zero(),
            axis: None,
        }
    }

    /// Updates the drag with a new pointer position. Once either component
    /// of the delta reaches `threshold`, the drag axis locks for the rest of
    /// the gesture.
    ///
    /// Returns the axis if it locked on this update.
    pub fn update(&mut self, pos: Point2<f32>, threshold: f32) -> Option<DragAxis> {
        self.delta = pos - self.start;
        if self.axis.is_some() {
            return None;
        }
        if self.delta.x.abs() < threshold && self.delta.y.abs() < threshold {
            return None;
        }
        let axis = match self.delta.x.abs() > self.delta.y.abs() {
            true => DragAxis::Horizontal,
            false => DragAxis::Vertical,
        };
        self.axis = Some(axis);
        self.axis
    }

    /// Returns the pointer position at the start of the drag.
    pub fn start(&self) -> Point2<f32> {
        self.start
    }
    /// Returns the offset from the start of the drag to the latest pointer
    /// position.
    pub fn delta(&self) -> Vector2<f32> {
        self.delta
    }
    /// Returns the locked drag axis, if any.
    pub fn axis(&self) -> Option<DragAxis> {
        self.axis
    }
    /// Returns whether the pointer has moved far enough to count as a drag.
    pub fn is_locked(&self) -> bool {
        self.axis.is_some()
    }
}

/// Pointer gesture in progress on a cubie face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gesture {
    /// What was struck at pointer-down.
    pub selection: FaceSelection,
    /// Camera basis at pointer-down.
    pub camera: CameraBasis,
    /// Drag progress.
    pub drag: DragTracker,
}
impl Gesture {
    /// Starts a gesture on a face.
    pub fn new(selection: FaceSelection, camera: CameraBasis, pos: Point2<f32>) -> Self {
        Self {
            selection,
            camera,
            drag: DragTracker::new(pos),
        }
    }

    /// Returns the input for a drag resolver.
    pub fn drag_input(&self) -> DragInput {
        DragInput {
            dx: self.drag.delta.x,
            dy: self.drag.delta.y,
            face: self.selection.face,
            face_normal: self.selection.normal,
            camera: self.camera,
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{point2, vec2};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_drag_lock() {
        let mut drag = DragTracker::new(point2(100.0, 50.0));
        assert_eq!(None, drag.update(point2(104.0, 45.5), 6.0));
        assert!(!drag.is_locked());
        assert_eq!(vec2(4.0, -4.5), drag.delta());

        assert_eq!(Some(DragAxis::Vertical), drag.update(point2(105.0, 44.0), 6.0));
        // Stays locked even when the drag turns horizontal.
        assert_eq!(None, drag.update(point2(200.0, 44.0), 6.0));
        assert_eq!(Some(DragAxis::Vertical), drag.axis());
        assert_eq!(vec2(100.0, -6.0), drag.delta());
    }

    #[test]
    fn test_drag_lock_horizontal() {
        let mut drag = DragTracker::new(point2(0.0, 0.0));
        assert_eq!(Some(DragAxis::Horizontal), drag.update(point2(-7.0, 2.0), 6.0));
        assert_eq!(point2(0.0, 0.0), drag.start());
    }

    #[test]
    fn test_zero_threshold_locks_immediately() {
        let mut drag = DragTracker::new(point2(3.0, 3.0));
        assert_eq!(Some(DragAxis::Vertical), drag.update(point2(3.0, 3.0), 0.0));
    }
}
