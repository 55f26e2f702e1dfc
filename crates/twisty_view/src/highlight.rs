use cgmath::{One, Point3, Quaternion, Vector3};

use crate::RayHit;

/// Placement of the overlay drawn on the face under the pointer.
///
/// The host draws it as a square in its local XY plane, facing local +Z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceHighlight {
    /// World-space center.
    pub position: Point3<f32>,
    /// Rotation from local +Z onto the face normal.
    pub orientation: Quaternion<f32>,
    /// Whether the highlight is shown.
    pub visible: bool,
}
impl Default for FaceHighlight {
    fn default() -> Self {
        Self::hidden()
    }
}
impl FaceHighlight {
    /// Returns a hidden highlight.
    pub fn hidden() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            orientation: Quaternion::one(),
            visible: false,
        }
    }

    /// Returns a highlight on the surface struck by `hit`, floating `offset`
    /// above it.
    pub fn on_hit<R>(hit: &RayHit<R>, offset: f32) -> Self {
        let normal = hit.world_normal();
        Self {
            position: hit.point + normal * offset,
            orientation: Quaternion::from_arc(Vector3::unit_z(), normal, None),
            visible: true,
        }
    }
}
