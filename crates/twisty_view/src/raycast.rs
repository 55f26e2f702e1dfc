//! Classifying ray hits into a face and layer of the puzzle.

use cgmath::{InnerSpace, Matrix4, Point3, Vector3, Zero};
use twisty_core::{Axis, CubieId, Face, Puzzle};

/// Result of the host's ray-intersection query against the cubies.
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit<R> {
    /// Renderable that was struck.
    pub renderable: R,
    /// Surface normal at the hit, in the renderable's local space.
    pub local_normal: Vector3<f32>,
    /// World transform of the renderable.
    pub world_transform: Matrix4<f32>,
    /// World-space hit point.
    pub point: Point3<f32>,
}
impl<R> RayHit<R> {
    /// Returns the unit surface normal at the hit in world space.
    pub fn world_normal(&self) -> Vector3<f32> {
        transform_direction(&self.world_transform, self.local_normal)
    }
}

/// Transforms a direction vector by the upper 3×3 part of `m` and normalizes
/// the result. Returns the zero vector if the result is zero.
pub fn transform_direction(m: &Matrix4<f32>, v: Vector3<f32>) -> Vector3<f32> {
    let ret = (m * v.extend(0.0)).truncate();
    if ret.magnitude2() > 0.0 {
        ret.normalize()
    } else {
        Vector3::zero()
    }
}

/// World-space camera basis vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraBasis {
    /// Screen right.
    pub right: Vector3<f32>,
    /// Screen up.
    pub up: Vector3<f32>,
    /// Direction the camera looks.
    pub forward: Vector3<f32>,
}
impl Default for CameraBasis {
    /// Camera looking down -Z with +Y up.
    fn default() -> Self {
        Self {
            right: Vector3::unit_x(),
            up: Vector3::unit_y(),
            forward: -Vector3::unit_z(),
        }
    }
}
impl CameraBasis {
    /// Extracts the basis from a camera's world matrix. The camera looks down
    /// its local -Z axis.
    pub fn from_world_matrix(m: &Matrix4<f32>) -> Self {
        Self {
            right: transform_direction(m, Vector3::unit_x()),
            up: transform_direction(m, Vector3::unit_y()),
            forward: transform_direction(m, -Vector3::unit_z()),
        }
    }
}

/// Cubie face targeted by a pointer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceSelection {
    /// Cubie that was struck.
    pub cubie: CubieId,
    /// Face of the puzzle that the struck surface faces.
    pub face: Face,
    /// Axis perpendicular to `face`.
    pub axis: Axis,
    /// Layer of the cubie along `axis`.
    pub layer: u8,
    /// World-space unit normal of the struck surface.
    pub normal: Vector3<f32>,
}

/// Determines which cubie, face, and layer a ray hit.
///
/// Returns `None` if there is no hit or the hit renderable does not belong to
/// a cubie.
pub fn resolve<R: PartialEq>(puzzle: &Puzzle<R>, hit: Option<&RayHit<R>>) -> Option<FaceSelection> {
    let hit = hit?;
    let Some(cubie) = puzzle.cubie_from_renderable(&hit.renderable) else {
        log::trace!("ray hit something other than a cubie");
        return None;
    };
    let normal = hit.world_normal();
    let face = Face::from_normal(normal);
    let axis = face.axis();
    Some(FaceSelection {
        cubie,
        face,
        axis,
        layer: puzzle[cubie].layer(axis),
        normal,
    })
}
