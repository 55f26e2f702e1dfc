//! Strategies for turning a drag on a face into a twist axis and direction.

use std::fmt;

use cgmath::{InnerSpace, Vector3, Zero};
use twisty_core::{Axis, Face, Sign};
use twisty_prefs::DragResolverKind;

use crate::CameraBasis;

/// Drag gesture on a face, in screen pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragInput {
    /// Horizontal drag distance. Positive is right.
    pub dx: f32,
    /// Vertical drag distance. Positive is down.
    pub dy: f32,
    /// Face that the drag started on.
    pub face: Face,
    /// World-space normal of the surface that the drag started on.
    pub face_normal: Vector3<f32>,
    /// Camera basis at the start of the drag.
    pub camera: CameraBasis,
}

/// Axis and direction of a quarter turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TwistIntent {
    /// Axis to turn around.
    pub axis: Axis,
    /// Positive for a right-handed turn around `axis`.
    pub direction: Sign,
}

/// Method of resolving a drag into a twist.
pub trait DragResolver: fmt::Debug {
    /// Returns the twist for a drag. Every drag resolves to some twist; a
    /// direction that would be zero is positive.
    fn resolve(&self, input: &DragInput) -> TwistIntent;
}

/// Returns a boxed drag resolver of the given kind.
pub fn drag_resolver(kind: DragResolverKind) -> Box<dyn DragResolver> {
    match kind {
        DragResolverKind::CameraRelative => Box::new(CameraRelativeResolver),
        DragResolverKind::FaceTable => Box::new(FaceTableResolver),
    }
}

/// Resolver that derives the axis from the face normal and the drag direction
/// in world space.
///
/// The drag is lifted into world space using the camera's right and up
/// vectors, and the twist axis is the dominant component of
/// `normal × drag`. This works from any camera angle.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CameraRelativeResolver;
impl DragResolver for CameraRelativeResolver {
    fn resolve(&self, input: &DragInput) -> TwistIntent {
        let CameraBasis { right, up, .. } = input.camera;
        let drag = right * input.dx - up * input.dy;
        let drag = if drag.magnitude2() > 0.0 {
            drag.normalize()
        } else {
            Vector3::zero()
        };

        let axis_vector = input.face_normal.cross(drag);
        let axis = Axis::dominant(axis_vector);
        let direction = Sign::of_nonzero(axis.component(axis_vector)).unwrap_or(Sign::Pos);
        TwistIntent { axis, direction }
    }
}

/// Resolver that looks up a fixed axis and sign for each face.
///
/// The table assumes the face is viewed head-on with an upright camera (or,
/// for the top and bottom faces, with the front face toward the bottom and
/// top of the screen respectively), so it only matches the camera-relative
/// resolver from those views.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FaceTableResolver;
impl FaceTableResolver {
    /// Returns the twist axis and sign for a positive horizontal drag and for
    /// a positive vertical drag on `face`.
    pub fn rule(face: Face) -> [(Axis, Sign); 2] {
        use Axis::*;
        use Sign::*;

        match face {
            Face::F => [(Y, Pos), (X, Pos)],
            Face::B => [(Y, Pos), (X, Neg)],
            Face::R => [(Y, Pos), (Z, Neg)],
            Face::L => [(Y, Pos), (Z, Pos)],
            Face::U => [(Z, Neg), (X, Pos)],
            Face::D => [(Z, Pos), (X, Pos)],
        }
    }
}
impl DragResolver for FaceTableResolver {
    fn resolve(&self, input: &DragInput) -> TwistIntent {
        let [horizontal, vertical] = Self::rule(input.face);
        let is_horizontal = input.dx.abs() > input.dy.abs();
        let ((axis, sign), d) = match is_horizontal {
            true => (horizontal, input.dx),
            false => (vertical, input.dy),
        };
        let direction = Sign::of_nonzero(d).map_or(Sign::Pos, |s| s * sign);
        TwistIntent { axis, direction }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::vec3;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Camera looking straight at `face`.
    fn canonical_camera(face: Face) -> CameraBasis {
        let (right, up) = match face {
            Face::F => (vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)),
            Face::B => (vec3(-1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)),
            Face::R => (vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, 0.0)),
            Face::L => (vec3(0.0, 0.0, 1.0), vec3(0.0, 1.0, 0.0)),
            Face::U => (vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0)),
            Face::D => (vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
        };
        CameraBasis {
            right,
            up,
            forward: -face.normal(),
        }
    }

    fn input(face: Face, dx: f32, dy: f32) -> DragInput {
        DragInput {
            dx,
            dy,
            face,
            face_normal: face.normal(),
            camera: canonical_camera(face),
        }
    }

    fn intent(axis: Axis, direction: Sign) -> TwistIntent {
        TwistIntent { axis, direction }
    }

    #[test]
    fn test_canonical_cameras_are_right_handed() {
        for face in Face::ALL {
            let cam = canonical_camera(face);
            assert_eq!(-cam.forward, cam.right.cross(cam.up), "{face:?}");
        }
    }

    #[test]
    fn test_camera_relative_front_face() {
        // Dragging right on the front face turns the layer around +Y.
        assert_eq!(
            intent(Axis::Y, Sign::Pos),
            CameraRelativeResolver.resolve(&input(Face::F, 40.0, 0.0)),
        );
        assert_eq!(
            intent(Axis::Y, Sign::Neg),
            CameraRelativeResolver.resolve(&input(Face::F, -40.0, 3.0)),
        );
        // Dragging down on the front face turns the layer around +X.
        assert_eq!(
            intent(Axis::X, Sign::Pos),
            CameraRelativeResolver.resolve(&input(Face::F, 2.0, 40.0)),
        );
    }

    #[test]
    fn test_camera_relative_zero_drag() {
        assert_eq!(
            intent(Axis::X, Sign::Pos),
            CameraRelativeResolver.resolve(&input(Face::U, 0.0, 0.0)),
        );
    }

    #[test]
    fn test_camera_relative_tilted_camera() {
        // Camera above and to the right of the front face; dragging right
        // still reads as a turn around Y.
        let camera = CameraBasis {
            right: vec3(0.8, 0.0, -0.6),
            up: vec3(-0.2, 0.9, -0.3).normalize(),
            forward: vec3(-0.5, -0.5, -0.7).normalize(),
        };
        let drag = DragInput {
            dx: 25.0,
            dy: 0.0,
            face: Face::F,
            face_normal: Face::F.normal(),
            camera,
        };
        assert_eq!(intent(Axis::Y, Sign::Pos), CameraRelativeResolver.resolve(&drag));
    }

    #[test]
    fn test_face_table_zero_direction() {
        // Diagonal drags count as vertical.
        assert_eq!(
            intent(Axis::X, Sign::Neg),
            FaceTableResolver.resolve(&input(Face::B, 5.0, 5.0)),
        );
        assert_eq!(
            intent(Axis::X, Sign::Pos),
            FaceTableResolver.resolve(&input(Face::F, 0.0, 0.0)),
        );
        assert_eq!(
            intent(Axis::Z, Sign::Pos),
            FaceTableResolver.resolve(&input(Face::R, 0.0, 0.0)),
        );
    }

    #[test]
    fn test_resolvers_agree_on_every_face() {
        let drags = [(30.0, 4.0), (-30.0, 4.0), (4.0, 30.0), (4.0, -30.0)];
        for face in Face::ALL {
            for (dx, dy) in drags {
                let drag = input(face, dx, dy);
                assert_eq!(
                    CameraRelativeResolver.resolve(&drag),
                    FaceTableResolver.resolve(&drag),
                    "{face:?} dx={dx} dy={dy}",
                );
            }
        }
    }

    #[test]
    fn test_twist_axis_lies_in_face_plane() {
        for face in Face::ALL {
            for (dx, dy) in [(10.0, 0.0), (0.0, 10.0)] {
                let TwistIntent { axis, .. } = CameraRelativeResolver.resolve(&input(face, dx, dy));
                assert_ne!(face.axis(), axis, "{face:?}");
            }
        }
    }

    #[test]
    fn test_resolver_from_prefs() {
        let drag = input(Face::L, 0.0, -12.0);
        for kind in [DragResolverKind::CameraRelative, DragResolverKind::FaceTable] {
            assert_eq!(intent(Axis::Z, Sign::Neg), drag_resolver(kind).resolve(&drag));
        }
    }
}
