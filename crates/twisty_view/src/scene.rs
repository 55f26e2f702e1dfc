use std::fmt;

use cgmath::Point3;
use smallvec::SmallVec;
use twisty_core::{Axis, CubieIndex, Face, PuzzleGeometry};

use crate::FaceHighlight;

/// Everything the host needs to build the visual representation of one
/// cubie.
#[derive(Debug, Clone, PartialEq)]
pub struct CubieSpawn {
    /// Position the cubie is created at.
    pub home: CubieIndex,
    /// World-space center of the cubie.
    pub center: Point3<f32>,
    /// Edge length of the cubie.
    pub size: f32,
    /// Faces that carry a colored sticker.
    pub sticker_faces: SmallVec<[Face; 3]>,
}
impl CubieSpawn {
    /// Returns the spawn parameters for the cubie created at `home`.
    pub fn new(geometry: &PuzzleGeometry, home: CubieIndex) -> Self {
        Self {
            home,
            center: geometry.cubie_center(home),
            size: geometry.cubie_size,
            sticker_faces: home.outer_faces(geometry.layer_count),
        }
    }
}

/// Scene graph operations that the engine requests from the host.
///
/// Groups are transform nodes centered on the puzzle's origin. The engine
/// only ever rotates them around a principal axis, and never touches a
/// renderable's transform directly.
pub trait SceneGraph {
    /// Handle to a cubie's visual representation.
    type Renderable: fmt::Debug + Clone + PartialEq;
    /// Handle to a transform group node.
    type Group: fmt::Debug;

    /// Creates a renderable for a cubie and adds it to the scene root.
    fn spawn_cubie(&mut self, spawn: &CubieSpawn) -> Self::Renderable;
    /// Removes a renderable from the scene and destroys it.
    fn despawn_cubie(&mut self, renderable: Self::Renderable);

    /// Creates an empty group node with identity transform and adds it to the
    /// scene root.
    fn create_group(&mut self) -> Self::Group;
    /// Reparents a renderable from the scene root into a group, keeping its
    /// local transform.
    fn attach_to_group(&mut self, group: &Self::Group, renderable: &Self::Renderable);
    /// Adds `angle` radians to the group's rotation around `axis`. Positive
    /// angles are right-handed.
    fn rotate_group(&mut self, group: &Self::Group, axis: Axis, angle: f32);
    /// Sets the group's rotation around `axis` to exactly `angle` radians.
    fn set_group_rotation(&mut self, group: &Self::Group, axis: Axis, angle: f32);
    /// Returns the group's rotation around `axis`, in radians.
    fn group_rotation(&self, group: &Self::Group, axis: Axis) -> f32;
    /// Recomputes world transforms for everything in the scene.
    fn update_world_transforms(&mut self);
    /// Returns the renderables currently attached to a group.
    fn group_children(&self, group: &Self::Group) -> Vec<Self::Renderable>;
    /// Applies the group's transform to a child's own transform, then
    /// reparents the child to the scene root.
    fn bake_and_detach(&mut self, group: &Self::Group, renderable: &Self::Renderable);
    /// Removes an empty group from the scene.
    fn remove_group(&mut self, group: Self::Group);

    /// Shows, moves, or hides the face highlight.
    fn set_face_highlight(&mut self, highlight: &FaceHighlight);
}
