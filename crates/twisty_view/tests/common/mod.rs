//! Mock host for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Transform, Vector3};
use twisty_core::{Axis, CubieIndex, Face};
use twisty_view::{
    CubieSpawn, FaceHighlight, InputHost, ListenerId, ListenerTarget, PointerEventKind, RayHit,
    SceneGraph,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug)]
pub struct MockCubie {
    pub home: CubieIndex,
    pub transform: Matrix4<f32>,
    pub parent: Option<u32>,
    pub alive: bool,
}

#[derive(Debug, Default)]
pub struct MockGroup {
    pub rotation: [f32; 3],
}
impl MockGroup {
    fn matrix(&self) -> Matrix4<f32> {
        let [x, y, z] = self.rotation;
        Matrix4::from_angle_x(Rad(x)) * Matrix4::from_angle_y(Rad(y)) * Matrix4::from_angle_z(Rad(z))
    }
}

/// Scene graph that tracks real transforms, so tests can check where cubies
/// end up.
#[derive(Debug, Default)]
pub struct MockScene {
    pub cubies: Vec<MockCubie>,
    pub groups: BTreeMap<u32, MockGroup>,
    next_group: u32,
    pub groups_created: usize,
    pub world_transform_updates: usize,
    pub highlight: FaceHighlight,
    pub highlight_calls: usize,
}
impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_cubies(&self) -> usize {
        self.cubies.iter().filter(|c| c.alive).count()
    }

    pub fn world_transform(&self, renderable: u32) -> Matrix4<f32> {
        let cubie = &self.cubies[renderable as usize];
        match cubie.parent {
            Some(g) => self.groups[&g].matrix() * cubie.transform,
            None => cubie.transform,
        }
    }

    pub fn world_position(&self, renderable: u32) -> Point3<f32> {
        self.world_transform(renderable)
            .transform_point(Point3::origin())
    }

    /// Returns a ray hit on the sticker of `renderable` that currently faces
    /// `face`.
    pub fn hit_face(&self, renderable: u32, face: Face) -> RayHit<u32> {
        let world_transform = self.world_transform(renderable);
        let inverse = world_transform
            .inverse_transform()
            .expect("cubie transform is not invertible");
        let local_normal = inverse.transform_vector(face.normal()).normalize();
        let point = world_transform.transform_point(Point3::origin()) + face.normal() * 0.5;
        RayHit {
            renderable,
            local_normal,
            world_transform,
            point,
        }
    }

    pub fn assert_no_groups(&self) {
        assert!(self.groups.is_empty(), "groups left behind: {:?}", self.groups);
        assert!(self.cubies.iter().all(|c| c.parent.is_none()));
    }
}

impl SceneGraph for MockScene {
    type Renderable = u32;
    type Group = u32;

    fn spawn_cubie(&mut self, spawn: &CubieSpawn) -> u32 {
        let id = self.cubies.len() as u32;
        self.cubies.push(MockCubie {
            home: spawn.home,
            transform: Matrix4::from_translation(spawn.center.to_vec()),
            parent: None,
            alive: true,
        });
        id
    }
    fn despawn_cubie(&mut self, renderable: u32) {
        let cubie = &mut self.cubies[renderable as usize];
        assert!(cubie.alive, "double despawn of {renderable}");
        cubie.alive = false;
    }

    fn create_group(&mut self) -> u32 {
        let id = self.next_group;
        self.next_group += 1;
        self.groups_created += 1;
        self.groups.insert(id, MockGroup::default());
        id
    }
    fn attach_to_group(&mut self, group: &u32, renderable: &u32) {
        assert!(self.groups.contains_key(group));
        let cubie = &mut self.cubies[*renderable as usize];
        assert_eq!(None, cubie.parent, "{renderable} is already in a group");
        cubie.parent = Some(*group);
    }
    fn rotate_group(&mut self, group: &u32, axis: Axis, angle: f32) {
        self.groups.get_mut(group).expect("no such group").rotation[axis.index()] += angle;
    }
    fn set_group_rotation(&mut self, group: &u32, axis: Axis, angle: f32) {
        self.groups.get_mut(group).expect("no such group").rotation[axis.index()] = angle;
    }
    fn group_rotation(&self, group: &u32, axis: Axis) -> f32 {
        self.groups[group].rotation[axis.index()]
    }
    fn update_world_transforms(&mut self) {
        self.world_transform_updates += 1;
    }
    fn group_children(&self, group: &u32) -> Vec<u32> {
        (0..self.cubies.len() as u32)
            .filter(|&i| self.cubies[i as usize].parent == Some(*group))
            .collect()
    }
    fn bake_and_detach(&mut self, group: &u32, renderable: &u32) {
        let m = self.groups[group].matrix();
        let cubie = &mut self.cubies[*renderable as usize];
        assert_eq!(Some(*group), cubie.parent);
        cubie.transform = m * cubie.transform;
        cubie.parent = None;
    }
    fn remove_group(&mut self, group: u32) {
        assert!(self.group_children(&group).is_empty(), "removing non-empty group");
        self.groups.remove(&group).expect("no such group");
    }

    fn set_face_highlight(&mut self, highlight: &FaceHighlight) {
        self.highlight = *highlight;
        self.highlight_calls += 1;
    }
}

/// Input host that records which listeners are registered.
#[derive(Debug, Default)]
pub struct MockInputHost {
    next_id: u64,
    pub listeners: BTreeMap<ListenerId, (ListenerTarget, PointerEventKind)>,
}
impl InputHost for MockInputHost {
    fn add_listener(&mut self, target: ListenerTarget, kind: PointerEventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, (target, kind));
        id
    }
    fn remove_listener(&mut self, id: ListenerId) {
        assert!(self.listeners.remove(&id).is_some(), "removed unknown {id}");
    }
}

pub fn approx_eq_point(a: Point3<f32>, b: Point3<f32>) -> bool {
    (a - b).magnitude() < 1e-4
}

pub fn approx_eq_vec(a: Vector3<f32>, b: Vector3<f32>) -> bool {
    (a - b).magnitude() < 1e-4
}
