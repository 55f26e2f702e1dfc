//! Gathering a layer's renderables into a rotatable group and baking the
//! rotation back into them afterwards.

use twisty_core::{Axis, CubieId, Puzzle};

use crate::SceneGraph;

/// Scene group holding exactly the renderables of one layer during a twist.
///
/// This is consumed by [`disband()`], so it cannot outlive the twist.
#[derive(Debug)]
pub struct LayerGroup<G> {
    group: G,
    axis: Axis,
    layer: u8,
    members: Vec<CubieId>,
}
impl<G> LayerGroup<G> {
    /// Returns the host's group handle.
    pub fn group(&self) -> &G {
        &self.group
    }
    /// Returns the axis that the layer is perpendicular to.
    pub fn axis(&self) -> Axis {
        self.axis
    }
    /// Returns the layer index along [`Self::axis()`].
    pub fn layer(&self) -> u8 {
        self.layer
    }
    /// Returns the cubies that were attached to the group.
    pub fn members(&self) -> &[CubieId] {
        &self.members
    }
}

/// Creates a group and attaches every renderable whose cubie lies in `layer`
/// along `axis`.
pub fn group_layer<S: SceneGraph>(
    scene: &mut S,
    puzzle: &Puzzle<S::Renderable>,
    axis: Axis,
    layer: u8,
) -> LayerGroup<S::Group> {
    let group = scene.create_group();
    let members: Vec<CubieId> = puzzle.cubies_in_layer(axis, layer).collect();
    for &id in &members {
        scene.attach_to_group(&group, puzzle[id].renderable());
    }
    log::trace!("grouped {} cubies in layer {axis}{layer}", members.len());
    LayerGroup {
        group,
        axis,
        layer,
        members,
    }
}

/// Bakes the group's transform into each child, moves the children back to
/// the scene root, and removes the group.
///
/// Returns the cubies whose renderables were in the group.
pub fn disband<S: SceneGraph>(
    scene: &mut S,
    puzzle: &Puzzle<S::Renderable>,
    group: LayerGroup<S::Group>,
) -> Vec<CubieId> {
    let LayerGroup {
        group,
        axis,
        layer,
        members,
    } = group;

    let mut rotated = Vec::with_capacity(members.len());
    for child in scene.group_children(&group) {
        match puzzle.cubie_from_renderable(&child) {
            Some(id) => rotated.push(id),
            None => log::warn!("group for layer {axis}{layer} contains unknown {child:?}"),
        }
        scene.bake_and_detach(&group, &child);
    }
    scene.remove_group(group);

    if rotated.len() != members.len() {
        log::warn!(
            "layer {axis}{layer} had {} cubies when grouped and {} when disbanded",
            members.len(),
            rotated.len(),
        );
    }
    rotated
}
