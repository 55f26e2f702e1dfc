use twisty_core::QUARTER_TURN;
use twisty_core::prelude::*;
use twisty_prefs::AnimationPreferences;
use web_time::Duration;

use crate::animations::{TwistAnimation, TwistStep, snap_to_quarter_turn};
use crate::layers::{LayerGroup, disband, group_layer};
use crate::{CubieSpawn, SceneGraph, TwistError};

/// Twist that is currently animating, along with the group being turned.
#[derive(Debug)]
struct ActiveTwist<G> {
    anim: TwistAnimation,
    group: LayerGroup<G>,
}

/// Puzzle simulation, which manages the puzzle state, the twist animation,
/// the undo stack, and the host scene that displays it all.
#[derive(Debug)]
pub struct PuzzleSimulation<S: SceneGraph> {
    scene: S,
    geometry: PuzzleGeometry,
    /// Latest puzzle state, not including the twist in progress.
    puzzle: Puzzle<S::Renderable>,
    history: MoveHistory,

    /// Twist animation state, or `None` if idle.
    twist_anim: Option<ActiveTwist<S::Group>>,
    animation_prefs: AnimationPreferences,
}
impl<S: SceneGraph> PuzzleSimulation<S> {
    /// Constructs a new simulation, spawning a fresh puzzle into `scene`.
    ///
    /// Returns an error, without spawning anything, if the geometry or the
    /// animation preferences are invalid.
    pub fn new(
        mut scene: S,
        geometry: PuzzleGeometry,
        animation_prefs: AnimationPreferences,
    ) -> eyre::Result<Self> {
        animation_prefs.validate()?;
        let puzzle = spawn_puzzle(&mut scene, &geometry)?;
        Ok(Self {
            scene,
            geometry,
            puzzle,
            history: MoveHistory::new(),

            twist_anim: None,
            animation_prefs,
        })
    }

    /// Returns the latest puzzle state, not including any twist in progress.
    pub fn puzzle(&self) -> &Puzzle<S::Renderable> {
        &self.puzzle
    }
    /// Returns the host scene.
    pub fn scene(&self) -> &S {
        &self.scene
    }
    /// Returns the host scene mutably.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
    /// Returns the geometry used to place cubies.
    pub fn geometry(&self) -> &PuzzleGeometry {
        &self.geometry
    }
    /// Returns the undo/redo history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
    /// Returns the animation preferences.
    pub fn animation_prefs(&self) -> &AnimationPreferences {
        &self.animation_prefs
    }
    /// Sets the animation preferences. A twist in progress keeps its speed.
    ///
    /// Invalid preferences are rejected and the current ones are kept.
    pub fn set_animation_prefs(&mut self, animation_prefs: AnimationPreferences) -> eyre::Result<()> {
        animation_prefs.validate()?;
        self.animation_prefs = animation_prefs;
        Ok(())
    }

    /// Returns whether a twist is animating.
    pub fn is_rotating(&self) -> bool {
        self.twist_anim.is_some()
    }
    /// Returns the twist that is animating, if any.
    pub fn current_twist(&self) -> Option<&TwistAnimation> {
        Some(&self.twist_anim.as_ref()?.anim)
    }

    /// Destroys every cubie and spawns a fresh puzzle with new geometry. The
    /// history is cleared.
    ///
    /// Returns an error, and leaves the puzzle untouched, if a twist is in
    /// progress or the geometry is invalid.
    pub fn rebuild(&mut self, geometry: PuzzleGeometry) -> Result<(), TwistError> {
        if self.is_rotating() {
            return Err(TwistError::Busy);
        }
        let new_puzzle = spawn_puzzle(&mut self.scene, &geometry)?;
        let old_puzzle = std::mem::replace(&mut self.puzzle, new_puzzle);
        for renderable in old_puzzle.into_renderables() {
            self.scene.despawn_cubie(renderable);
        }
        self.geometry = geometry;
        self.history.clear();
        log::debug!("rebuilt puzzle with {} layers", geometry.layer_count);
        Ok(())
    }

    /// Starts animating a twist. When the animation completes, the twist is
    /// committed and recorded in the history.
    pub fn begin_twist(&mut self, twist: Move) -> Result<(), TwistError> {
        if self.is_rotating() {
            return Err(TwistError::Busy);
        }
        self.puzzle.check_layer(twist.axis, twist.layer)?;

        let group = group_layer(&mut self.scene, &self.puzzle, twist.axis, twist.layer);
        let anim = TwistAnimation::new(twist, self.animation_prefs.twist_speed);
        self.twist_anim = Some(ActiveTwist { anim, group });
        log::debug!("beginning twist {twist}");
        Ok(())
    }

    /// Advances the twist animation by `delta`, or by one frame at the
    /// assumed frame rate if `delta` is `None`. Returns whether the puzzle
    /// must be redrawn.
    pub fn step(&mut self, delta: Option<Duration>) -> bool {
        let Some(active) = &mut self.twist_anim else {
            return false;
        };
        let delta = match delta {
            Some(d) => d.as_secs_f32(),
            None => self.animation_prefs.assumed_frame_secs(),
        };

        let axis = active.anim.twist.axis;
        match active.anim.proceed(delta) {
            TwistStep::Continue(increment) => {
                self.scene.rotate_group(active.group.group(), axis, increment);
            }
            TwistStep::Finish(increment) => {
                let group = active.group.group();
                self.scene.rotate_group(group, axis, increment);
                let angle = self.scene.group_rotation(group, axis);
                self.scene
                    .set_group_rotation(group, axis, snap_to_quarter_turn(angle));
                if let Some(ActiveTwist { anim, group }) = self.twist_anim.take() {
                    self.finish_twist(group, anim.twist);
                    self.history.push(anim.twist);
                }
            }
        }
        true
    }

    /// Undoes the latest twist instantly. Returns the twist that was applied
    /// (the inverse of the one undone), or `None` if there is nothing to undo
    /// or a twist is animating.
    pub fn undo(&mut self) -> Option<Move> {
        if self.is_rotating() {
            log::trace!("ignoring undo during twist");
            return None;
        }
        let twist = self.history.undo()?;
        self.instant_twist(twist);
        Some(twist)
    }
    /// Redoes the latest undone twist instantly. Returns the twist that was
    /// applied, or `None` if there is nothing to redo or a twist is animating.
    pub fn redo(&mut self) -> Option<Move> {
        if self.is_rotating() {
            log::trace!("ignoring redo during twist");
            return None;
        }
        let twist = self.history.redo()?;
        self.instant_twist(twist);
        Some(twist)
    }

    /// Applies a twist with no animation and without touching the history.
    fn instant_twist(&mut self, twist: Move) {
        let Move {
            axis,
            layer,
            direction,
        } = twist;
        let group = group_layer(&mut self.scene, &self.puzzle, axis, layer);
        self.scene
            .set_group_rotation(group.group(), axis, QUARTER_TURN * direction);
        self.scene.update_world_transforms();
        self.finish_twist(group, twist);
        log::debug!("applied twist {twist} instantly");
    }

    /// Bakes the group rotation into the cubies and commits their new
    /// indices.
    fn finish_twist(&mut self, group: LayerGroup<S::Group>, twist: Move) {
        let rotated = disband(&mut self.scene, &self.puzzle, group);
        if let Err(e) = self
            .puzzle
            .commit_twist(&rotated, twist.axis, twist.direction)
        {
            log::error!("error committing twist {twist}: {e}");
        }
    }
}

fn spawn_puzzle<S: SceneGraph>(
    scene: &mut S,
    geometry: &PuzzleGeometry,
) -> Result<Puzzle<S::Renderable>, PuzzleError> {
    Puzzle::new(geometry.layer_count, |home| {
        scene.spawn_cubie(&CubieSpawn::new(geometry, home))
    })
}
