use cgmath::Point2;
use twisty_core::{Move, PuzzleGeometry};
use twisty_prefs::{InteractionPreferences, Preferences};
use web_time::Duration;

use crate::{
    CameraBasis, DragResolver, FaceHighlight, Gesture, InputHost, InputSubscription,
    PuzzleSimulation, RayHit, SceneGraph, TwistError, drag_resolver, raycast,
};

/// Pointer event delivered by the host.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent<'a, R> {
    /// Pointer button pressed on the puzzle's element.
    Down {
        /// Screen-space pointer position, in pixels.
        pos: Point2<f32>,
        /// Nearest cubie under the pointer, if any.
        hit: Option<&'a RayHit<R>>,
        /// Camera basis at the time of the press.
        camera: CameraBasis,
    },
    /// Pointer moved anywhere in the window.
    Move {
        /// Screen-space pointer position, in pixels.
        pos: Point2<f32>,
        /// Nearest cubie under the pointer, if any.
        hit: Option<&'a RayHit<R>>,
    },
    /// Pointer button released anywhere in the window.
    Up {
        /// Screen-space pointer position, in pixels.
        pos: Point2<f32>,
    },
    /// Gesture interrupted by the host.
    Cancel,
}

/// Interactive view of a puzzle: turns pointer gestures into twists and
/// forwards frame ticks and undo/redo to the simulation.
#[derive(Debug)]
pub struct PuzzleView<S: SceneGraph> {
    /// Puzzle state, animation, and history.
    pub sim: PuzzleSimulation<S>,

    drag_resolver: Box<dyn DragResolver>,
    interaction_prefs: InteractionPreferences,

    /// Listeners registered while enabled.
    subscription: Option<InputSubscription>,
    /// Gesture in progress, from pointer-down until pointer-up.
    gesture: Option<Gesture>,
    highlight_visible: bool,
}
impl<S: SceneGraph> PuzzleView<S> {
    /// Constructs a view, spawning a fresh puzzle into `scene`.
    ///
    /// The view starts disabled.
    pub fn new(scene: S, prefs: &Preferences) -> eyre::Result<Self> {
        prefs.validate()?;
        let sim = PuzzleSimulation::new(scene, prefs.puzzle.geometry(), prefs.animation.clone())?;
        Ok(Self {
            sim,

            drag_resolver: drag_resolver(prefs.interaction.drag_resolver),
            interaction_prefs: prefs.interaction.clone(),

            subscription: None,
            gesture: None,
            highlight_visible: false,
        })
    }

    /// Returns the interaction preferences.
    pub fn interaction_prefs(&self) -> &InteractionPreferences {
        &self.interaction_prefs
    }
    /// Sets the interaction preferences, replacing the drag resolver if
    /// necessary. Any gesture in progress is canceled.
    pub fn set_interaction_prefs(&mut self, interaction_prefs: InteractionPreferences) {
        self.drag_resolver = drag_resolver(interaction_prefs.drag_resolver);
        self.interaction_prefs = interaction_prefs;
        self.reset_gesture();
    }

    /// Returns whether the view is listening for input.
    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }
    /// Returns the listeners registered by [`Self::enable()`], if enabled.
    pub fn subscription(&self) -> Option<&InputSubscription> {
        self.subscription.as_ref()
    }
    /// Returns the gesture in progress, if any.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Registers pointer listeners with the host. Does nothing if already
    /// enabled.
    pub fn enable(&mut self, host: &mut impl InputHost) {
        if self.is_enabled() {
            return;
        }
        self.subscription = Some(InputSubscription::register(host));
        log::debug!("puzzle view enabled");
    }
    /// Removes the listeners registered by [`Self::enable()`] and resets any
    /// gesture in progress. Does nothing if already disabled.
    pub fn disable(&mut self, host: &mut impl InputHost) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };
        subscription.unregister(host);
        self.reset_gesture();
        self.hide_highlight();
        log::debug!("puzzle view disabled");
    }

    /// Handles a pointer event from the host.
    pub fn handle_event(&mut self, event: PointerEvent<'_, S::Renderable>) {
        match event {
            PointerEvent::Down { pos, hit, camera } => self.pointer_down(pos, hit, camera),
            PointerEvent::Move { pos, hit } => self.pointer_move(pos, hit),
            PointerEvent::Up { pos } => self.pointer_up(pos),
            PointerEvent::Cancel => self.pointer_cancel(),
        }
    }

    /// Starts a gesture if the pointer is over a cubie.
    pub fn pointer_down(
        &mut self,
        pos: Point2<f32>,
        hit: Option<&RayHit<S::Renderable>>,
        camera: CameraBasis,
    ) {
        if !self.accepts_input() {
            return;
        }

        self.hide_highlight();
        self.reset_gesture();

        let Some(selection) = raycast::resolve(self.sim.puzzle(), hit) else {
            return;
        };
        log::debug!(
            "selected {} face of cubie {} (layer {}{})",
            selection.face.name(),
            self.sim.puzzle()[selection.cubie].index(),
            selection.axis,
            selection.layer,
        );
        self.gesture = Some(Gesture::new(selection, camera, pos));
    }

    /// Updates the hover highlight and the drag in progress.
    pub fn pointer_move(&mut self, pos: Point2<f32>, hit: Option<&RayHit<S::Renderable>>) {
        if !self.accepts_input() {
            return;
        }

        let hit = hit.filter(|hit| {
            self.sim
                .puzzle()
                .cubie_from_renderable(&hit.renderable)
                .is_some()
        });
        match hit {
            Some(hit) if self.gesture.is_none() && self.interaction_prefs.show_hover_highlight => {
                let highlight = FaceHighlight::on_hit(hit, self.interaction_prefs.highlight_offset);
                self.sim.scene_mut().set_face_highlight(&highlight);
                self.highlight_visible = true;
            }
            _ => self.hide_highlight(),
        }

        if let Some(gesture) = &mut self.gesture
            && let Some(axis) = gesture
                .drag
                .update(pos, self.interaction_prefs.drag_threshold)
        {
            log::debug!("drag locked {axis:?}");
        }
    }

    /// Completes the gesture in progress, starting a twist if the pointer was
    /// dragged far enough.
    pub fn pointer_up(&mut self, pos: Point2<f32>) {
        if !self.accepts_input() {
            return;
        }
        let Some(mut gesture) = self.gesture.take() else {
            return;
        };
        gesture
            .drag
            .update(pos, self.interaction_prefs.drag_threshold);
        if !gesture.drag.is_locked() {
            log::trace!("pointer released without dragging");
            return;
        }

        let Ok(cubie) = self.sim.puzzle().cubie(gesture.selection.cubie) else {
            log::debug!("selected cubie {} no longer exists", gesture.selection.cubie);
            return;
        };
        let intent = self.drag_resolver.resolve(&gesture.drag_input());
        let twist = Move {
            axis: intent.axis,
            layer: cubie.layer(intent.axis),
            direction: intent.direction,
        };
        if let Err(e) = self.sim.begin_twist(twist) {
            log::debug!("could not begin twist {twist}: {e}");
        }
    }

    /// Abandons the gesture in progress.
    pub fn pointer_cancel(&mut self) {
        self.reset_gesture();
        self.hide_highlight();
    }

    /// Advances the twist animation. Returns whether the puzzle must be
    /// redrawn.
    pub fn update(&mut self, delta: Option<Duration>) -> bool {
        self.sim.step(delta)
    }

    /// Destroys every cubie and spawns a fresh puzzle with new geometry. Any
    /// gesture in progress is canceled. See [`PuzzleSimulation::rebuild()`].
    pub fn rebuild(&mut self, geometry: PuzzleGeometry) -> Result<(), TwistError> {
        self.sim.rebuild(geometry)?;
        self.reset_gesture();
        self.hide_highlight();
        Ok(())
    }

    /// Undoes the latest twist instantly. See [`PuzzleSimulation::undo()`].
    pub fn undo(&mut self) -> Option<Move> {
        self.sim.undo()
    }
    /// Redoes the latest undone twist instantly. See
    /// [`PuzzleSimulation::redo()`].
    pub fn redo(&mut self) -> Option<Move> {
        self.sim.redo()
    }

    fn accepts_input(&self) -> bool {
        if !self.is_enabled() {
            log::trace!("ignoring pointer input while disabled");
            false
        } else if self.sim.is_rotating() {
            log::trace!("ignoring pointer input during twist");
            false
        } else {
            true
        }
    }

    fn reset_gesture(&mut self) {
        self.gesture = None;
    }

    fn hide_highlight(&mut self) {
        if self.highlight_visible {
            self.sim.scene_mut().set_face_highlight(&FaceHighlight::hidden());
            self.highlight_visible = false;
        }
    }
}
