//! Puzzle interaction state manager: turns pointer input into layer twists,
//! animates them, and keeps the logical puzzle in sync with the host's scene.
//!
//! The host owns rendering and hands this crate ray-intersection results and
//! frame ticks. Everything the engine needs from the host's scene graph goes
//! through [`SceneGraph`], and input listener registration goes through
//! [`InputHost`].

mod animations;
mod drag;
mod error;
mod gesture;
mod highlight;
mod input;
mod layers;
mod raycast;
mod scene;
mod simulation;
mod view;

pub use animations::{ANGLE_EPSILON, TwistAnimation, TwistStep, snap_to_quarter_turn};
pub use drag::{
    CameraRelativeResolver, DragInput, DragResolver, FaceTableResolver, TwistIntent,
    drag_resolver,
};
pub use error::TwistError;
pub use gesture::{DragAxis, DragTracker, Gesture};
pub use highlight::FaceHighlight;
pub use input::{InputHost, InputSubscription, ListenerId, ListenerTarget, PointerEventKind};
pub use layers::{LayerGroup, disband, group_layer};
pub use raycast::{CameraBasis, FaceSelection, RayHit, resolve, transform_direction};
pub use scene::{CubieSpawn, SceneGraph};
pub use simulation::PuzzleSimulation;
pub use view::{PointerEvent, PuzzleView};
