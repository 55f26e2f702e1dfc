//! Cube puzzle model: cubies, layers, quarter-turn permutations, and the
//! undo/redo ledger.
//!
//! Nothing in this crate knows about rendering. Cubies carry an opaque
//! renderable handle supplied by the host, and the only geometry here is the
//! exact integer permutation applied when a layer turns.

mod axis;
mod error;
mod face;
mod history;
mod puzzle;
mod sign;
mod twist;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::error::PuzzleError;
    pub use crate::face::Face;
    pub use crate::history::MoveHistory;
    pub use crate::puzzle::*;
    pub use crate::sign::Sign;
    pub use crate::twist::Move;
}

/// Default number of layers along each axis.
pub const DEFAULT_LAYER_COUNT: u8 = 3;
/// Minimum number of layers along each axis.
pub const MIN_LAYER_COUNT: u8 = 1;
/// Maximum number of layers along each axis.
pub const MAX_LAYER_COUNT: u8 = 9;
/// Range of supported layer counts.
pub const LAYER_COUNT_RANGE: std::ops::RangeInclusive<u8> = MIN_LAYER_COUNT..=MAX_LAYER_COUNT;

/// Angle of a quarter turn, in radians.
pub const QUARTER_TURN: f32 = std::f32::consts::FRAC_PI_2;
