use std::fmt;

use crate::{Axis, Sign};

/// Quarter turn of a single layer. This is the minimal description of a move
/// needed to replay or invert it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Axis around which the layer turns.
    pub axis: Axis,
    /// Layer index along `axis`, from `0` to `layer_count - 1`.
    pub layer: u8,
    /// Positive for a right-handed quarter turn around `axis`.
    pub direction: Sign,
}
impl Move {
    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: -self.direction,
            ..self
        }
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            axis,
            layer,
            direction,
        } = self;
        write!(f, "{axis}{layer}{direction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_rev() {
        let m = Move {
            axis: Axis::Z,
            layer: 2,
            direction: Sign::Neg,
        };
        assert_eq!(Sign::Pos, m.rev().direction);
        assert_eq!(m, m.rev().rev());
        assert_eq!("Z2-", m.to_string());
    }
}
