use crate::{Axis, LAYER_COUNT_RANGE};

/// Error produced when constructing or manipulating a puzzle.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Requested layer count is not supported.
    #[error(
        "layer count {0} is out of range {lo}..={hi}",
        lo = LAYER_COUNT_RANGE.start(),
        hi = LAYER_COUNT_RANGE.end()
    )]
    BadLayerCount(u8),
    /// Layer index does not exist on the puzzle.
    #[error("layer {layer} on axis {axis} is out of range for {layer_count} layers")]
    LayerOutOfRange {
        /// Axis of the layer.
        axis: Axis,
        /// Requested layer.
        layer: u8,
        /// Number of layers along each axis.
        layer_count: u8,
    },
    /// Cubie ID does not refer to a cubie on the puzzle.
    #[error("no cubie with ID {0}")]
    UnknownCubie(u32),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            "layer count 12 is out of range 1..=9",
            PuzzleError::BadLayerCount(12).to_string(),
        );
        assert_eq!(
            "layer 3 on axis Y is out of range for 3 layers",
            PuzzleError::LayerOutOfRange {
                axis: Axis::Y,
                layer: 3,
                layer_count: 3,
            }
            .to_string(),
        );
    }
}
