use serde::{Deserialize, Serialize};
use twisty_core::{LAYER_COUNT_RANGE, PuzzleGeometry};

/// Puzzle size and layout preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PuzzlePreferences {
    /// Number of layers along each axis.
    pub layer_count: u8,
    /// Edge length of one cubie.
    pub cubie_size: f32,
    /// Space between adjacent cubies.
    pub gap: f32,
}
impl Default for PuzzlePreferences {
    fn default() -> Self {
        let PuzzleGeometry {
            layer_count,
            cubie_size,
            gap,
        } = PuzzleGeometry::default();
        Self {
            layer_count,
            cubie_size,
            gap,
        }
    }
}
impl PuzzlePreferences {
    /// Returns an error if the layout cannot be built.
    pub fn validate(&self) -> eyre::Result<()> {
        eyre::ensure!(
            LAYER_COUNT_RANGE.contains(&self.layer_count),
            "layer count {} is out of range {LAYER_COUNT_RANGE:?}",
            self.layer_count,
        );
        eyre::ensure!(
            self.cubie_size.is_finite() && self.cubie_size > 0.0,
            "cubie size must be positive",
        );
        eyre::ensure!(
            self.gap.is_finite() && self.gap >= 0.0,
            "gap must be non-negative",
        );
        Ok(())
    }

    /// Returns the geometry used to place cubies.
    pub fn geometry(&self) -> PuzzleGeometry {
        PuzzleGeometry {
            layer_count: self.layer_count,
            cubie_size: self.cubie_size,
            gap: self.gap,
        }
    }
}

#[cfg(test)]
mod tests {
    use twisty_core::DEFAULT_LAYER_COUNT;

    use super::*;

    #[test]
    fn test_default_geometry() {
        let geom = PuzzlePreferences::default().geometry();
        assert_eq!(DEFAULT_LAYER_COUNT, geom.layer_count);
        assert_eq!(PuzzleGeometry::default(), geom);
    }
}
