use cgmath::{Point3, point3};

use super::CubieIndex;
use crate::DEFAULT_LAYER_COUNT;

/// Physical layout of the cubies, used when placing renderables.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleGeometry {
    /// Number of layers along each axis.
    pub layer_count: u8,
    /// Edge length of one cubie.
    pub cubie_size: f32,
    /// Space between adjacent cubies.
    pub gap: f32,
}
impl Default for PuzzleGeometry {
    fn default() -> Self {
        Self {
            layer_count: DEFAULT_LAYER_COUNT,
            cubie_size: 1.0,
            gap: 0.05,
        }
    }
}
impl PuzzleGeometry {
    /// Returns the distance between the centers of adjacent cubies.
    pub fn spacing(&self) -> f32 {
        self.cubie_size + self.gap
    }

    /// Returns the center of the cubie at `index`, with the whole puzzle
    /// centered on the origin.
    pub fn cubie_center(&self, index: CubieIndex) -> Point3<f32> {
        let offset = (self.layer_count as f32 - 1.0) / 2.0;
        let coord = |i: u8| (i as f32 - offset) * self.spacing();
        let [x, y, z] = index.0;
        point3(coord(x), coord(y), coord(z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubie_center() {
        let geom = PuzzleGeometry {
            layer_count: 3,
            cubie_size: 1.0,
            gap: 0.5,
        };
        assert_eq!(point3(-1.5, 0.0, 1.5), geom.cubie_center(CubieIndex::new(0, 1, 2)));

        let geom = PuzzleGeometry {
            layer_count: 2,
            cubie_size: 2.0,
            gap: 0.0,
        };
        assert_eq!(point3(-1.0, 1.0, 1.0), geom.cubie_center(CubieIndex::new(0, 1, 1)));
    }
}
