use cgmath::Vector3;

use crate::{Axis, Sign};

/// Face of the cube, identified by its outward normal.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Face {
    /// Right (X+)
    #[default]
    R = 0,
    /// Left (X-)
    L = 1,
    /// Up (Y+)
    U = 2,
    /// Down (Y-)
    D = 3,
    /// Front (Z+)
    F = 4,
    /// Back (Z-)
    B = 5,
}
impl Face {
    /// All six faces, in order.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// Returns the face perpendicular to `axis` on the side given by `sign`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        use Face::*;

        match (axis, sign) {
            (Axis::X, Sign::Pos) => R,
            (Axis::X, Sign::Neg) => L,
            (Axis::Y, Sign::Pos) => U,
            (Axis::Y, Sign::Neg) => D,
            (Axis::Z, Sign::Pos) => F,
            (Axis::Z, Sign::Neg) => B,
        }
    }

    /// Classifies a world-space normal vector as one of the six faces.
    ///
    /// The axis is the largest-magnitude component of `normal` (ties broken
    /// in the order X, Y, Z) and the sign of that component picks between the
    /// two opposing faces. A zero component counts as negative.
    pub fn from_normal(normal: Vector3<f32>) -> Self {
        let axis = Axis::dominant(normal);
        let sign = match axis.component(normal) > 0.0 {
            true => Sign::Pos,
            false => Sign::Neg,
        };
        Self::new(axis, sign)
    }

    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which side of the cube this face is on along its axis.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(self.axis(), -self.sign())
    }

    /// Returns the outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        self.axis().unit_vec3() * self.sign().to_f32()
    }

    /// Returns the uppercase symbol for the face, such as `"R"`.
    pub fn symbol(self) -> &'static str {
        use Face::*;

        match self {
            R => "R",
            L => "L",
            U => "U",
            D => "D",
            F => "F",
            B => "B",
        }
    }
    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::vec3;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_from_own_normal() {
        assert_eq!(Face::ALL.to_vec(), Face::iter().collect::<Vec<_>>());
        for face in Face::iter() {
            assert_eq!(face, Face::from_normal(face.normal()));
            assert_eq!(face, Face::new(face.axis(), face.sign()));
            assert_eq!(face, face.opposite().opposite());
            assert_ne!(face, face.opposite());
        }
    }

    #[test]
    fn test_face_from_tilted_normal() {
        assert_eq!(Face::F, Face::from_normal(vec3(0.1, -0.2, 0.97)));
        assert_eq!(Face::D, Face::from_normal(vec3(0.3, -0.9, 0.3)));
        assert_eq!(Face::L, Face::from_normal(vec3(-0.6, 0.5, 0.5)));
        // Tie between X and Z goes to X.
        assert_eq!(Face::R, Face::from_normal(vec3(0.5, 0.0, -0.5)));
    }
}
