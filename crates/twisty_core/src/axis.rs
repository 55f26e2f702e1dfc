use cgmath::Vector3;
use float_ord::FloatOrd;

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// All three axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns an iterator over all axes.
    pub fn iter() -> impl DoubleEndedIterator<Item = Axis> {
        Self::ALL.into_iter()
    }

    /// Returns the index of this axis in a 3-component array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the perpendicular axes from this one, using the right-hand
    /// rule. (The cross product of the returned axes is the input.)
    ///
    /// A positive quarter turn around `self` carries the first axis onto the
    /// second.
    pub fn perpendiculars(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Y, Z], // X+ => rotate from Y+ to Z+.
            Y => [Z, X], // Y+ => rotate from Z+ to X+.
            Z => [X, Y], // Z+ => rotate from X+ to Y+.
        }
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }

    /// Returns the component of `v` along this axis.
    pub fn component(self, v: Vector3<f32>) -> f32 {
        v[self.index()]
    }

    /// Returns the axis along which `v` has the largest magnitude.
    ///
    /// Ties are broken in the order X, Y, Z. A zero vector returns X.
    pub fn dominant(v: Vector3<f32>) -> Axis {
        // `max_by_key()` keeps the last maximum, so iterate backwards.
        Self::iter()
            .rev()
            .max_by_key(|&axis| FloatOrd(axis.component(v).abs()))
            .unwrap_or(Axis::X)
    }
}
