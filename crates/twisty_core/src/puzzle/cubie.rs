use std::fmt;
use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use crate::{Axis, Face, Sign};

/// ID of a cubie within a [`crate::Puzzle`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubieId(pub u32);
impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl CubieId {
    pub(crate) fn to_usize(self) -> usize {
        self.0 as usize
    }
}

/// Logical grid position of a cubie: one coordinate per axis, each from `0`
/// to `layer_count - 1`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubieIndex(pub [u8; 3]);
impl Index<Axis> for CubieIndex {
    type Output = u8;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}
impl IndexMut<Axis> for CubieIndex {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis.index()]
    }
}
impl fmt::Display for CubieIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}
impl CubieIndex {
    /// Constructs an index from its left-right, down-up, and back-front
    /// coordinates.
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self([x, y, z])
    }

    /// Returns the index after a quarter turn around `axis`.
    ///
    /// The coordinate along `axis` is unchanged. With `[p, q]` the
    /// [perpendiculars](Axis::perpendiculars) of `axis` and `m = layer_count -
    /// 1`, a positive turn maps `(p, q)` to `(m - q, p)` and a negative turn
    /// maps `(p, q)` to `(q, m - p)`. These are inverses of each other.
    #[must_use]
    pub fn twisted(self, axis: Axis, direction: Sign, layer_count: u8) -> Self {
        let m = layer_count - 1;
        let [p, q] = axis.perpendiculars();
        let (old_p, old_q) = (self[p], self[q]);
        let mut ret = self;
        match direction {
            Sign::Pos => {
                ret[p] = m - old_q;
                ret[q] = old_p;
            }
            Sign::Neg => {
                ret[p] = old_q;
                ret[q] = m - old_p;
            }
        }
        ret
    }

    /// Returns the faces of the puzzle that this position touches. A cubie
    /// created here carries one sticker for each of them.
    pub fn outer_faces(self, layer_count: u8) -> SmallVec<[Face; 3]> {
        let m = layer_count - 1;
        let mut ret = SmallVec::new();
        for axis in Axis::iter() {
            if self[axis] == m {
                ret.push(Face::new(axis, Sign::Pos));
            }
            if self[axis] == 0 {
                ret.push(Face::new(axis, Sign::Neg));
            }
        }
        ret
    }
}

/// Unit piece of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubie<R> {
    /// Current logical position.
    pub(super) index: CubieIndex,
    /// Position the cubie was created at, which determines its colors.
    pub(super) home: CubieIndex,
    /// Handle to the host's visual representation.
    pub(super) renderable: R,
}
impl<R> Cubie<R> {
    /// Returns the current logical position of the cubie.
    pub fn index(&self) -> CubieIndex {
        self.index
    }
    /// Returns the position the cubie was created at.
    pub fn home(&self) -> CubieIndex {
        self.home
    }
    /// Returns the handle to the cubie's visual representation.
    pub fn renderable(&self) -> &R {
        &self.renderable
    }
    /// Returns the layer that the cubie is in along `axis`.
    pub fn layer(&self, axis: Axis) -> u8 {
        self.index[axis]
    }
    /// Returns the faces that carry a sticker on this cubie, in terms of its
    /// original orientation.
    pub fn sticker_faces(&self, layer_count: u8) -> SmallVec<[Face; 3]> {
        self.home.outer_faces(layer_count)
    }
}
