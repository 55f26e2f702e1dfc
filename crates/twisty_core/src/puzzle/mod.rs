//! Puzzle model: a fixed set of `N³` cubies and their logical positions.

use std::ops::Index;

use itertools::Itertools;

use crate::{Axis, LAYER_COUNT_RANGE, PuzzleError, Sign};

mod cubie;
mod geometry;

pub use cubie::{Cubie, CubieId, CubieIndex};
pub use geometry::PuzzleGeometry;

/// N×N×N cube puzzle.
///
/// `R` is the host's handle type for the visual representation of each
/// cubie. The puzzle never inspects it except to compare handles.
#[derive(Debug, Clone)]
pub struct Puzzle<R> {
    layer_count: u8,
    cubies: Vec<Cubie<R>>,
}
impl<R> Index<CubieId> for Puzzle<R> {
    type Output = Cubie<R>;

    fn index(&self, id: CubieId) -> &Self::Output {
        &self.cubies[id.to_usize()]
    }
}
impl<R> Puzzle<R> {
    /// Constructs a puzzle in its initial state, calling `spawn` once per
    /// cubie (in X-major order) to create its renderable.
    pub fn new(
        layer_count: u8,
        mut spawn: impl FnMut(CubieIndex) -> R,
    ) -> Result<Self, PuzzleError> {
        if !LAYER_COUNT_RANGE.contains(&layer_count) {
            return Err(PuzzleError::BadLayerCount(layer_count));
        }

        let n = layer_count;
        let cubies = itertools::iproduct!(0..n, 0..n, 0..n)
            .map(|(x, y, z)| {
                let index = CubieIndex::new(x, y, z);
                Cubie {
                    index,
                    home: index,
                    renderable: spawn(index),
                }
            })
            .collect();

        Ok(Self {
            layer_count,
            cubies,
        })
    }

    /// Returns the number of layers along each axis.
    pub fn layer_count(&self) -> u8 {
        self.layer_count
    }
    /// Returns the number of cubies.
    pub fn len(&self) -> usize {
        self.cubies.len()
    }
    /// Returns whether the puzzle has no cubies. This is never true for a
    /// valid puzzle.
    pub fn is_empty(&self) -> bool {
        self.cubies.is_empty()
    }

    /// Returns all cubies, indexed by [`CubieId`].
    pub fn cubies(&self) -> &[Cubie<R>] {
        &self.cubies
    }
    /// Iterates over all cubies along with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (CubieId, &Cubie<R>)> {
        self.cubies
            .iter()
            .enumerate()
            .map(|(i, cubie)| (CubieId(i as u32), cubie))
    }
    /// Returns a cubie, or an error if the ID is invalid.
    pub fn cubie(&self, id: CubieId) -> Result<&Cubie<R>, PuzzleError> {
        self.cubies
            .get(id.to_usize())
            .ok_or(PuzzleError::UnknownCubie(id.0))
    }

    /// Returns an error if `layer` does not exist along `axis`.
    pub fn check_layer(&self, axis: Axis, layer: u8) -> Result<(), PuzzleError> {
        if layer < self.layer_count {
            Ok(())
        } else {
            Err(PuzzleError::LayerOutOfRange {
                axis,
                layer,
                layer_count: self.layer_count,
            })
        }
    }

    /// Iterates over the cubies whose current index along `axis` is `layer`.
    pub fn cubies_in_layer(&self, axis: Axis, layer: u8) -> impl Iterator<Item = CubieId> + '_ {
        self.iter()
            .filter(move |(_, cubie)| cubie.layer(axis) == layer)
            .map(|(id, _)| id)
    }

    /// Updates the logical index of each cubie in `cubies` to reflect a
    /// quarter turn around `axis`.
    ///
    /// No cubie is modified if any ID is invalid.
    pub fn commit_twist(
        &mut self,
        cubies: &[CubieId],
        axis: Axis,
        direction: Sign,
    ) -> Result<(), PuzzleError> {
        if let Some(bad) = cubies.iter().find(|id| id.to_usize() >= self.cubies.len()) {
            return Err(PuzzleError::UnknownCubie(bad.0));
        }
        for &id in cubies {
            let cubie = &mut self.cubies[id.to_usize()];
            cubie.index = cubie.index.twisted(axis, direction, self.layer_count);
        }
        log::trace!(
            "committed {} cubies around {axis}{direction}",
            cubies.len(),
        );
        Ok(())
    }

    /// Returns whether the cubie indices cover every grid position exactly
    /// once.
    pub fn validate_indices(&self) -> bool {
        let n = self.layer_count as usize;
        self.cubies.len() == n * n * n
            && self
                .cubies
                .iter()
                .all(|c| c.index.0.iter().all(|&i| i < self.layer_count))
            && self.cubies.iter().map(|c| c.index).all_unique()
    }

    /// Returns whether every cubie is at the position it was created at.
    ///
    /// This ignores orientation, so it is not a full solved check.
    pub fn is_at_home(&self) -> bool {
        self.cubies.iter().all(|c| c.index == c.home)
    }

    /// Consumes the puzzle, returning every renderable so the host can
    /// destroy them.
    pub fn into_renderables(self) -> impl Iterator<Item = R> {
        self.cubies.into_iter().map(|c| c.renderable)
    }
}
impl<R: PartialEq> Puzzle<R> {
    /// Returns the cubie that owns `renderable`, if any.
    pub fn cubie_from_renderable(&self, renderable: &R) -> Option<CubieId> {
        self.iter()
            .find(|(_, cubie)| cubie.renderable == *renderable)
            .map(|(id, _)| id)
    }
}
