//! Seed patterns: sets of cell offsets stamped relative to an origin.

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// A set of `(dx, dy)` offsets relative to an origin cell.
///
/// Stamping never wraps: offsets that land outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    offsets: Vec<(isize, isize)>,
}

impl Pattern {
    /// Builds a pattern from explicit offsets.
    pub fn from_offsets(offsets: &[(isize, isize)]) -> Self {
        Self {
            offsets: offsets.to_vec(),
        }
    }

    /// A filled square covering offsets `-r..r` on both axes (`2r x 2r` cells).
    ///
    /// `square(0)` is empty.
    pub fn square(r: usize) -> Self {
        let r = r as isize;
        let offsets = (-r..r)
            .flat_map(|dy| (-r..r).map(move |dx| (dx, dy)))
            .collect();
        Self { offsets }
    }

    /// The pattern's offsets.
    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    /// Number of cells in the pattern.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the pattern has no cells.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Writes `state` at every offset from `(origin_x, origin_y)` that lands
    /// inside `grid`. Returns how many cells were written.
    ///
    /// Offsets whose target coordinate overflows `isize` are dropped like any
    /// other off-grid cell.
    pub fn stamp<C: Clone>(
        &self,
        grid: &mut Grid<C>,
        origin_x: isize,
        origin_y: isize,
        state: C,
    ) -> usize {
        self.offsets
            .iter()
            .filter_map(|&(dx, dy)| {
                Some((origin_x.checked_add(dx)?, origin_y.checked_add(dy)?))
            })
            .filter(|&(x, y)| grid.set_clipped(x, y, state.clone()))
            .count()
    }
}
