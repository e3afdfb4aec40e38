//! Neighborhood shapes and edge handling for neighbor lookups.

use serde::{Deserialize, Serialize};

/// Largest neighborhood any rule can request.
pub const MAX_NEIGHBORS: usize = 8;

/// Moore offsets: orthogonal (N, E, S, W) first, then diagonal (NW, NE, SE, SW).
///
/// Keeping the orthogonals first makes the von Neumann neighborhood a prefix
/// of the Moore one, and lets stencils tell the two groups apart by position.
const MOORE_OFFSETS: [(isize, isize); MAX_NEIGHBORS] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
];

/// Which cells count as neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Neighborhood {
    /// The 8 surrounding cells.
    Moore,
    /// The 4 orthogonally adjacent cells.
    VonNeumann,
}

impl Neighborhood {
    /// Neighbor offsets in the order rules receive them.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::VonNeumann => &MOORE_OFFSETS[..4],
        }
    }

    /// Number of neighbors.
    pub fn count(self) -> usize {
        self.offsets().len()
    }
}

/// How neighbor lookups behave past the grid edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    /// Toroidal addressing: `(x + dx) mod cols`.
    #[default]
    Wrap,
    /// Coordinates clamp to the nearest edge cell.
    Clamp,
    /// Cells past the edge read as the quiescent (default) cell.
    Fixed,
}

impl Boundary {
    /// Maps a possibly out-of-range coordinate onto an axis of length `size`.
    ///
    /// Returns `None` only for [`Boundary::Fixed`] when `coord` is outside.
    pub fn resolve(self, coord: isize, size: usize) -> Option<usize> {
        let max = size as isize;
        match self {
            Boundary::Wrap => Some(coord.rem_euclid(max) as usize),
            Boundary::Clamp => Some(coord.clamp(0, max - 1) as usize),
            Boundary::Fixed => (0..max).contains(&coord).then_some(coord as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moore_has_eight_distinct_offsets_without_center() {
        let offsets = Neighborhood::Moore.offsets();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn von_neumann_is_orthogonal_prefix_of_moore() {
        let vn = Neighborhood::VonNeumann.offsets();
        assert_eq!(vn.len(), 4);
        assert_eq!(vn, &Neighborhood::Moore.offsets()[..4]);
        assert!(vn.iter().all(|&(dx, dy)| dx == 0 || dy == 0));
    }

    #[test]
    fn moore_tail_is_diagonal() {
        assert!(Neighborhood::Moore.offsets()[4..]
            .iter()
            .all(|&(dx, dy)| dx != 0 && dy != 0));
    }

    #[test]
    fn wrap_resolves_toroidally() {
        assert_eq!(Boundary::Wrap.resolve(-1, 10), Some(9));
        assert_eq!(Boundary::Wrap.resolve(10, 10), Some(0));
        assert_eq!(Boundary::Wrap.resolve(4, 10), Some(4));
    }

    #[test]
    fn clamp_resolves_to_edges() {
        assert_eq!(Boundary::Clamp.resolve(-3, 10), Some(0));
        assert_eq!(Boundary::Clamp.resolve(12, 10), Some(9));
    }

    #[test]
    fn fixed_rejects_outside() {
        assert_eq!(Boundary::Fixed.resolve(-1, 10), None);
        assert_eq!(Boundary::Fixed.resolve(10, 10), None);
        assert_eq!(Boundary::Fixed.resolve(9, 10), Some(9));
    }

    #[test]
    fn default_boundary_is_wrap() {
        assert_eq!(Boundary::default(), Boundary::Wrap);
    }

    #[test]
    fn boundary_serializes_kebab_case() {
        let json = serde_json::to_string(&Boundary::Fixed).unwrap();
        assert_eq!(json, "\"fixed\"");
        let back: Boundary = serde_json::from_str("\"clamp\"").unwrap();
        assert_eq!(back, Boundary::Clamp);
    }
}
