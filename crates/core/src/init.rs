//! Initial-state strategies for a grid.

use crate::grid::Grid;
use crate::pattern::Pattern;
use crate::prng::Xorshift64;
use crate::rule::CellState;
use serde::{Deserialize, Serialize};

/// How a grid is populated on initialize, reset, or resize.
///
/// Every strategy starts from an all-quiescent grid. Random strategies carry
/// their own seed so that the same strategy always produces the same grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitStrategy {
    /// Every cell quiescent.
    AllDead,
    /// Each cell independently active with probability `density`.
    UniformRandom { density: f64, seed: u64 },
    /// One pattern stamped at a fixed origin.
    SeedPattern {
        pattern: Pattern,
        origin_x: isize,
        origin_y: isize,
    },
    /// One pattern stamped at `count` random origins.
    Scatter {
        pattern: Pattern,
        count: usize,
        seed: u64,
    },
}

impl InitStrategy {
    /// Overwrites `grid` according to this strategy.
    pub fn populate<C: CellState>(&self, grid: &mut Grid<C>) {
        grid.fill(C::default());
        match self {
            InitStrategy::AllDead => {}
            InitStrategy::UniformRandom { density, seed } => {
                let mut rng = Xorshift64::new(*seed);
                for cell in grid.cells_mut() {
                    if rng.chance(*density) {
                        *cell = C::active();
                    }
                }
            }
            InitStrategy::SeedPattern {
                pattern,
                origin_x,
                origin_y,
            } => {
                pattern.stamp(grid, *origin_x, *origin_y, C::active());
            }
            InitStrategy::Scatter {
                pattern,
                count,
                seed,
            } => {
                let mut rng = Xorshift64::new(*seed);
                for _ in 0..*count {
                    let (Some(x), Some(y)) =
                        (rng.next_usize(grid.cols()), rng.next_usize(grid.rows()))
                    else {
                        break;
                    };
                    pattern.stamp(grid, x as isize, y as isize, C::active());
                }
            }
        }
    }
}
