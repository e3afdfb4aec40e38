//! Named Game of Life seed patterns.
//!
//! Offsets use screen orientation (y grows downward). Patterns are stamped
//! around the grid center, except the Gosper gun which sits up and to the
//! left so its glider stream has room to travel toward the bottom right.

use crate::DEFAULT_DENSITY;
use cellgrid_core::error::SimError;
use cellgrid_core::{InitStrategy, Pattern};
use tracing::debug;

/// Every pattern name accepted by [`pattern`].
pub const PATTERN_NAMES: &[&str] = &[
    "glider", "lwss", "pulsar", "diehard", "gosper", "block", "blinker",
];

const GLIDER: &[(isize, isize)] = &[(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)];

const LWSS: &[(isize, isize)] = &[
    (-2, -1),
    (1, -1),
    (-3, 0),
    (-3, 1),
    (1, 1),
    (-3, 2),
    (-2, 2),
    (-1, 2),
    (0, 2),
];

/// Methuselah that vanishes at generation 130.
const DIEHARD: &[(isize, isize)] = &[(-3, 0), (-2, 0), (-2, 1), (2, 1), (3, -1), (3, 1), (4, 1)];

#[rustfmt::skip]
const GOSPER: &[(isize, isize)] = &[
    (0, 4), (0, 5), (1, 4), (1, 5), (10, 4), (10, 5), (10, 6), (11, 3), (11, 7),
    (12, 2), (12, 8), (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
    (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
    (22, 5), (24, 0), (24, 1), (24, 5), (24, 6), (34, 2), (34, 3), (35, 2), (35, 3),
];

const BLOCK: &[(isize, isize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

const BLINKER: &[(isize, isize)] = &[(-1, 0), (0, 0), (1, 0)];

/// Offset of the Gosper gun origin from the grid center.
const GOSPER_SHIFT: (isize, isize) = (-15, -5);

/// Period-3 pulsar: four mirrored quadrants of three-cell bars.
fn pulsar() -> Pattern {
    let mut offsets = Vec::with_capacity(48);
    for i in 2..=4 {
        for (mx, my) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
            offsets.extend([(i * mx, my), (i * mx, 6 * my), (mx, i * my), (6 * mx, i * my)]);
        }
    }
    offsets.sort_unstable();
    offsets.dedup();
    Pattern::from_offsets(&offsets)
}

/// Looks up a pattern by name.
///
/// Returns `SimError::UnknownPattern` for names not in [`PATTERN_NAMES`].
pub fn pattern(name: &str) -> Result<Pattern, SimError> {
    let offsets = match name {
        "glider" => GLIDER,
        "lwss" => LWSS,
        "diehard" => DIEHARD,
        "gosper" => GOSPER,
        "block" => BLOCK,
        "blinker" => BLINKER,
        "pulsar" => return Ok(pulsar()),
        _ => return Err(SimError::UnknownPattern(name.to_string())),
    };
    Ok(Pattern::from_offsets(offsets))
}

/// Where a named pattern is stamped on a `cols x rows` grid.
pub fn origin(name: &str, cols: usize, rows: usize) -> (isize, isize) {
    let cx = (cols / 2) as isize;
    let cy = (rows / 2) as isize;
    if name == "gosper" {
        (cx + GOSPER_SHIFT.0, cy + GOSPER_SHIFT.1)
    } else {
        (cx, cy)
    }
}

/// Initial state that places a named pattern on an otherwise empty grid.
pub fn preset(name: &str, cols: usize, rows: usize) -> Result<InitStrategy, SimError> {
    let pattern = pattern(name)?;
    let (origin_x, origin_y) = origin(name, cols, rows);
    debug!(pattern = name, cells = pattern.len(), origin_x, origin_y, "life preset");
    Ok(InitStrategy::SeedPattern {
        pattern,
        origin_x,
        origin_y,
    })
}

/// Initial state with each cell alive at the default density.
pub fn random(seed: u64) -> InitStrategy {
    InitStrategy::UniformRandom {
        density: DEFAULT_DENSITY,
        seed,
    }
}
