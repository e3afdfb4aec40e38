//! Pure-computation pixel buffer conversion from a [`Grid`].
//!
//! Always available (no feature gate) so the `png` snapshot path and any
//! other renderer share the same color mapping.

use cellgrid_core::Grid;
use cellgrid_gray_scott::ReactionCell;
use cellgrid_life::LifeCell;

/// Maps one cell to an RGBA8 color.
pub trait CellColor {
    fn color(&self) -> [u8; 4];
}

/// Life background (`#050505`).
pub const LIFE_BACKGROUND: [u8; 4] = [0x05, 0x05, 0x05, 0xff];

/// Life trail ramp from faint (index 0) to alive (index 10, `#00ff9d`).
pub const LIFE_TRAIL: [[u8; 3]; 11] = [
    [0x05, 0x05, 0x05],
    [0x00, 0x1a, 0x10],
    [0x00, 0x33, 0x20],
    [0x00, 0x4d, 0x30],
    [0x00, 0x66, 0x40],
    [0x00, 0x80, 0x50],
    [0x00, 0x99, 0x60],
    [0x00, 0xb3, 0x70],
    [0x00, 0xcc, 0x80],
    [0x00, 0xe6, 0x90],
    [0x00, 0xff, 0x9d],
];

impl CellColor for LifeCell {
    fn color(&self) -> [u8; 4] {
        let t = if self.alive { 1.0 } else { self.trail };
        if t.is_nan() || t <= 0.0 {
            return LIFE_BACKGROUND;
        }
        let idx = ((t * 10.0).floor() as usize).min(LIFE_TRAIL.len() - 1);
        let [r, g, b] = LIFE_TRAIL[idx];
        [r, g, b, 0xff]
    }
}

impl CellColor for ReactionCell {
    /// Cyan where A dominates, black where B dominates.
    fn color(&self) -> [u8; 4] {
        let c = ((self.a - self.b) * 255.0).floor().clamp(0.0, 255.0) as u8;
        let g = 255 - c;
        [0, g, g.saturating_add(50), 255]
    }
}

/// Renders a grid as an RGBA8 buffer, each cell a `scale x scale` block.
///
/// The buffer is `(cols * scale) * (rows * scale) * 4` bytes in row-major
/// order. A `scale` of 0 is treated as 1.
pub fn grid_to_rgba<C: CellColor>(grid: &Grid<C>, scale: usize) -> Vec<u8> {
    let scale = scale.max(1);
    let row_bytes = grid.cols() * scale * 4;
    let mut buf = Vec::with_capacity(row_bytes * grid.rows() * scale);
    for y in 0..grid.rows() {
        let start = buf.len();
        for cell in grid.row(y) {
            let px = cell.color();
            for _ in 0..scale {
                buf.extend_from_slice(&px);
            }
        }
        for _ in 1..scale {
            buf.extend_from_within(start..start + row_bytes);
        }
    }
    buf
}
