//! Fixed-size two-dimensional grid of cells in row-major order.
//!
//! A `Grid` owns `cols * rows` cells of any value type. Accessors are
//! bounds-checked; edge behavior for neighbor reads lives in
//! [`Boundary`](crate::Boundary). Dimensions never change after
//! construction: resizing means building a new grid.

use crate::error::SimError;

/// Validates dimensions and returns the cell count.
fn checked_len(cols: usize, rows: usize) -> Result<usize, SimError> {
    if cols == 0 || rows == 0 {
        return Err(SimError::InvalidDimensions);
    }
    cols.checked_mul(rows).ok_or(SimError::InvalidDimensions)
}

/// A 2D grid of cells with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<C> {
    cols: usize,
    rows: usize,
    cells: Vec<C>,
}

impl<C: Clone> Grid<C> {
    /// Creates a grid with every cell set to `value`.
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero
    /// or if `cols * rows` overflows `usize`.
    pub fn filled(cols: usize, rows: usize, value: C) -> Result<Self, SimError> {
        let len = checked_len(cols, rows)?;
        Ok(Self {
            cols,
            rows,
            cells: vec![value; len],
        })
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: C) {
        self.cells.fill(value);
    }
}

impl<C: Clone + Default> Grid<C> {
    /// Creates a grid of default cells.
    pub fn new(cols: usize, rows: usize) -> Result<Self, SimError> {
        Self::filled(cols, rows, C::default())
    }
}

impl<C> Grid<C> {
    /// Creates a grid from a pre-built row-major cell vector.
    ///
    /// Returns `SimError::DimensionMismatch` if `cells.len() != cols * rows`.
    pub fn from_cells(cols: usize, rows: usize, cells: Vec<C>) -> Result<Self, SimError> {
        let expected = checked_len(cols, rows)?;
        if cells.len() != expected {
            return Err(SimError::DimensionMismatch {
                cols,
                rows,
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { cols, rows, cells })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only access to the row-major cell buffer.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Mutable access to the row-major cell buffer.
    pub fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    /// One row of cells.
    ///
    /// # Panics
    ///
    /// Panics if `y >= rows`.
    pub fn row(&self, y: usize) -> &[C] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Whether the signed coordinate lies inside the grid.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    /// Flat index of an in-bounds coordinate.
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&C> {
        (x < self.cols && y < self.rows).then(|| &self.cells[self.index(x, y)])
    }

    /// Mutable cell at `(x, y)`, or `None` when out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut C> {
        if x < self.cols && y < self.rows {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Sets the cell at a signed coordinate, ignoring out-of-bounds writes.
    ///
    /// Returns whether the write landed.
    pub fn set_clipped(&mut self, x: isize, y: isize, value: C) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.index(x as usize, y as usize);
        self.cells[idx] = value;
        true
    }

    /// Iterates over all cells yielding `(x, y, &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &C)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (i % self.cols, i / self.cols, c))
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, pred: impl Fn(&C) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }
}
