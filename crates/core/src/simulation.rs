//! Double-buffered grid simulation driven by a pluggable [`Rule`].
//!
//! `GridSimulation` owns two grids of identical size. A step reads only the
//! current grid, writes every next state into the scratch grid, then swaps
//! the two. Nothing computed during a step is visible to the same step.

use crate::error::SimError;
use crate::grid::Grid;
use crate::init::InitStrategy;
use crate::rule::Rule;
use crate::topology::{Boundary, MAX_NEIGHBORS};
use serde_json::Value;
use tracing::{debug, trace};

/// Object-safe view of a running simulation.
///
/// Lets hosts switch between rule types at runtime via `Box<dyn Simulation>`.
pub trait Simulation {
    /// Advance by one generation.
    fn step(&mut self);

    /// Completed steps since the last initialize, reset, or resize.
    fn generation(&self) -> u64;

    /// Grid width in cells.
    fn cols(&self) -> usize;

    /// Grid height in cells.
    fn rows(&self) -> usize;

    /// Current rule parameters as a JSON object.
    fn params(&self) -> Value;

    /// Schema for the rule parameters.
    fn param_schema(&self) -> Value;
}

/// A grid simulation with a read-old/write-new step.
#[derive(Debug, Clone)]
pub struct GridSimulation<R: Rule> {
    current: Grid<R::Cell>,
    scratch: Grid<R::Cell>,
    generation: u64,
    rule: R,
    boundary: Boundary,
}

impl<R: Rule> GridSimulation<R> {
    /// Allocates both buffers and populates the current one per `seed`.
    ///
    /// Returns `SimError::InvalidDimensions` if `cols` or `rows` is zero.
    pub fn initialize(
        cols: usize,
        rows: usize,
        seed: &InitStrategy,
        rule: R,
    ) -> Result<Self, SimError> {
        let mut current = Grid::new(cols, rows)?;
        seed.populate(&mut current);
        debug!(rule = rule.name(), cols, rows, ?seed, "initialized grid");
        Ok(Self::from_grid(current, rule))
    }

    /// Wraps a caller-built grid. Generation starts at 0.
    pub fn from_grid(grid: Grid<R::Cell>, rule: R) -> Self {
        Self {
            scratch: grid.clone(),
            current: grid,
            generation: 0,
            rule,
            boundary: Boundary::default(),
        }
    }

    /// Sets the edge behavior for neighbor lookups.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Edge behavior for neighbor lookups.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// The rule driving this simulation.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Mutable access to the rule, for parameter changes between steps.
    pub fn rule_mut(&mut self) -> &mut R {
        &mut self.rule
    }

    /// Completed steps since the last initialize, reset, or resize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the state after the last completed step or paint.
    pub fn snapshot(&self) -> &Grid<R::Cell> {
        &self.current
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        let cols = self.current.cols();
        for (y, row) in self.scratch.cells_mut().chunks_mut(cols).enumerate() {
            compute_row(&self.rule, self.boundary, &self.current, y, row);
        }
        self.finish_step();
    }

    /// Advances `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    fn finish_step(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "step complete");
    }

    /// Sets every in-bounds cell within Chebyshev distance `radius` of
    /// `(x, y)` to `state`, bypassing the rule. Out-of-bounds cells are
    /// skipped, never wrapped.
    pub fn paint(&mut self, x: isize, y: isize, radius: usize, state: R::Cell) {
        self.paint_where(x, y, radius, state, |_, _| true);
    }

    /// Like [`paint`](Self::paint) but with a Euclidean (disk) brush.
    pub fn paint_disk(&mut self, x: isize, y: isize, radius: usize, state: R::Cell) {
        let r2 = (radius as i128) * (radius as i128);
        self.paint_where(x, y, radius, state, |dx, dy| dx * dx + dy * dy <= r2);
    }

    fn paint_where(
        &mut self,
        x: isize,
        y: isize,
        radius: usize,
        state: R::Cell,
        inside: impl Fn(i128, i128) -> bool,
    ) {
        let r = isize::try_from(radius).unwrap_or(isize::MAX);
        let max_x = self.current.cols() as isize - 1;
        let max_y = self.current.rows() as isize - 1;
        let x0 = x.saturating_sub(r).max(0);
        let x1 = x.saturating_add(r).min(max_x);
        let y0 = y.saturating_sub(r).max(0);
        let y1 = y.saturating_add(r).min(max_y);
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                if inside(cx as i128 - x as i128, cy as i128 - y as i128) {
                    self.current.set_clipped(cx, cy, state);
                }
            }
        }
    }

    /// Re-populates both buffers per `seed` and resets the generation to 0.
    pub fn reset(&mut self, seed: &InitStrategy) {
        seed.populate(&mut self.current);
        self.scratch.cells_mut().copy_from_slice(self.current.cells());
        self.generation = 0;
        debug!(rule = self.rule.name(), ?seed, "reset grid");
    }

    /// Reallocates both buffers at a new size and populates them per `seed`.
    ///
    /// On error the simulation is left unchanged.
    pub fn resize(
        &mut self,
        cols: usize,
        rows: usize,
        seed: &InitStrategy,
    ) -> Result<(), SimError> {
        let mut current = Grid::new(cols, rows)?;
        seed.populate(&mut current);
        self.scratch = current.clone();
        self.current = current;
        self.generation = 0;
        debug!(rule = self.rule.name(), cols, rows, "resized grid");
        Ok(())
    }

    /// The neighbors the rule would receive for `(x, y)` on the current grid.
    ///
    /// Returns `None` if `(x, y)` is out of bounds.
    pub fn neighbors_of(&self, x: usize, y: usize) -> Option<Vec<R::Cell>> {
        self.current.get(x, y)?;
        let offsets = self.rule.neighborhood().offsets();
        let mut buf = [R::Cell::default(); MAX_NEIGHBORS];
        let n = gather(&self.current, x, y, offsets, self.boundary, &mut buf);
        Some(buf[..n].to_vec())
    }
}

#[cfg(feature = "parallel")]
impl<R> GridSimulation<R>
where
    R: Rule + Sync,
    R::Cell: Send + Sync,
{
    /// [`step`](Self::step) with rows computed on the rayon pool.
    ///
    /// Workers only read the current grid and each owns a disjoint row of
    /// the scratch grid; the swap happens after every row is done.
    pub fn par_step(&mut self) {
        use rayon::prelude::*;

        let cols = self.current.cols();
        let rule = &self.rule;
        let boundary = self.boundary;
        let current = &self.current;
        self.scratch
            .cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(y, row)| compute_row(rule, boundary, current, y, row));
        self.finish_step();
    }
}

impl<R: Rule> Simulation for GridSimulation<R> {
    fn step(&mut self) {
        GridSimulation::step(self);
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn cols(&self) -> usize {
        self.current.cols()
    }

    fn rows(&self) -> usize {
        self.current.rows()
    }

    fn params(&self) -> Value {
        self.rule.params()
    }

    fn param_schema(&self) -> Value {
        self.rule.param_schema()
    }
}

/// Computes row `y` of the next generation into `out`.
fn compute_row<R: Rule>(
    rule: &R,
    boundary: Boundary,
    current: &Grid<R::Cell>,
    y: usize,
    out: &mut [R::Cell],
) {
    let offsets = rule.neighborhood().offsets();
    let mut buf = [R::Cell::default(); MAX_NEIGHBORS];
    for (x, (slot, &cell)) in out.iter_mut().zip(current.row(y)).enumerate() {
        let n = gather(current, x, y, offsets, boundary, &mut buf);
        *slot = rule.apply(cell, &buf[..n]);
    }
}

/// Copies the neighbors of `(x, y)` into `out`, returning how many were written.
fn gather<C: Copy + Default>(
    grid: &Grid<C>,
    x: usize,
    y: usize,
    offsets: &[(isize, isize)],
    boundary: Boundary,
    out: &mut [C; MAX_NEIGHBORS],
) -> usize {
    let cells = grid.cells();
    let cols = grid.cols();
    for (slot, &(dx, dy)) in out.iter_mut().zip(offsets) {
        let nx = boundary.resolve(x as isize + dx, cols);
        let ny = boundary.resolve(y as isize + dy, grid.rows());
        *slot = match (nx, ny) {
            (Some(nx), Some(ny)) => cells[ny * cols + nx],
            _ => C::default(),
        };
    }
    offsets.len()
}
