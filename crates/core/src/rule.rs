//! The local update rule and the cell contract it operates on.

use crate::topology::Neighborhood;
use serde_json::Value;
use std::fmt::Debug;

/// A cell value that can live in a [`GridSimulation`](crate::GridSimulation).
///
/// `Default` is the quiescent state: what `AllDead` fills the grid with and
/// what a fixed boundary reads past the edge. [`CellState::active`] is the
/// state written by pattern seeding and random fills.
pub trait CellState: Copy + Default + PartialEq + Debug {
    /// The seeded ("on") state.
    fn active() -> Self;
}

/// A local update rule.
///
/// The rule value carries its own parameters, so the same rule type can be
/// tuned between steps without touching the simulation that runs it.
pub trait Rule {
    /// The cell type this rule reads and produces.
    type Cell: CellState;

    /// Short registry name, e.g. `"life"`.
    fn name(&self) -> &'static str;

    /// Which neighbors [`Rule::apply`] receives. Defaults to Moore.
    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }

    /// Computes the next state of `cell`.
    ///
    /// `neighbors` holds exactly `self.neighborhood().count()` cells in the
    /// order given by [`Neighborhood::offsets`], all taken from the previous
    /// generation.
    fn apply(&self, cell: Self::Cell, neighbors: &[Self::Cell]) -> Self::Cell;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing every parameter: type, range, default, description.
    fn param_schema(&self) -> Value;
}
