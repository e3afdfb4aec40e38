#![deny(unsafe_code)]
//! Rule registry: maps rule names to simulations and provides CPU-side
//! snapshot rendering.
//!
//! This crate sits between `cellgrid-core` (which defines `GridSimulation`
//! and the `Simulation` trait) and the individual rule crates
//! (`cellgrid-life`, `cellgrid-gray-scott`). The CLI and any other host
//! depend on it to avoid duplicating dispatch logic.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use cellgrid_core::error::SimError;
use cellgrid_core::params::{param_bool, param_f64, param_str};
use cellgrid_core::{GridSimulation, InitStrategy, Seed, Simulation};
use cellgrid_gray_scott::GrayScottRule;
use cellgrid_life::ConwayRule;
use serde_json::Value;
use tracing::debug;

/// All available rule names.
const RULE_NAMES: &[&str] = &["life", "gray-scott"];

/// Every runnable simulation.
///
/// Wraps each rule's `GridSimulation` and delegates `Simulation` trait
/// methods. Use [`SimulationKind::from_name`] for string-based construction.
pub enum SimulationKind {
    /// Conway's Game of Life (or any Life-like rulestring).
    Life(GridSimulation<ConwayRule>),
    /// Gray-Scott reaction-diffusion.
    GrayScott(GridSimulation<GrayScottRule>),
}

impl SimulationKind {
    /// Constructs a simulation by rule name.
    ///
    /// `seed` drives every random initial state. Returns
    /// `SimError::UnknownRule` if the name is not recognized.
    pub fn from_name(
        name: &str,
        cols: usize,
        rows: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, SimError> {
        debug!(rule = name, cols, rows, seed, "building simulation");
        match name {
            "life" => {
                let rule = ConwayRule::from_json(params)?;
                let init = match param_str(params, "pattern") {
                    Some(pattern) => cellgrid_life::patterns::preset(pattern, cols, rows)?,
                    None => InitStrategy::UniformRandom {
                        density: param_f64(params, "density", cellgrid_life::DEFAULT_DENSITY),
                        seed,
                    },
                };
                let sim = GridSimulation::initialize(cols, rows, &init, rule)?;
                Ok(SimulationKind::Life(sim))
            }
            "gray-scott" => {
                let rule = GrayScottRule::from_json(params)?;
                let init = if param_bool(params, "scatter", false) {
                    cellgrid_gray_scott::scattered_squares(seed)
                } else {
                    cellgrid_gray_scott::centered_square(cols, rows)
                };
                let sim = GridSimulation::initialize(cols, rows, &init, rule)?;
                Ok(SimulationKind::GrayScott(sim))
            }
            _ => Err(SimError::UnknownRule(name.to_string())),
        }
    }

    /// Constructs a simulation from a validated seed. Does not run
    /// `seed.steps`; that is up to the caller.
    pub fn from_seed(seed: &Seed) -> Result<Self, SimError> {
        seed.validate()?;
        Self::from_name(&seed.rule, seed.cols, seed.rows, seed.seed, &seed.params)
    }

    /// Returns a slice of all recognized rule names.
    pub fn list_rules() -> &'static [&'static str] {
        RULE_NAMES
    }

    /// Registry name of the wrapped rule.
    pub fn rule_name(&self) -> &'static str {
        use cellgrid_core::Rule;
        match self {
            SimulationKind::Life(s) => s.rule().name(),
            SimulationKind::GrayScott(s) => s.rule().name(),
        }
    }

    /// Renders the current generation as RGBA8, each cell `scale x scale`.
    pub fn to_rgba(&self, scale: usize) -> Vec<u8> {
        match self {
            SimulationKind::Life(s) => pixel::grid_to_rgba(s.snapshot(), scale),
            SimulationKind::GrayScott(s) => pixel::grid_to_rgba(s.snapshot(), scale),
        }
    }
}

impl Simulation for SimulationKind {
    fn step(&mut self) {
        match self {
            #[cfg(feature = "parallel")]
            SimulationKind::Life(s) => s.par_step(),
            #[cfg(feature = "parallel")]
            SimulationKind::GrayScott(s) => s.par_step(),
            #[cfg(not(feature = "parallel"))]
            SimulationKind::Life(s) => s.step(),
            #[cfg(not(feature = "parallel"))]
            SimulationKind::GrayScott(s) => s.step(),
        }
    }

    fn generation(&self) -> u64 {
        match self {
            SimulationKind::Life(s) => s.generation(),
            SimulationKind::GrayScott(s) => s.generation(),
        }
    }

    fn cols(&self) -> usize {
        match self {
            SimulationKind::Life(s) => Simulation::cols(s),
            SimulationKind::GrayScott(s) => Simulation::cols(s),
        }
    }

    fn rows(&self) -> usize {
        match self {
            SimulationKind::Life(s) => Simulation::rows(s),
            SimulationKind::GrayScott(s) => Simulation::rows(s),
        }
    }

    fn params(&self) -> Value {
        match self {
            SimulationKind::Life(s) => s.params(),
            SimulationKind::GrayScott(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SimulationKind::Life(s) => s.param_schema(),
            SimulationKind::GrayScott(s) => s.param_schema(),
        }
    }
}
