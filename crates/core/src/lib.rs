#![deny(unsafe_code)]
//! Core types for cellgrid, a double-buffered cellular grid simulator.
//!
//! Provides the generic [`Grid`], the [`Rule`] and [`CellState`] traits,
//! [`GridSimulation`] with its read-old/write-new step, [`InitStrategy`] and
//! [`Pattern`] seeding, neighbor [`Boundary`] handling, the `Xorshift64`
//! PRNG, the reproducible [`Seed`], and parameter helpers.

pub mod error;
pub mod grid;
pub mod init;
pub mod params;
pub mod pattern;
pub mod prng;
pub mod rule;
pub mod seed;
pub mod simulation;
pub mod topology;

pub use error::SimError;
pub use grid::Grid;
pub use init::InitStrategy;
pub use pattern::Pattern;
pub use prng::Xorshift64;
pub use rule::{CellState, Rule};
pub use seed::Seed;
pub use simulation::{GridSimulation, Simulation};
pub use topology::{Boundary, Neighborhood};
