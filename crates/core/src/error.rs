//! Error types for the cellgrid core.

use thiserror::Error;

/// Errors produced by grid and simulation operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// Cols or rows was zero, or `cols * rows` overflowed, when creating a grid.
    #[error("invalid dimensions: cols and rows must be non-zero")]
    InvalidDimensions,

    /// A cell buffer did not match the declared grid dimensions.
    #[error("dimension mismatch: expected {expected} cells for {cols}x{rows}, got {got}")]
    DimensionMismatch {
        cols: usize,
        rows: usize,
        expected: usize,
        got: usize,
    },

    /// A rule parameter was present but unusable.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// No rule is registered under this name.
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// No seed pattern is registered under this name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// No parameter preset is registered under this name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Reading or writing an artifact (seed file, PNG) failed.
    #[error("i/o error: {0}")]
    Io(String),
}
