//! Reproducible description of a simulation run.
//!
//! A [`Seed`] captures everything needed to recreate a run: rule name, grid
//! dimensions, rule parameters, PRNG seed, and step count.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a simulation run.
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// grids. `params` holds rule parameters plus initial-state selectors (for
/// example a pattern name); their meaning is rule-specific.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub rule: String,
    pub cols: usize,
    pub rows: usize,
    #[serde(default = "empty_object")]
    pub params: serde_json::Value,
    pub seed: u64,
    #[serde(default)]
    pub steps: usize,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Seed {
    /// Creates a Seed with empty params and zero steps.
    pub fn new(rule: &str, cols: usize, rows: usize, seed: u64) -> Self {
        Self {
            rule: rule.to_string(),
            cols,
            rows,
            params: empty_object(),
            seed,
            steps: 0,
        }
    }

    /// Parses a Seed from JSON text and validates it.
    pub fn from_json_str(text: &str) -> Result<Self, SimError> {
        let seed: Seed = serde_json::from_str(text).map_err(|e| SimError::InvalidParam {
            name: "seed".into(),
            reason: e.to_string(),
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks for non-zero dimensions whose product fits in `usize`.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(SimError::InvalidDimensions);
        }
        self.cols
            .checked_mul(self.rows)
            .ok_or(SimError::InvalidDimensions)?;
        Ok(())
    }
}
