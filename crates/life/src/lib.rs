#![deny(unsafe_code)]
//! Conway's Game of Life for cellgrid.
//!
//! Cells carry a discrete `alive` flag plus a `trail` scalar in [0, 1] for
//! display: the trail snaps to 1 while a cell lives and fades by a fixed
//! amount per generation after it dies. The rule accepts any Life-like
//! `B…/S…` rulestring; the default is Conway's `B3/S23`.

pub mod patterns;

use cellgrid_core::error::SimError;
use cellgrid_core::params::{param_f64, param_str};
use cellgrid_core::{CellState, Grid, Rule};
use serde_json::{json, Value};

/// Conway's birth/survival rule.
pub const DEFAULT_RULESTRING: &str = "B3/S23";
/// Trail lost per generation once a cell is dead.
pub const DEFAULT_TRAIL_DECAY: f64 = 0.08;
/// Fraction of cells alive after a random fill.
pub const DEFAULT_DENSITY: f64 = 0.15;

/// One Game of Life cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LifeCell {
    pub alive: bool,
    /// Fading afterglow in [0, 1]; 1 whenever `alive` is true.
    pub trail: f64,
}

impl LifeCell {
    /// A dead cell with no trail.
    pub const DEAD: LifeCell = LifeCell {
        alive: false,
        trail: 0.0,
    };

    /// A live cell (trail 1).
    pub const ALIVE: LifeCell = LifeCell {
        alive: true,
        trail: 1.0,
    };
}

impl CellState for LifeCell {
    fn active() -> Self {
        LifeCell::ALIVE
    }
}

/// Number of live cells in a grid.
pub fn population(grid: &Grid<LifeCell>) -> usize {
    grid.count(|c| c.alive)
}

/// Life-like rule with birth and survival neighbor counts as bitmasks.
///
/// Bit `n` of `birth` set means a dead cell with `n` live Moore neighbors is
/// born; bit `n` of `survive` set means a live cell with `n` neighbors stays
/// alive.
#[derive(Debug, Clone, PartialEq)]
pub struct ConwayRule {
    birth: u16,
    survive: u16,
    trail_decay: f64,
}

impl Default for ConwayRule {
    fn default() -> Self {
        Self {
            birth: 1 << 3,
            survive: (1 << 2) | (1 << 3),
            trail_decay: DEFAULT_TRAIL_DECAY,
        }
    }
}

impl ConwayRule {
    /// Builds a rule from a rulestring such as `"B36/S23"`.
    ///
    /// Sections may come in either order and are case-insensitive.
    pub fn from_rulestring(rulestring: &str) -> Result<Self, SimError> {
        let (birth, survive) = parse_rulestring(rulestring)?;
        Ok(Self {
            birth,
            survive,
            ..Self::default()
        })
    }

    /// Extracts `rule` and `trail_decay` from a JSON object, falling back to
    /// defaults for missing keys.
    ///
    /// Returns `SimError::InvalidParam` for a malformed rulestring.
    pub fn from_json(params: &Value) -> Result<Self, SimError> {
        let rule = match param_str(params, "rule") {
            Some(s) => Self::from_rulestring(s)?,
            None => Self::default(),
        };
        Ok(rule.with_trail_decay(param_f64(params, "trail_decay", DEFAULT_TRAIL_DECAY)))
    }

    /// Sets the per-generation trail decay, clamped to [0, 1].
    pub fn with_trail_decay(mut self, decay: f64) -> Self {
        self.trail_decay = if decay.is_nan() {
            DEFAULT_TRAIL_DECAY
        } else {
            decay.clamp(0.0, 1.0)
        };
        self
    }

    /// Per-generation trail decay.
    pub fn trail_decay(&self) -> f64 {
        self.trail_decay
    }

    /// The rule in canonical `B…/S…` form.
    pub fn rulestring(&self) -> String {
        format!("B{}/S{}", mask_digits(self.birth), mask_digits(self.survive))
    }

    /// Whether a cell in state `alive` with `n` live neighbors lives next.
    pub fn next_alive(&self, alive: bool, n: usize) -> bool {
        let mask = if alive { self.survive } else { self.birth };
        n <= 8 && mask & (1 << n) != 0
    }
}

impl Rule for ConwayRule {
    type Cell = LifeCell;

    fn name(&self) -> &'static str {
        "life"
    }

    fn apply(&self, cell: LifeCell, neighbors: &[LifeCell]) -> LifeCell {
        let n = neighbors.iter().filter(|c| c.alive).count();
        if self.next_alive(cell.alive, n) {
            LifeCell::ALIVE
        } else {
            LifeCell {
                alive: false,
                trail: (cell.trail - self.trail_decay).clamp(0.0, 1.0),
            }
        }
    }

    fn params(&self) -> Value {
        json!({
            "rule": self.rulestring(),
            "trail_decay": self.trail_decay,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "rule": {
                "type": "string",
                "default": DEFAULT_RULESTRING,
                "description": "Life-like rulestring: birth and survival neighbor counts"
            },
            "trail_decay": {
                "type": "number",
                "default": DEFAULT_TRAIL_DECAY,
                "min": 0.0,
                "max": 1.0,
                "description": "Trail lost per generation after a cell dies"
            },
            "pattern": {
                "type": "string",
                "default": null,
                "description": "Named seed pattern; random fill when absent"
            },
            "density": {
                "type": "number",
                "default": DEFAULT_DENSITY,
                "min": 0.0,
                "max": 1.0,
                "description": "Live fraction for the random fill"
            }
        })
    }
}

/// Parses `B…/S…` into (birth, survive) bitmasks.
fn parse_rulestring(s: &str) -> Result<(u16, u16), SimError> {
    let invalid = |reason: &str| SimError::InvalidParam {
        name: "rule".into(),
        reason: format!("{reason} in {s:?}"),
    };

    let mut birth = None;
    let mut survive = None;
    for part in s.split('/') {
        let mut chars = part.trim().chars();
        let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('B') => &mut birth,
            Some('S') => &mut survive,
            _ => return Err(invalid("each section must start with B or S")),
        };
        if slot.is_some() {
            return Err(invalid("duplicate section"));
        }
        let mut mask = 0u16;
        for c in chars {
            let d = c
                .to_digit(10)
                .filter(|&d| d <= 8)
                .ok_or_else(|| invalid("neighbor counts must be digits 0-8"))?;
            mask |= 1 << d;
        }
        *slot = Some(mask);
    }

    match (birth, survive) {
        (Some(b), Some(s)) => Ok((b, s)),
        _ => Err(invalid("both B and S sections are required")),
    }
}

fn mask_digits(mask: u16) -> String {
    (0..=8u32)
        .filter(|d| mask & (1 << d) != 0)
        .filter_map(|d| char::from_digit(d, 10))
        .collect()
}
