//! Named feed/kill combinations from the Pearson classification.

use crate::GrayScottRule;
use cellgrid_core::error::SimError;
use tracing::debug;

/// A named feed/kill pair; diffusion and dt keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub feed_rate: f64,
    pub kill_rate: f64,
}

impl Preset {
    /// Default rule with this preset's feed and kill rates.
    pub fn rule(&self) -> GrayScottRule {
        GrayScottRule {
            feed_rate: self.feed_rate,
            kill_rate: self.kill_rate,
            ..GrayScottRule::default()
        }
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "coral",
        feed_rate: 0.0545,
        kill_rate: 0.062,
    },
    Preset {
        name: "mitosis",
        feed_rate: 0.0367,
        kill_rate: 0.0649,
    },
    Preset {
        name: "fingerprint",
        feed_rate: 0.0527,
        kill_rate: 0.0616,
    },
    Preset {
        name: "worms",
        feed_rate: 0.078,
        kill_rate: 0.061,
    },
    Preset {
        name: "chaos",
        feed_rate: 0.026,
        kill_rate: 0.051,
    },
];

/// Names of every preset, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

/// Looks up a preset by name.
pub fn preset(name: &str) -> Result<&'static Preset, SimError> {
    let found = PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| SimError::UnknownPreset(name.to_string()))?;
    debug!(
        preset = found.name,
        feed = found.feed_rate,
        kill = found.kill_rate,
        "gray-scott preset"
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_resolves_and_validates() {
        for name in names() {
            let p = preset(name).unwrap();
            assert_eq!(p.name, name);
            assert!(p.rule().validate().is_ok(), "{name} fails validation");
        }
    }

    #[test]
    fn names_are_unique() {
        let mut all: Vec<_> = names().collect();
        let n = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), n);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(matches!(preset("spots"), Err(SimError::UnknownPreset(ref n)) if n == "spots"));
    }

    #[test]
    fn preset_rule_keeps_default_diffusion() {
        let rule = preset("worms").unwrap().rule();
        assert!((rule.feed_rate - 0.078).abs() < f64::EPSILON);
        assert!((rule.kill_rate - 0.061).abs() < f64::EPSILON);
        assert_eq!(rule.diffusion_a, GrayScottRule::default().diffusion_a);
        assert_eq!(rule.dt, GrayScottRule::default().dt);
    }
}
