use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::MetricDelta;
use crate::policy::Lever;

/// Lever value name -> additive delta.
pub type LeverTable = BTreeMap<String, MetricDelta>;

/// Modifier tables keyed by lever value name.
///
/// A table given in TOML replaces the built-in one for that lever entirely,
/// so it must list the neutral value itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierConfig {
    pub safety_level: LeverTable,
    pub urgency: LeverTable,
    pub labor: LeverTable,
    pub traffic: LeverTable,
}

impl ModifierConfig {
    pub fn table(&self, lever: Lever) -> &LeverTable {
        match lever {
            Lever::SafetyLevel => &self.safety_level,
            Lever::Urgency => &self.urgency,
            Lever::Labor => &self.labor,
            Lever::Traffic => &self.traffic,
        }
    }
}

fn table(entries: &[(&str, (f64, f64, f64))]) -> LeverTable {
    entries
        .iter()
        .map(|(name, (d, r, x))| (name.to_string(), MetricDelta::new(*d, *r, *x)))
        .collect()
}

const NEUTRAL: (f64, f64, f64) = (0.0, 0.0, 0.0);

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            safety_level: table(&[
                ("low", defaults::SAFETY_LOW),
                ("standard", NEUTRAL),
                ("high", defaults::SAFETY_HIGH),
            ]),
            urgency: table(&[("standard", NEUTRAL), ("high", defaults::URGENCY_HIGH)]),
            labor: table(&[
                ("standard", NEUTRAL),
                ("increased", defaults::LABOR_INCREASED),
            ]),
            traffic: table(&[("basic", NEUTRAL), ("advanced", defaults::TRAFFIC_ADVANCED)]),
        }
    }
}
