//! Modifier tables: lever value -> additive metric delta.
//!
//! Lookups are total. A value missing from a table resolves to the lever's
//! neutral entry; the neutral entry itself must exist when tables are built.

mod table;

pub use table::LeverModifiers;

use civism_core::config::ModifierConfig;
use civism_core::errors::CivismResult;
use civism_core::models::MetricDelta;
use civism_core::policy::{Lever, LeverValue};

/// Resolved modifier tables for all four levers.
#[derive(Debug, Clone)]
pub struct ModifierTables {
    safety_level: LeverModifiers,
    urgency: LeverModifiers,
    labor: LeverModifiers,
    traffic: LeverModifiers,
}

impl ModifierTables {
    /// Build from configuration, rejecting unknown keys and tables without
    /// a neutral entry.
    pub fn from_config(config: &ModifierConfig) -> CivismResult<Self> {
        let build = |lever: Lever| LeverModifiers::build(lever, config.table(lever));
        Ok(Self {
            safety_level: build(Lever::SafetyLevel)?,
            urgency: build(Lever::Urgency)?,
            labor: build(Lever::Labor)?,
            traffic: build(Lever::Traffic)?,
        })
    }

    pub fn table(&self, lever: Lever) -> &LeverModifiers {
        match lever {
            Lever::SafetyLevel => &self.safety_level,
            Lever::Urgency => &self.urgency,
            Lever::Labor => &self.labor,
            Lever::Traffic => &self.traffic,
        }
    }

    /// Delta for a typed lever value.
    pub fn lookup<V: LeverValue>(&self, value: V) -> MetricDelta {
        self.table(V::LEVER).get(value.as_str())
    }

    /// Delta for a raw value name. Unknown names get the neutral delta.
    pub fn lookup_raw(&self, lever: Lever, value: &str) -> MetricDelta {
        self.table(lever).get(value)
    }
}

impl Default for ModifierTables {
    fn default() -> Self {
        let config = ModifierConfig::default();
        Self {
            safety_level: LeverModifiers::builtin(Lever::SafetyLevel, &config.safety_level),
            urgency: LeverModifiers::builtin(Lever::Urgency, &config.urgency),
            labor: LeverModifiers::builtin(Lever::Labor, &config.labor),
            traffic: LeverModifiers::builtin(Lever::Traffic, &config.traffic),
        }
    }
}
