pub mod defaults;
mod modifier_config;
mod scenario_config;
mod threshold_config;
mod timeline_config;

pub use modifier_config::{LeverTable, ModifierConfig};
pub use scenario_config::{BaselineConfig, BoundsConfig, MetricRange, NightShiftConfig};
pub use threshold_config::ThresholdConfig;
pub use timeline_config::TimelineConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CivismError, CivismResult};

/// Top-level simulator configuration. Every section falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CivismConfig {
    pub baseline: BaselineConfig,
    pub bounds: BoundsConfig,
    pub night_shift: NightShiftConfig,
    pub modifiers: ModifierConfig,
    pub timeline: TimelineConfig,
    pub thresholds: ThresholdConfig,
}

impl CivismConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> CivismResult<Self> {
        let config: CivismConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> CivismResult<String> {
        toml::to_string(self).map_err(|e| CivismError::ConfigError(e.to_string()))
    }

    /// Semantic checks that serde cannot express.
    pub fn validate(&self) -> CivismResult<()> {
        for (name, range) in [
            ("duration", &self.bounds.duration),
            ("risk_score", &self.bounds.risk_score),
            ("disruption_index", &self.bounds.disruption_index),
        ] {
            if !range.is_valid() {
                return Err(CivismError::ConfigError(format!(
                    "bounds.{name}: min {} must not exceed max {}",
                    range.min, range.max
                )));
            }
        }
        if self.timeline.target_samples == 0 {
            return Err(CivismError::ConfigError(
                "timeline.target_samples must be at least 1".to_string(),
            ));
        }
        if !self.timeline.jitter.is_finite() || self.timeline.jitter < 0.0 {
            return Err(CivismError::ConfigError(format!(
                "timeline.jitter must be a non-negative number, got {}",
                self.timeline.jitter
            )));
        }
        if !self.timeline.middle_slope.is_finite() {
            return Err(CivismError::ConfigError(
                "timeline.middle_slope must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
