use serde::{Deserialize, Serialize};

use super::defaults;

/// Progress-curve synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Approximate number of samples per curve; the stride is
    /// `max(1, total_days / target_samples)`.
    pub target_samples: u32,
    /// Half-width of the uniform jitter added to each sample.
    pub jitter: f64,
    /// Slope of the middle S-curve segment, in progress points per unit of
    /// fractional completion.
    pub middle_slope: f64,
    /// Fixed RNG seed. When unset each projection draws fresh jitter.
    pub seed: Option<u64>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            target_samples: defaults::DEFAULT_TARGET_SAMPLES,
            jitter: defaults::DEFAULT_JITTER,
            middle_slope: defaults::DEFAULT_MIDDLE_SLOPE,
            seed: None,
        }
    }
}
