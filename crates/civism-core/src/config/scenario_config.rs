use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::MetricDelta;

/// Metric values of the baseline scenario before any modifier applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    pub duration: f64,
    pub risk_score: f64,
    pub disruption_index: f64,
}

impl BaselineConfig {
    /// Baseline values as a starting accumulator.
    pub fn as_delta(&self) -> MetricDelta {
        MetricDelta::new(self.duration, self.risk_score, self.disruption_index)
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            duration: defaults::DEFAULT_BASELINE_DURATION,
            risk_score: defaults::DEFAULT_BASELINE_RISK,
            disruption_index: defaults::DEFAULT_BASELINE_DISRUPTION,
        }
    }
}

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Domain ranges every composed metric is clamped into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub duration: MetricRange,
    pub risk_score: MetricRange,
    pub disruption_index: MetricRange,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            duration: MetricRange::new(defaults::DEFAULT_MIN_DURATION, defaults::DEFAULT_MAX_DURATION),
            risk_score: MetricRange::new(defaults::DEFAULT_MIN_SCORE, defaults::DEFAULT_MAX_SCORE),
            disruption_index: MetricRange::new(
                defaults::DEFAULT_MIN_SCORE,
                defaults::DEFAULT_MAX_SCORE,
            ),
        }
    }
}

/// Fixed delta applied when night shifts are enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NightShiftConfig {
    pub delta: MetricDelta,
}

impl Default for NightShiftConfig {
    fn default() -> Self {
        Self {
            delta: MetricDelta::new(
                defaults::DEFAULT_NIGHT_SHIFT_DURATION,
                defaults::DEFAULT_NIGHT_SHIFT_RISK,
                defaults::DEFAULT_NIGHT_SHIFT_DISRUPTION,
            ),
        }
    }
}
