use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Additive modifier on the three scenario metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MetricDelta {
    /// Days added to the schedule (negative = faster).
    pub duration: f64,
    /// Points added to the safety risk score.
    pub risk_score: f64,
    /// Points added to the disruption index.
    pub disruption_index: f64,
}

impl MetricDelta {
    /// The neutral modifier.
    pub const ZERO: MetricDelta = MetricDelta {
        duration: 0.0,
        risk_score: 0.0,
        disruption_index: 0.0,
    };

    pub const fn new(duration: f64, risk_score: f64, disruption_index: f64) -> Self {
        Self {
            duration,
            risk_score,
            disruption_index,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn is_finite(&self) -> bool {
        self.duration.is_finite() && self.risk_score.is_finite() && self.disruption_index.is_finite()
    }
}

impl Add for MetricDelta {
    type Output = MetricDelta;

    fn add(self, rhs: MetricDelta) -> MetricDelta {
        MetricDelta {
            duration: self.duration + rhs.duration,
            risk_score: self.risk_score + rhs.risk_score,
            disruption_index: self.disruption_index + rhs.disruption_index,
        }
    }
}

impl AddAssign for MetricDelta {
    fn add_assign(&mut self, rhs: MetricDelta) {
        *self = *self + rhs;
    }
}

/// Metrics of one simulated scenario.
///
/// Produced by the composer already clamped to domain ranges and rounded to
/// one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioMetrics {
    /// Project duration in days, within [30, 365].
    pub duration: f64,
    /// Safety risk score, within [0, 100].
    pub risk_score: f64,
    /// Community disruption index, within [0, 100].
    pub disruption_index: f64,
}

impl ScenarioMetrics {
    pub fn new(duration: f64, risk_score: f64, disruption_index: f64) -> Self {
        Self {
            duration,
            risk_score,
            disruption_index,
        }
    }

    /// Signed change of `self` relative to `baseline`.
    pub fn delta_from(&self, baseline: &ScenarioMetrics) -> MetricDeltas {
        MetricDeltas {
            duration: self.duration - baseline.duration,
            risk_score: self.risk_score - baseline.risk_score,
            disruption_index: self.disruption_index - baseline.disruption_index,
        }
    }

    /// Whole days used to size the progress timeline.
    pub fn total_days(&self) -> i64 {
        self.duration as i64
    }
}

/// Policy minus baseline, per metric.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricDeltas {
    pub duration: f64,
    pub risk_score: f64,
    pub disruption_index: f64,
}
