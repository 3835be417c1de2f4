use serde::{Deserialize, Serialize};

use super::defaults;

/// Delta thresholds used by the explanation rules. All values are
/// policy-minus-baseline deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Recommended requires risk delta at or below this...
    pub recommended_max_risk_delta: f64,
    /// ...and duration delta at or below this.
    pub recommended_max_duration_delta: f64,
    /// High Risk when risk delta exceeds this...
    pub high_risk_delta: f64,
    /// ...or disruption delta exceeds this.
    pub high_risk_disruption_delta: f64,
    pub trade_off_risk_delta: f64,
    pub trade_off_disruption_delta: f64,
    pub warn_risk_delta: f64,
    pub warn_disruption_delta: f64,
    /// Disruption delta above which a basic traffic plan draws an advisory.
    pub warn_traffic_disruption_delta: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            recommended_max_risk_delta: defaults::DEFAULT_RECOMMENDED_MAX_RISK_DELTA,
            recommended_max_duration_delta: defaults::DEFAULT_RECOMMENDED_MAX_DURATION_DELTA,
            high_risk_delta: defaults::DEFAULT_HIGH_RISK_DELTA,
            high_risk_disruption_delta: defaults::DEFAULT_HIGH_RISK_DISRUPTION_DELTA,
            trade_off_risk_delta: defaults::DEFAULT_TRADE_OFF_RISK_DELTA,
            trade_off_disruption_delta: defaults::DEFAULT_TRADE_OFF_DISRUPTION_DELTA,
            warn_risk_delta: defaults::DEFAULT_WARN_RISK_DELTA,
            warn_disruption_delta: defaults::DEFAULT_WARN_DISRUPTION_DELTA,
            warn_traffic_disruption_delta: defaults::DEFAULT_WARN_TRAFFIC_DISRUPTION_DELTA,
        }
    }
}
