use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Explanation, ScenarioMetrics, TimelinePoint};

/// Metrics and progress curve of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scenario {
    pub metrics: ScenarioMetrics,
    pub timeline: Vec<TimelinePoint>,
}

/// Full result of one simulation request: baseline, policy, and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulationReport {
    pub baseline: Scenario,
    pub policy: Scenario,
    pub analysis: Explanation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SimulationReport {
    /// Stamp the report with the time it was produced.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }
}
