use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative verdict on a policy relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Verdict {
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Acceptable with Conditions")]
    AcceptableWithConditions,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Recommended => "Recommended",
            Verdict::AcceptableWithConditions => "Acceptable with Conditions",
            Verdict::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured explanation of a policy scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Explanation {
    pub verdict: Verdict,
    /// One templated sentence describing the policy and its headline deltas.
    pub summary: String,
    /// Trade-off clauses joined by `"; "`.
    pub trade_offs: String,
    pub warnings: Vec<String>,
}
