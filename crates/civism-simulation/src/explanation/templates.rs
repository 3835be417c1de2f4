//! Sentence templates for summaries and trade-off clauses.
//!
//! Numbers are rendered as whole units. Summary deltas carry an explicit sign.

use civism_core::models::MetricDeltas;
use civism_core::policy::{LeverValue, PolicySelection, RawPolicySelection};

/// Fallback trade-off text when no clause fires.
pub const MINIMAL_DEVIATION: &str = "Minimal deviation from baseline";

/// Separator between trade-off clauses.
pub const CLAUSE_SEPARATOR: &str = "; ";

/// Lever values as they appear in a summary, verbatim from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeverText<'a> {
    pub shift: &'static str,
    pub safety_level: &'a str,
    pub urgency: &'a str,
    pub labor: &'a str,
    pub traffic: &'a str,
}

impl<'a> From<&'a PolicySelection> for LeverText<'a> {
    fn from(selection: &'a PolicySelection) -> Self {
        Self {
            shift: selection.shift_label(),
            safety_level: selection.safety_level.as_str(),
            urgency: selection.urgency.as_str(),
            labor: selection.labor.as_str(),
            traffic: selection.traffic.as_str(),
        }
    }
}

impl<'a> From<&'a RawPolicySelection> for LeverText<'a> {
    fn from(raw: &'a RawPolicySelection) -> Self {
        Self {
            shift: raw.shift_label(),
            safety_level: &raw.safety_level,
            urgency: &raw.urgency,
            labor: &raw.labor,
            traffic: &raw.traffic,
        }
    }
}

/// One-sentence description of the policy and its headline deltas.
pub fn summary(levers: &LeverText<'_>, deltas: &MetricDeltas) -> String {
    format!(
        "Simulated policy: {}, {} safety, {} urgency, {} labor, {} traffic plan. \
         Schedule delta {:+.0} days; risk {:+.0} pts.",
        levers.shift,
        levers.safety_level,
        levers.urgency,
        levers.labor,
        levers.traffic,
        deltas.duration,
        deltas.risk_score,
    )
}

pub fn faster(days: f64) -> String {
    format!("Faster by {:.0} days", days.abs())
}

pub fn slower(days: f64) -> String {
    format!("Slower by {:.0} days", days)
}

pub fn risk_up(points: f64) -> String {
    format!("Risk up {:.0} pts", points)
}

pub fn risk_down(points: f64) -> String {
    format!("Risk down {:.0} pts", points.abs())
}

pub fn disruption_up(points: f64) -> String {
    format!("Disruption up {:.0} pts", points)
}

pub fn disruption_down(points: f64) -> String {
    format!("Disruption down {:.0} pts", points.abs())
}

/// Join clauses, or return the minimal-deviation message when empty.
pub fn join_trade_offs(clauses: &[String]) -> String {
    if clauses.is_empty() {
        MINIMAL_DEVIATION.to_string()
    } else {
        clauses.join(CLAUSE_SEPARATOR)
    }
}
