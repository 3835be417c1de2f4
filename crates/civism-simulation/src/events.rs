//! Structured log events for simulation operations.
//!
//! Each function emits a `tracing` event with structured fields. The crate
//! never installs a subscriber; the host application decides where they go.

use civism_core::models::{Explanation, ScenarioMetrics};
use civism_core::policy::{Lever, PolicySelection};

/// Span name for one full simulation request.
pub const SIMULATE_SPAN: &str = "civism.simulate";

/// Create the span wrapping one simulation request.
#[macro_export]
macro_rules! simulate_span {
    ($selection:expr) => {
        tracing::info_span!(
            "civism.simulate",
            night_shifts = $selection.night_shifts,
            safety_level = %$selection.safety_level,
            urgency = %$selection.urgency,
            labor = %$selection.labor,
            traffic = %$selection.traffic
        )
    };
}

/// Log a composed scenario.
pub fn scenario_composed(selection: &PolicySelection, metrics: &ScenarioMetrics, clamped: bool) {
    tracing::debug!(
        event = "scenario_composed",
        baseline = selection.is_baseline(),
        duration = metrics.duration,
        risk_score = metrics.risk_score,
        disruption_index = metrics.disruption_index,
        clamped = clamped,
        "scenario composed"
    );
}

/// Log a projected timeline.
pub fn timeline_projected(total_days: i64, stride: u64, points: usize) {
    tracing::debug!(
        event = "timeline_projected",
        total_days = total_days,
        stride = stride,
        points = points,
        "timeline projected"
    );
}

/// Log the outcome of an explanation.
pub fn scenario_explained(explanation: &Explanation) {
    tracing::info!(
        event = "scenario_explained",
        verdict = %explanation.verdict,
        warnings = explanation.warnings.len(),
        "scenario explained"
    );
}

/// Log an unrecognised raw lever value that fell back to neutral.
pub fn lever_fallback(lever: Lever, value: &str) {
    tracing::warn!(
        event = "lever_fallback",
        lever = %lever,
        value = %value,
        neutral = %lever.neutral(),
        "unrecognised lever value, using neutral modifier"
    );
}
