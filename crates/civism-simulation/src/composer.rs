//! Scenario composition: baseline + night shift + lever deltas.
//!
//! ```text
//! metrics = clamp(baseline + night_shift? + safety + urgency + labor + traffic)
//! ```
//!
//! Deltas are additive, so order cannot change the sum; the fixed order only
//! keeps breakdowns and logs reproducible. Each metric is then clamped to its
//! domain range and rounded to one decimal place.

use civism_core::config::{BaselineConfig, BoundsConfig, CivismConfig, NightShiftConfig};
use civism_core::constants::round1;
use civism_core::models::{MetricDelta, ScenarioMetrics};
use civism_core::policy::{Lever, LeverValue, PolicySelection};
use civism_core::traits::IScenarioComposer;

use crate::events;
use crate::modifiers::ModifierTables;

/// One applied modifier in a composition breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionStep {
    /// `"night_shifts"` or a lever field name.
    pub source: &'static str,
    /// Value name that selected the delta.
    pub value: &'static str,
    pub delta: MetricDelta,
}

/// Every step of a composition, for debugging and observability.
#[derive(Debug, Clone)]
pub struct CompositionBreakdown {
    pub baseline: MetricDelta,
    /// Applied deltas in evaluation order. Night shifts appear only when enabled.
    pub steps: Vec<CompositionStep>,
    /// Sum before clamping and rounding.
    pub unclamped: MetricDelta,
    pub metrics: ScenarioMetrics,
}

impl CompositionBreakdown {
    /// Whether any metric hit a bound.
    pub fn was_clamped(&self) -> bool {
        round1(self.unclamped.duration) != self.metrics.duration
            || round1(self.unclamped.risk_score) != self.metrics.risk_score
            || round1(self.unclamped.disruption_index) != self.metrics.disruption_index
    }
}

/// Combines baseline constants and modifier lookups into scenario metrics.
#[derive(Debug, Clone, Default)]
pub struct ScenarioComposer {
    baseline: BaselineConfig,
    night_shift: NightShiftConfig,
    bounds: BoundsConfig,
    tables: ModifierTables,
}

impl ScenarioComposer {
    pub fn new(config: &CivismConfig, tables: ModifierTables) -> Self {
        Self {
            baseline: config.baseline.clone(),
            night_shift: config.night_shift.clone(),
            bounds: config.bounds.clone(),
            tables,
        }
    }

    pub fn tables(&self) -> &ModifierTables {
        &self.tables
    }

    /// Compose with a full breakdown of each applied delta.
    pub fn compose_breakdown(&self, selection: &PolicySelection) -> CompositionBreakdown {
        let mut steps = Vec::with_capacity(5);
        if selection.night_shifts {
            steps.push(CompositionStep {
                source: "night_shifts",
                value: "true",
                delta: self.night_shift.delta,
            });
        }
        for lever in Lever::ALL {
            let value = match lever {
                Lever::SafetyLevel => selection.safety_level.as_str(),
                Lever::Urgency => selection.urgency.as_str(),
                Lever::Labor => selection.labor.as_str(),
                Lever::Traffic => selection.traffic.as_str(),
            };
            steps.push(CompositionStep {
                source: lever.as_str(),
                value,
                delta: self.tables.lookup_raw(lever, value),
            });
        }

        let baseline = self.baseline.as_delta();
        let unclamped = steps
            .iter()
            .fold(baseline, |acc, step| acc + step.delta);
        let metrics = self.finish(unclamped);

        CompositionBreakdown {
            baseline,
            steps,
            unclamped,
            metrics,
        }
    }

    fn finish(&self, raw: MetricDelta) -> ScenarioMetrics {
        ScenarioMetrics::new(
            round1(self.bounds.duration.clamp(raw.duration)),
            round1(self.bounds.risk_score.clamp(raw.risk_score)),
            round1(self.bounds.disruption_index.clamp(raw.disruption_index)),
        )
    }
}

impl IScenarioComposer for ScenarioComposer {
    fn compose(&self, selection: &PolicySelection) -> ScenarioMetrics {
        let breakdown = self.compose_breakdown(selection);
        events::scenario_composed(selection, &breakdown.metrics, breakdown.was_clamped());
        breakdown.metrics
    }
}
