use crate::models::ScenarioMetrics;
use crate::policy::PolicySelection;

/// Turns a policy selection into clamped scenario metrics.
pub trait IScenarioComposer: Send + Sync {
    /// Total and deterministic: the same selection always yields the same metrics.
    fn compose(&self, selection: &PolicySelection) -> ScenarioMetrics;
}
