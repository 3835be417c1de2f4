use crate::models::{Explanation, ScenarioMetrics};
use crate::policy::PolicySelection;

/// Explains a policy scenario against the baseline.
pub trait IExplainer: Send + Sync {
    fn explain(
        &self,
        baseline: &ScenarioMetrics,
        policy: &ScenarioMetrics,
        selection: &PolicySelection,
    ) -> Explanation;
}
