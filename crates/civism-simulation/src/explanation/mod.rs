//! Explanation analyzer: turns baseline/policy metric deltas into a verdict,
//! a summary sentence, trade-off clauses, and advisory warnings.
//!
//! Stateless apart from the read-only thresholds.

mod advisory;
pub mod rules;
pub mod templates;

pub use advisory::Advisory;

use civism_core::config::ThresholdConfig;
use civism_core::models::{Explanation, ScenarioMetrics};
use civism_core::policy::{PolicySelection, RawPolicySelection};
use civism_core::traits::IExplainer;

use crate::events;
use rules::RuleContext;
use templates::LeverText;

/// Rule-based explanation of a policy scenario against the baseline.
#[derive(Debug, Clone, Default)]
pub struct ExplanationAnalyzer {
    thresholds: ThresholdConfig,
}

impl ExplanationAnalyzer {
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    fn context<'a>(
        &'a self,
        baseline: &ScenarioMetrics,
        policy: &ScenarioMetrics,
        selection: &'a PolicySelection,
    ) -> RuleContext<'a> {
        RuleContext {
            deltas: policy.delta_from(baseline),
            selection,
            thresholds: &self.thresholds,
        }
    }

    /// Typed advisories, for callers that want machine-readable warnings.
    pub fn explain_advisories(
        &self,
        baseline: &ScenarioMetrics,
        policy: &ScenarioMetrics,
        selection: &PolicySelection,
    ) -> Vec<Advisory> {
        rules::advisories(&self.context(baseline, policy, selection))
    }

    /// Explain an unvalidated request. Rules see the lossy selection; the
    /// summary repeats the lever values exactly as supplied.
    pub fn explain_raw(
        &self,
        baseline: &ScenarioMetrics,
        policy: &ScenarioMetrics,
        raw: &RawPolicySelection,
    ) -> Explanation {
        let selection = raw.into_selection_lossy();
        let ctx = self.context(baseline, policy, &selection);
        self.assemble(&ctx, &LeverText::from(raw))
    }

    fn assemble(&self, ctx: &RuleContext<'_>, levers: &LeverText<'_>) -> Explanation {
        let explanation = Explanation {
            verdict: rules::verdict(ctx),
            summary: templates::summary(levers, &ctx.deltas),
            trade_offs: templates::join_trade_offs(&rules::trade_off_clauses(ctx)),
            warnings: rules::advisories(ctx)
                .into_iter()
                .map(|a| a.message().to_string())
                .collect(),
        };

        events::scenario_explained(&explanation);
        explanation
    }
}

impl IExplainer for ExplanationAnalyzer {
    fn explain(
        &self,
        baseline: &ScenarioMetrics,
        policy: &ScenarioMetrics,
        selection: &PolicySelection,
    ) -> Explanation {
        let ctx = self.context(baseline, policy, selection);
        self.assemble(&ctx, &LeverText::from(selection))
    }
}
