//! SimulationEngine: runs the baseline and policy scenarios and explains
//! the difference. Implements `ISimulator` from civism-core.

use chrono::Utc;
use civism_core::config::CivismConfig;
use civism_core::errors::CivismResult;
use civism_core::models::{Explanation, Scenario, SimulationReport};
use civism_core::policy::{PolicySelection, RawPolicySelection};
use civism_core::traits::{IExplainer, IScenarioComposer, ISimulator, ITimelineProjector};
use rand::Rng;

use crate::composer::ScenarioComposer;
use crate::events;
use crate::explanation::ExplanationAnalyzer;
use crate::modifiers::ModifierTables;
use crate::timeline::TimelineProjector;

/// The simulation facade. Holds only read-only configuration, so one
/// instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    composer: ScenarioComposer,
    projector: TimelineProjector,
    analyzer: ExplanationAnalyzer,
}

impl SimulationEngine {
    /// Build from configuration. Incomplete modifier tables fail here,
    /// never per request.
    pub fn new(config: CivismConfig) -> CivismResult<Self> {
        config.validate()?;
        let tables = ModifierTables::from_config(&config.modifiers)?;
        Ok(Self {
            composer: ScenarioComposer::new(&config, tables),
            projector: TimelineProjector::new(config.timeline),
            analyzer: ExplanationAnalyzer::new(config.thresholds),
        })
    }

    /// Build from a TOML document.
    pub fn from_toml(toml_str: &str) -> CivismResult<Self> {
        Self::new(CivismConfig::from_toml(toml_str)?)
    }

    pub fn composer(&self) -> &ScenarioComposer {
        &self.composer
    }

    pub fn projector(&self) -> &TimelineProjector {
        &self.projector
    }

    pub fn analyzer(&self) -> &ExplanationAnalyzer {
        &self.analyzer
    }

    /// Metrics and timeline for one selection.
    pub fn run_scenario(&self, selection: &PolicySelection) -> Scenario {
        let metrics = self.composer.compose(selection);
        let timeline = self.projector.project(metrics.total_days());
        Scenario { metrics, timeline }
    }

    /// Metrics and timeline for one selection, jitter drawn from `rng`.
    pub fn run_scenario_with_rng<R: Rng>(
        &self,
        selection: &PolicySelection,
        rng: &mut R,
    ) -> Scenario {
        let metrics = self.composer.compose(selection);
        let timeline = self.projector.project_with_rng(metrics.total_days(), rng);
        Scenario { metrics, timeline }
    }

    /// Full simulation with jitter drawn from `rng`: baseline first, then policy.
    pub fn simulate_with_rng<R: Rng>(
        &self,
        selection: &PolicySelection,
        rng: &mut R,
    ) -> SimulationReport {
        let span = crate::simulate_span!(selection);
        let _guard = span.enter();

        let baseline = self.run_scenario_with_rng(&PolicySelection::baseline(), rng);
        let policy = self.run_scenario_with_rng(selection, rng);
        self.report(baseline, policy, selection)
    }

    /// Full simulation from an unvalidated request record. Unrecognised lever
    /// values are logged and priced with the lever's neutral modifier; the
    /// summary still shows them as supplied.
    pub fn simulate_raw(&self, raw: &RawPolicySelection) -> SimulationReport {
        let selection = raw.into_selection_lossy();
        let span = crate::simulate_span!(selection);
        let _guard = span.enter();

        for (lever, value) in raw.unrecognized() {
            events::lever_fallback(lever, value);
        }

        let baseline = self.run_scenario(&PolicySelection::baseline());
        let policy = self.run_scenario(&selection);
        let analysis = self
            .analyzer
            .explain_raw(&baseline.metrics, &policy.metrics, raw);
        Self::assemble(baseline, policy, analysis)
    }

    /// Full simulation stamped with the current time.
    pub fn simulate_stamped(&self, selection: &PolicySelection) -> SimulationReport {
        self.simulate(selection).with_timestamp(Utc::now())
    }

    fn report(
        &self,
        baseline: Scenario,
        policy: Scenario,
        selection: &PolicySelection,
    ) -> SimulationReport {
        let analysis = self
            .analyzer
            .explain(&baseline.metrics, &policy.metrics, selection);
        Self::assemble(baseline, policy, analysis)
    }

    fn assemble(baseline: Scenario, policy: Scenario, analysis: Explanation) -> SimulationReport {
        SimulationReport {
            baseline,
            policy,
            analysis,
            timestamp: None,
        }
    }
}

impl ISimulator for SimulationEngine {
    fn simulate(&self, selection: &PolicySelection) -> SimulationReport {
        let span = crate::simulate_span!(selection);
        let _guard = span.enter();

        let baseline = self.run_scenario(&PolicySelection::baseline());
        let policy = self.run_scenario(selection);
        self.report(baseline, policy, selection)
    }
}
