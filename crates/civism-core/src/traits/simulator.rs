use crate::models::SimulationReport;
use crate::policy::PolicySelection;

/// Runs a full simulation request: baseline, policy, and analysis.
pub trait ISimulator: Send + Sync {
    fn simulate(&self, selection: &PolicySelection) -> SimulationReport;
}
