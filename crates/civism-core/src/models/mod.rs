mod explanation;
mod metrics;
mod report;
mod timeline;

pub use explanation::{Explanation, Verdict};
pub use metrics::{MetricDelta, MetricDeltas, ScenarioMetrics};
pub use report::{Scenario, SimulationReport};
pub use timeline::TimelinePoint;
