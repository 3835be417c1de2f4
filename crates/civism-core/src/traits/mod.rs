//! Component seams. Each trait is a pure computation; implementations hold
//! only read-only configuration and may be shared across threads.

mod composer;
mod explainer;
mod projector;
mod simulator;

pub use composer::IScenarioComposer;
pub use explainer::IExplainer;
pub use projector::ITimelineProjector;
pub use simulator::ISimulator;
