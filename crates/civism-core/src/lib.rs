//! # civism-core
//!
//! Foundation crate for the construction-policy simulator.
//! Defines the policy levers, scenario types, errors, config, and the
//! component traits. The simulation crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod policy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CivismConfig;
pub use errors::{CivismError, CivismResult};
pub use models::{
    Explanation, MetricDelta, MetricDeltas, Scenario, ScenarioMetrics, SimulationReport,
    TimelinePoint, Verdict,
};
pub use policy::{
    Labor, Lever, LeverValue, PolicySelection, RawPolicySelection, SafetyLevel, Traffic, Urgency,
};
