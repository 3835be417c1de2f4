//! # civism-simulation
//!
//! Construction-policy scenario simulation.
//!
//! | Component | Role |
//! |-----------|------|
//! | Modifier tables | Lever value -> additive (duration, risk, disruption) delta |
//! | Scenario composer | Baseline + night shift + lever deltas, clamped and rounded |
//! | Timeline projector | Three-segment S-curve with bounded jitter |
//! | Explanation analyzer | Ordered verdict rule, cumulative trade-off and warning rules |
//!
//! `SimulationEngine` ties them together into one report per request.

pub mod composer;
pub mod engine;
pub mod events;
pub mod explanation;
pub mod modifiers;
pub mod timeline;

pub use composer::{CompositionBreakdown, ScenarioComposer};
pub use engine::SimulationEngine;
pub use explanation::{Advisory, ExplanationAnalyzer};
pub use modifiers::{LeverModifiers, ModifierTables};
pub use timeline::TimelineProjector;
