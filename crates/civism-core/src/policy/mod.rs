//! Policy levers and the selection records built from them.
//!
//! Four levers are table-driven (safety, urgency, labor, traffic). Night
//! shifts are a plain boolean with a fixed delta.

pub mod levers;
pub mod selection;

pub use levers::{Labor, Lever, LeverValue, SafetyLevel, Traffic, Urgency};
pub use selection::{shift_label, PolicySelection, RawPolicySelection};
