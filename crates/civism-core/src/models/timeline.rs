use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One sample of the projected progress curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimelinePoint {
    /// Day offset from project start.
    #[ts(type = "number")]
    pub day: u64,
    /// Percent complete, within [0, 100].
    pub progress: f64,
}

impl TimelinePoint {
    pub fn new(day: u64, progress: f64) -> Self {
        Self { day, progress }
    }
}
