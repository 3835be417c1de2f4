use crate::models::TimelinePoint;

/// Synthesizes a progress-over-time curve for a project length.
pub trait ITimelineProjector: Send + Sync {
    /// Sampled progress curve whose last point is always at 100%.
    fn project(&self, total_days: i64) -> Vec<TimelinePoint>;
}
