//! Progress timeline synthesis.
//!
//! A three-segment S-curve over fractional completion `f = day / total_days`:
//!
//! ```text
//! f < 0.1          progress = 40 f                      slow start, 4% at f = 0.1
//! 0.1 <= f < 0.8   progress = 4 + (f - 0.1) * slope     steep middle
//! f >= 0.8         progress = 95 + (f - 0.8) * 25       tail
//! ```
//!
//! Each sample gets uniform jitter in `[-jitter, +jitter]`, is clamped to
//! [0, 100] and rounded to one decimal. The last point is then forced to 100.
//! Samples are not monotonic; jitter can make a later point lower.

use civism_core::config::TimelineConfig;
use civism_core::constants::{round1, COMPLETE_PROGRESS, PROGRESS_MAX, PROGRESS_MIN};
use civism_core::models::TimelinePoint;
use civism_core::traits::ITimelineProjector;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::events;

/// End of the slow-start segment, as fractional completion.
pub const SLOW_START_END: f64 = 0.1;
/// End of the steep middle segment.
pub const MIDDLE_END: f64 = 0.8;
/// Slow-start slope: 4 points at `SLOW_START_END`.
pub const SLOW_START_SLOPE: f64 = 40.0;
/// Progress at the start of the middle segment.
pub const MIDDLE_START_PROGRESS: f64 = 4.0;
/// Progress at the start of the tail segment.
pub const TAIL_START_PROGRESS: f64 = 95.0;
/// Tail slope.
pub const TAIL_SLOPE: f64 = 25.0;

/// Noise-free S-curve value at fractional completion `fraction`.
///
/// With the default middle slope of 135 the middle segment overshoots the
/// 91-point climb (91 / 0.7 is about 130), so the curve steps down at 0.8.
pub fn s_curve(fraction: f64, middle_slope: f64) -> f64 {
    if fraction < SLOW_START_END {
        fraction * SLOW_START_SLOPE
    } else if fraction < MIDDLE_END {
        MIDDLE_START_PROGRESS + (fraction - SLOW_START_END) * middle_slope
    } else {
        TAIL_START_PROGRESS + (fraction - MIDDLE_END) * TAIL_SLOPE
    }
}

/// Synthesizes sampled progress curves.
#[derive(Debug, Clone, Default)]
pub struct TimelineProjector {
    config: TimelineConfig,
}

impl TimelineProjector {
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Sampling stride for a project length: `max(1, total_days / target_samples)`.
    pub fn stride(&self, total_days: u64) -> u64 {
        (total_days / u64::from(self.config.target_samples.max(1))).max(1)
    }

    /// Project with a caller-supplied jitter source.
    pub fn project_with_rng<R: Rng>(
        &self,
        total_days: i64,
        rng: &mut R,
    ) -> Vec<TimelinePoint> {
        if total_days <= 0 {
            events::timeline_projected(total_days, 0, 1);
            return vec![TimelinePoint::new(0, COMPLETE_PROGRESS)];
        }

        let total = total_days.unsigned_abs();
        let stride = self.stride(total);
        let jitter = self.config.jitter;

        let mut timeline: Vec<TimelinePoint> = (0..=total)
            .step_by(stride as usize)
            .map(|day| {
                let fraction = day as f64 / total as f64;
                let noise = if jitter > 0.0 {
                    rng.gen_range(-jitter..=jitter)
                } else {
                    0.0
                };
                let progress = (s_curve(fraction, self.config.middle_slope) + noise)
                    .clamp(PROGRESS_MIN, PROGRESS_MAX);
                TimelinePoint::new(day, round1(progress))
            })
            .collect();

        if let Some(last) = timeline.last_mut() {
            last.progress = COMPLETE_PROGRESS;
        }

        events::timeline_projected(total_days, stride, timeline.len());
        timeline
    }

    /// Project with a deterministic generator seeded from `seed`.
    pub fn project_seeded(&self, total_days: i64, seed: u64) -> Vec<TimelinePoint> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.project_with_rng(total_days, &mut rng)
    }
}

impl ITimelineProjector for TimelineProjector {
    /// Uses the configured seed when set, otherwise the thread-local generator.
    fn project(&self, total_days: i64) -> Vec<TimelinePoint> {
        match self.config.seed {
            Some(seed) => self.project_seeded(total_days, seed),
            None => self.project_with_rng(total_days, &mut rand::thread_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_curve_segment_anchors() {
        assert_eq!(s_curve(0.0, 135.0), 0.0);
        assert!((s_curve(0.05, 135.0) - 2.0).abs() < 1e-9);
        assert!((s_curve(0.1, 135.0) - 4.0).abs() < 1e-9);
        assert!((s_curve(0.8, 135.0) - 95.0).abs() < 1e-9);
        assert!((s_curve(1.0, 135.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn middle_slope_overshoots_before_tail() {
        // Just below 0.8 the middle segment sits above 95.
        let before_tail = s_curve(0.79, 135.0);
        assert!(before_tail > 95.0, "got {before_tail}");
    }

    #[test]
    fn stride_targets_twenty_samples() {
        let projector = TimelineProjector::default();
        assert_eq!(projector.stride(180), 9);
        assert_eq!(projector.stride(365), 18);
        assert_eq!(projector.stride(19), 1);
        assert_eq!(projector.stride(1), 1);
    }
}
