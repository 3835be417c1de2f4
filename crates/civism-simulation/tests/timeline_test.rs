use civism_core::config::TimelineConfig;
use civism_core::traits::ITimelineProjector;
use civism_simulation::timeline::{s_curve, TimelineProjector};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn quiet_projector() -> TimelineProjector {
    TimelineProjector::new(TimelineConfig {
        jitter: 0.0,
        ..TimelineConfig::default()
    })
}

// ── Degenerate durations ─────────────────────────────────────────────────

#[test]
fn non_positive_duration_yields_single_complete_point() {
    let projector = TimelineProjector::default();
    for total_days in [0, -1, -365] {
        let timeline = projector.project(total_days);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].day, 0);
        assert_eq!(timeline[0].progress, 100.0);
    }
}

#[test]
fn one_day_project_has_start_and_finish() {
    let timeline = TimelineProjector::default().project_seeded(1, 3);
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].day, 0);
    assert_eq!(timeline[1].day, 1);
    assert_eq!(timeline[1].progress, 100.0);
}

// ── Sampling ─────────────────────────────────────────────────────────────

#[test]
fn samples_every_stride_days_from_zero() {
    let timeline = TimelineProjector::default().project_seeded(180, 42);
    // stride = 180 / 20 = 9 -> days 0, 9, ..., 180
    assert_eq!(timeline.len(), 21);
    for (i, point) in timeline.iter().enumerate() {
        assert_eq!(point.day, (i as u64) * 9);
    }
}

#[test]
fn durations_beyond_u32_keep_their_final_day() {
    let timeline = quiet_projector().project_seeded(5_000_000_000, 1);
    // stride = 250_000_000 -> 21 samples ending on the final day
    assert_eq!(timeline.len(), 21);
    assert_eq!(timeline[1].day, 250_000_000);
    assert_eq!(timeline.last().unwrap().day, 5_000_000_000);
}

#[test]
fn last_sample_is_forced_complete_even_off_the_final_day() {
    let timeline = TimelineProjector::default().project_seeded(45, 11);
    // stride = 2 -> the final sample is day 44, not 45
    let last = timeline.last().unwrap();
    assert_eq!(last.day, 44);
    assert_eq!(last.progress, 100.0);
}

#[test]
fn last_point_is_complete_for_many_durations_and_seeds() {
    let projector = TimelineProjector::default();
    for total_days in [1, 7, 19, 20, 21, 30, 97, 152, 180, 364, 365] {
        for seed in 0..10 {
            let timeline = projector.project_seeded(total_days, seed);
            assert_eq!(
                timeline.last().unwrap().progress,
                100.0,
                "total_days={total_days} seed={seed}"
            );
        }
    }
}

// ── Curve shape ──────────────────────────────────────────────────────────

#[test]
fn zero_jitter_follows_the_s_curve() {
    let timeline = quiet_projector().project_seeded(100, 1);
    let at = |day: u64| timeline.iter().find(|p| p.day == day).unwrap().progress;
    assert_eq!(at(0), 0.0);
    assert_eq!(at(5), 2.0);
    assert_eq!(at(50), 58.0);
    assert_eq!(at(90), 97.5);
    assert_eq!(at(100), 100.0);
}

#[test]
fn middle_segment_clamps_at_one_hundred() {
    // 4 + (0.79 - 0.1) * 135 = 97.15; a steeper slope pushes past 100.
    let projector = TimelineProjector::new(TimelineConfig {
        jitter: 0.0,
        middle_slope: 200.0,
        ..TimelineConfig::default()
    });
    let timeline = projector.project_seeded(100, 1);
    assert!(timeline.iter().all(|p| p.progress <= 100.0));
    assert!(timeline.iter().any(|p| p.day < 100 && p.progress == 100.0));
}

#[test]
fn jitter_stays_within_bounds() {
    let projector = TimelineProjector::default();
    for seed in 0..20 {
        let timeline = projector.project_seeded(200, seed);
        let (last, body) = timeline.split_last().unwrap();
        assert_eq!(last.progress, 100.0);
        for point in body {
            let expected = s_curve(point.day as f64 / 200.0, 135.0).clamp(0.0, 100.0);
            assert!(
                (point.progress - expected).abs() <= 2.0 + 0.05 + 1e-9,
                "day {} progress {} expected ~{}",
                point.day,
                point.progress,
                expected
            );
            assert!((0.0..=100.0).contains(&point.progress));
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

#[test]
fn same_seed_same_timeline() {
    let projector = TimelineProjector::default();
    assert_eq!(
        projector.project_seeded(180, 42),
        projector.project_seeded(180, 42)
    );
}

#[test]
fn injected_rng_matches_seeded_projection() {
    let projector = TimelineProjector::default();
    let mut rng = SmallRng::seed_from_u64(99);
    assert_eq!(
        projector.project_with_rng(152, &mut rng),
        projector.project_seeded(152, 99)
    );
}

#[test]
fn configured_seed_makes_project_deterministic() {
    let projector = TimelineProjector::new(TimelineConfig {
        seed: Some(5),
        ..TimelineConfig::default()
    });
    assert_eq!(projector.project(180), projector.project(180));
    assert_eq!(projector.project(180), projector.project_seeded(180, 5));
}
