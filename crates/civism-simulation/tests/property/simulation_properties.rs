use civism_core::models::{ScenarioMetrics, Verdict};
use civism_core::policy::*;
use civism_core::traits::{IExplainer, IScenarioComposer};
use civism_simulation::{ExplanationAnalyzer, ScenarioComposer, TimelineProjector};
use proptest::prelude::*;

fn arb_safety() -> impl Strategy<Value = SafetyLevel> {
    prop_oneof![
        Just(SafetyLevel::Low),
        Just(SafetyLevel::Standard),
        Just(SafetyLevel::High),
    ]
}

fn arb_urgency() -> impl Strategy<Value = Urgency> {
    prop_oneof![Just(Urgency::Standard), Just(Urgency::High)]
}

fn arb_labor() -> impl Strategy<Value = Labor> {
    prop_oneof![Just(Labor::Standard), Just(Labor::Increased)]
}

fn arb_traffic() -> impl Strategy<Value = Traffic> {
    prop_oneof![Just(Traffic::Basic), Just(Traffic::Advanced)]
}

fn arb_selection() -> impl Strategy<Value = PolicySelection> {
    (
        any::<bool>(),
        arb_safety(),
        arb_urgency(),
        arb_labor(),
        arb_traffic(),
    )
        .prop_map(
            |(night_shifts, safety_level, urgency, labor, traffic)| PolicySelection {
                night_shifts,
                safety_level,
                urgency,
                labor,
                traffic,
            },
        )
}

fn is_one_decimal(value: f64) -> bool {
    ((value * 10.0).round() - value * 10.0).abs() < 1e-6
}

proptest! {
    #[test]
    fn composed_metrics_stay_in_domain(selection in arb_selection()) {
        let metrics = ScenarioComposer::default().compose(&selection);
        prop_assert!((30.0..=365.0).contains(&metrics.duration));
        prop_assert!((0.0..=100.0).contains(&metrics.risk_score));
        prop_assert!((0.0..=100.0).contains(&metrics.disruption_index));
        prop_assert!(is_one_decimal(metrics.duration));
        prop_assert!(is_one_decimal(metrics.risk_score));
        prop_assert!(is_one_decimal(metrics.disruption_index));
    }

    #[test]
    fn compose_is_deterministic(selection in arb_selection()) {
        let composer = ScenarioComposer::default();
        prop_assert_eq!(composer.compose(&selection), composer.compose(&selection));
    }

    #[test]
    fn last_timeline_point_is_complete(total_days in 1i64..2000, seed in any::<u64>()) {
        let timeline = TimelineProjector::default().project_seeded(total_days, seed);
        prop_assert_eq!(timeline.last().unwrap().progress, 100.0);
        prop_assert_eq!(timeline[0].day, 0);
        prop_assert!(timeline.windows(2).all(|w| w[0].day < w[1].day));
        prop_assert!(timeline.iter().all(|p| (0.0..=100.0).contains(&p.progress)));
        prop_assert!(timeline.last().unwrap().day <= total_days.unsigned_abs());
    }

    #[test]
    fn non_positive_days_yield_single_point(total_days in -1000i64..=0, seed in any::<u64>()) {
        let timeline = TimelineProjector::default().project_seeded(total_days, seed);
        prop_assert_eq!(timeline.len(), 1);
        prop_assert_eq!(timeline[0].day, 0);
        prop_assert_eq!(timeline[0].progress, 100.0);
    }

    #[test]
    fn verdict_matches_its_definition(
        duration in 30.0f64..365.0,
        risk in 0.0f64..100.0,
        disruption in 0.0f64..100.0,
        selection in arb_selection(),
    ) {
        let baseline = ScenarioMetrics::new(180.0, 45.0, 55.0);
        let policy = ScenarioMetrics::new(duration, risk, disruption);
        let explanation = ExplanationAnalyzer::default().explain(&baseline, &policy, &selection);

        let duration_delta = duration - 180.0;
        let risk_delta = risk - 45.0;
        let disruption_delta = disruption - 55.0;
        let recommended = risk_delta <= 5.0 && duration_delta <= 0.0;
        let high_risk = !recommended && (risk_delta > 20.0 || disruption_delta > 25.0);

        prop_assert_eq!(explanation.verdict == Verdict::Recommended, recommended);
        prop_assert_eq!(explanation.verdict == Verdict::HighRisk, high_risk);
        prop_assert_eq!(
            explanation.verdict == Verdict::AcceptableWithConditions,
            !recommended && !high_risk
        );
    }

    #[test]
    fn night_low_safety_advisory_tracks_night_shifts(selection in arb_selection()) {
        let composer = ScenarioComposer::default();
        let analyzer = ExplanationAnalyzer::default();
        let baseline = composer.compose(&PolicySelection::baseline());
        let policy = composer.compose(&selection);
        let explanation = analyzer.explain(&baseline, &policy, &selection);

        let flagged = explanation
            .warnings
            .iter()
            .any(|w| w == "Night work with low safety controls is discouraged");
        prop_assert_eq!(
            flagged,
            selection.night_shifts && selection.safety_level == SafetyLevel::Low
        );
    }
}
