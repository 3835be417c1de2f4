use civism_core::policy::*;
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
    (any::<bool>(), arb_safety(), arb_urgency(), arb_labor(), arb_traffic()).prop_map(
        |(night_shifts, safety_level, urgency, labor, traffic)| PolicySelection {
            night_shifts,
            safety_level,
            urgency,
            labor,
            traffic,
        },
    )
}

/// Mostly arbitrary text, sometimes a real value name.
fn arb_lever_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        Just("standard".to_string()),
        Just("high".to_string()),
        Just("low".to_string()),
        Just("increased".to_string()),
        Just("advanced".to_string()),
        Just("basic".to_string()),
        Just("High".to_string()),
    ]
}

fn arb_raw() -> impl Strategy<Value = RawPolicySelection> {
    (
        any::<bool>(),
        arb_lever_text(),
        arb_lever_text(),
        arb_lever_text(),
        arb_lever_text(),
    )
        .prop_map(
            |(night_shifts, safety_level, urgency, labor, traffic)| RawPolicySelection {
                night_shifts,
                safety_level,
                urgency,
                labor,
                traffic,
            },
        )
}

proptest! {
    #[test]
    fn value_names_parse_back(
        safety in arb_safety(),
        urgency in arb_urgency(),
        labor in arb_labor(),
        traffic in arb_traffic()
    ) {
        prop_assert_eq!(SafetyLevel::parse(safety.as_str()).unwrap(), safety);
        prop_assert_eq!(Urgency::parse(urgency.as_str()).unwrap(), urgency);
        prop_assert_eq!(Labor::parse(labor.as_str()).unwrap(), labor);
        prop_assert_eq!(Traffic::parse(traffic.as_str()).unwrap(), traffic);
    }

    #[test]
    fn lossy_parse_is_strict_parse_or_neutral(text in any::<String>()) {
        prop_assert_eq!(
            SafetyLevel::from_str_lossy(&text),
            SafetyLevel::parse(&text).unwrap_or(SafetyLevel::NEUTRAL)
        );
        prop_assert_eq!(
            Urgency::from_str_lossy(&text),
            Urgency::parse(&text).unwrap_or(Urgency::NEUTRAL)
        );
        prop_assert_eq!(
            Labor::from_str_lossy(&text),
            Labor::parse(&text).unwrap_or(Labor::NEUTRAL)
        );
        prop_assert_eq!(
            Traffic::from_str_lossy(&text),
            Traffic::parse(&text).unwrap_or(Traffic::NEUTRAL)
        );
    }

    #[test]
    fn typed_selection_survives_raw_form(selection in arb_selection()) {
        let raw = RawPolicySelection::from(selection);
        prop_assert!(raw.unrecognized().is_empty());
        prop_assert_eq!(raw.validate().unwrap(), selection);
        prop_assert_eq!(raw.into_selection_lossy(), selection);
    }

    #[test]
    fn validate_succeeds_iff_every_lever_is_recognised(raw in arb_raw()) {
        let unrecognized = raw.unrecognized();
        prop_assert_eq!(raw.validate().is_ok(), unrecognized.is_empty());
        prop_assert!(unrecognized.iter().all(|(lever, value)| !lever.accepts(value)));

        let lossy = raw.into_selection_lossy();
        prop_assert_eq!(lossy.night_shifts, raw.night_shifts);
        if let Ok(strict) = raw.validate() {
            prop_assert_eq!(strict, lossy);
        }
    }
}
