use civism_core::errors::*;
use civism_core::policy::Lever;

#[test]
fn unknown_lever_value_carries_lever_and_value() {
    let err = CivismError::UnknownLeverValue {
        lever: Lever::Traffic,
        value: "teleport".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("traffic"));
    assert!(msg.contains("teleport"));
}

#[test]
fn missing_neutral_names_the_expected_entry() {
    let err = ModifierError::MissingNeutral {
        lever: Lever::SafetyLevel,
        neutral: "standard",
    };
    let msg = err.to_string();
    assert!(msg.contains("safety_level"));
    assert!(msg.contains("standard"));
}

#[test]
fn invalid_key_carries_key() {
    let err = ModifierError::InvalidKey {
        lever: Lever::Labor,
        key: "doubled".into(),
    };
    assert!(err.to_string().contains("doubled"));
}

// --- From impls ---

#[test]
fn modifier_error_converts_to_civism_error() {
    let err: CivismError = ModifierError::NonFiniteDelta {
        lever: Lever::Urgency,
        key: "high".into(),
    }
    .into();
    assert!(matches!(err, CivismError::ModifierError(_)));
}

#[test]
fn toml_error_converts_to_config_error() {
    let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
    let err: CivismError = toml_err.into();
    assert!(matches!(err, CivismError::ConfigError(_)));
}

#[test]
fn json_error_converts_to_serialization_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: CivismError = json_err.into();
    assert!(matches!(err, CivismError::SerializationError(_)));
}
