#![cfg(feature = "serde")]

use recall_core::{AbortPolicy, Action, EngineConfig, HistoryEntry, Percept, Plan};

#[test]
fn engine_config_json_roundtrip() {
    let config = EngineConfig::default()
        .with_seed(99)
        .with_abort_policy(AbortPolicy::Salvage);

    let json = serde_json::to_string(&config).expect("serialize");
    let roundtrip: EngineConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, config);
}

#[test]
fn engine_config_fills_missing_fields_with_defaults() {
    let config: EngineConfig =
        serde_json::from_str(r#"{"abort_policy":"salvage"}"#).expect("deserialize");
    assert_eq!(config.abort_policy, AbortPolicy::Salvage);
    assert_eq!(config.history_capacity, 20);
}

#[test]
fn plan_serializes_percepts_as_strings() {
    let percept: Percept = " R ".parse().expect("percept");
    let plan = Plan::from_steps([HistoryEntry::new(percept, Action::MoveForward)]);

    let json = serde_json::to_value(&plan).expect("serialize");
    assert_eq!(json["steps"][0]["percept"], " R ");
    assert_eq!(json["steps"][0]["action"], "move_forward");

    let roundtrip: Plan = serde_json::from_value(json).expect("deserialize");
    assert_eq!(roundtrip, plan);
}
