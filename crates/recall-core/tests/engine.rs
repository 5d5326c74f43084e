use recall_core::{
    Action, ActivePlan, ConfigError, EngineConfig, EngineState, Extraction, HistoryEntry,
    Percept, Plan, PlanEngine, StoreError,
};

fn p(s: &str) -> Percept {
    s.parse().expect("percept")
}

fn plan(steps: &[(&str, Action)]) -> Plan {
    Plan::from_steps(steps.iter().map(|(s, a)| HistoryEntry::new(p(s), *a)))
}

fn engine() -> PlanEngine {
    PlanEngine::new(EngineConfig::default().with_seed(11)).expect("valid config")
}

#[test]
fn engine_wanders_randomly_with_an_empty_store() {
    let mut engine = engine();
    let action = engine.think(p("X  "));

    assert!(Action::ALL.contains(&action));
    assert_eq!(engine.state(), EngineState::Wandering);
    assert_eq!(engine.stats().random_steps, 1);
    assert_eq!(
        engine.history().front().copied(),
        Some(HistoryEntry::new(p("X  "), action))
    );
}

#[test]
fn engine_replays_a_matching_plan_step_by_step() {
    let mut engine = engine();
    let id = engine
        .learn(plan(&[("X  ", Action::TurnRight), ("B  ", Action::MoveForward)]))
        .expect("valid plan")
        .id();

    assert_eq!(engine.think(p("X  ")), Action::TurnRight);
    assert_eq!(engine.active(), Some(ActivePlan { id, cursor: 1 }));

    assert_eq!(engine.think(p("B  ")), Action::MoveForward);
    assert_eq!(engine.active(), Some(ActivePlan { id, cursor: 2 }));

    assert_eq!(engine.stats().plan_steps, 2);
    assert_eq!(engine.stats().random_steps, 0);
    assert_eq!(engine.history().len(), 2);
}

#[test]
fn engine_surprise_demotes_and_returns_to_wandering() {
    let mut engine = engine();
    let id = engine
        .learn(plan(&[("X  ", Action::TurnRight), ("B  ", Action::MoveForward)]))
        .expect("valid plan")
        .id();

    engine.think(p("X  "));
    engine.think(p("BBB"));

    assert_eq!(engine.state(), EngineState::Wandering);
    assert_eq!(engine.stats().surprises, 1);
    let weight = engine.store().get(id).map(|plan| plan.weight).expect("still stored");
    assert!((weight - 0.9).abs() < 1e-12);
}

#[test]
fn engine_picks_a_new_plan_in_the_same_tick_as_a_surprise() {
    let mut engine = engine();
    engine
        .learn(plan(&[("X  ", Action::TurnRight), ("B  ", Action::MoveForward)]))
        .expect("valid plan");
    let other = engine
        .learn(plan(&[("BBB", Action::TurnLeft), ("X  ", Action::MoveForward)]))
        .expect("valid plan")
        .id();

    engine.think(p("X  "));
    let action = engine.think(p("BBB"));

    assert_eq!(action, Action::TurnLeft);
    assert_eq!(engine.active(), Some(ActivePlan { id: other, cursor: 1 }));
    assert_eq!(engine.stats().surprises, 1);
}

#[test]
fn engine_evicts_a_plan_after_ten_surprises() {
    let mut engine = engine();
    let id = engine
        .learn(plan(&[("X  ", Action::TurnRight), ("B  ", Action::MoveForward)]))
        .expect("valid plan")
        .id();

    for round in 1..=10 {
        assert_eq!(engine.think(p("X  ")), Action::TurnRight, "round {round}");
        engine.think(p("RRR"));
        if round < 10 {
            assert!(engine.store().get(id).is_some(), "evicted early at {round}");
        }
    }

    assert!(engine.store().is_empty());
    assert!(!engine.is_following());
    assert_eq!(engine.stats().evictions, 1);
    assert_eq!(engine.stats().surprises, 10);
}

#[test]
fn engine_treats_an_exhausted_plan_as_a_surprise() {
    let mut engine = engine();
    let id = engine
        .learn(plan(&[(" R ", Action::MoveForward)]))
        .expect("valid plan")
        .id();

    assert_eq!(engine.think(p(" R ")), Action::MoveForward);
    assert_eq!(engine.active(), Some(ActivePlan { id, cursor: 1 }));

    // No reward arrived; the next tick surprises and re-selects the same plan.
    assert_eq!(engine.think(p(" R ")), Action::MoveForward);
    assert_eq!(engine.active(), Some(ActivePlan { id, cursor: 1 }));
    assert_eq!(engine.stats().surprises, 1);
    let weight = engine.store().get(id).map(|plan| plan.weight).expect("still stored");
    assert!((weight - 0.9).abs() < 1e-12);
}

#[test]
fn engine_reward_reinforces_the_active_plan_and_learns() {
    let mut engine = engine();
    let id = engine
        .learn(plan(&[("X  ", Action::MoveForward), ("B  ", Action::MoveForward)]))
        .expect("valid plan")
        .id();

    engine.think(p("X  "));
    engine.think(p("B  "));
    let outcome = engine.on_reward();

    assert_eq!(engine.store().get(id).map(|plan| plan.weight), Some(1.5));
    assert!(!engine.is_following());
    assert!(engine.history().is_empty());

    let learned = outcome.stored().expect("learned");
    assert_eq!(outcome, Extraction::Learned(learned));
    assert_eq!(
        engine.store().get(learned),
        Some(&plan(&[("B  ", Action::MoveForward)]))
    );
    assert_eq!(engine.stats().plans_learned, 1);
    assert_eq!(engine.stats().rewards, 1);
}

#[test]
fn engine_learned_plan_is_found_again() {
    let mut engine = engine();
    // Wander until the engine happens to pick a forward move.
    let moved = (0..100).any(|_| engine.think(p(" R ")) == Action::MoveForward);
    assert!(moved, "no forward move in 100 random ticks");

    let outcome = engine.on_reward();
    assert!(outcome.stored().is_some());

    assert_eq!(engine.think(p(" R ")), Action::MoveForward);
    assert!(engine.is_following());
}

#[test]
fn engine_rejects_invalid_config() {
    let config = EngineConfig {
        history_capacity: 0,
        ..EngineConfig::default()
    };
    assert_eq!(PlanEngine::new(config).err(), Some(ConfigError::ZeroHistory));

    let config = EngineConfig {
        surprise_penalty: 0.0,
        ..EngineConfig::default()
    };
    assert_eq!(
        PlanEngine::new(config).err(),
        Some(ConfigError::SurprisePenalty(0.0))
    );
}

#[test]
fn engine_refuses_plans_that_could_never_be_selected() {
    let mut engine = engine();

    for weight in [0.0, -1.0, 1e-12, f64::NAN, f64::INFINITY] {
        let mut dead = plan(&[(" R ", Action::MoveForward)]);
        dead.weight = weight;
        match engine.learn(dead) {
            Err(StoreError::Weight(w)) => assert!(w.is_nan() || w == weight),
            other => panic!("weight {weight} was not refused: {other:?}"),
        }
    }
    assert_eq!(engine.learn(Plan::new()), Err(StoreError::EmptyPlan));
    assert!(engine.store().is_empty());

    // With nothing stored, the tick loop falls back to wandering.
    assert!(Action::ALL.contains(&engine.think(p(" R "))));
    assert_eq!(engine.stats().random_steps, 1);
}

#[test]
fn engine_rejects_an_initial_weight_below_eviction() {
    let config = EngineConfig {
        initial_weight: 1e-12,
        ..EngineConfig::default()
    };
    assert_eq!(
        PlanEngine::new(config).err(),
        Some(ConfigError::InitialWeight(1e-12))
    );
}
