use recall_core::{Action, EngineConfig, Heading, Pose, Simulation};
use recall_world::{Field, GridWorld, WorldConfig};

#[test]
fn first_reward_yields_a_plan_that_is_recalled() {
    let field = Field::parse(&["   ", " R ", "   "]).expect("layout");
    let mut world = GridWorld::new(field, 0, 5);
    let mut sim = Simulation::new(
        Pose::new(0, 0, Heading::East),
        EngineConfig::default().with_seed(5),
    )
    .expect("valid config");

    let mut rewarding = None;
    sim.run_until(&mut world, 10_000, |report| {
        if report.rewarded {
            rewarding = Some(*report);
        }
        report.rewarded
    });
    let report = rewarding.expect("agent reached the reward");
    assert_eq!(report.action, Action::MoveForward);
    assert_eq!(sim.state.score, 1);

    let store = sim.engine.store();
    assert!(store.iter().any(|(_, plan)| {
        plan.last_step().map(|s| (s.percept, s.action)) == Some((report.percept, Action::MoveForward))
    }));

    // Presenting the learned plan's leading percept must find a plan, not fall back.
    let id = report
        .extraction
        .and_then(|e| e.stored())
        .expect("first reward learns a plan");
    let plan = store.get(id).expect("stored").clone();
    let leading = plan.leading_percept().expect("non-empty plan");
    let first_move = plan.step(0).map(|s| s.action);

    let random_before = sim.engine.stats().random_steps;
    let action = sim.engine.think(leading);
    assert!(sim.engine.is_following());
    assert_eq!(Some(action), first_move);
    assert_eq!(sim.engine.stats().random_steps, random_before);
}

#[test]
fn agent_keeps_scoring_on_the_reference_field() {
    let mut world = GridWorld::from_config(&WorldConfig::default(), 1).expect("layout");
    let mut sim = Simulation::new(
        Pose::new(0, 0, Heading::East),
        EngineConfig::default().with_seed(1),
    )
    .expect("valid config");

    sim.run_until(&mut world, 5_000, |_| false);

    let stats = sim.engine.stats();
    assert!(sim.state.score > 0);
    assert_eq!(stats.rewards, sim.state.score);
    assert!(!sim.engine.store().is_empty());
    assert_eq!(stats.thoughts, 5_000);
    assert_eq!(stats.plan_steps + stats.random_steps, 5_000);
    assert!(sim.engine.history().len() <= 20);
}
