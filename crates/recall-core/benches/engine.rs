use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recall_core::{Action, EngineConfig, HistoryEntry, Percept, Plan, PlanEngine};

fn percept(i: u8) -> Percept {
    Percept::from_symbols([b'A' + i % 26, b'a' + (i / 26) % 26, b'R']).expect("percept")
}

fn seeded_engine(plans: u8) -> PlanEngine {
    let mut engine = PlanEngine::new(EngineConfig::default().with_seed(1)).expect("config");
    for i in 0..plans {
        engine
            .learn(Plan::from_steps([
                HistoryEntry::new(percept(i), Action::TurnRight),
                HistoryEntry::new(percept(i.wrapping_add(1)), Action::MoveForward),
            ]))
            .expect("valid plan");
    }
    engine
}

fn bench_engine_think(c: &mut Criterion) {
    let mut engine = seeded_engine(200);
    let mut i = 0u8;

    c.bench_function("recall-core/engine.think(plans=200)", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(engine.think(percept(i % 200)));
        })
    });
}

fn bench_engine_reward(c: &mut Criterion) {
    c.bench_function("recall-core/engine.on_reward(history=20)", |b| {
        b.iter(|| {
            let mut engine = seeded_engine(50);
            for i in 0..20u8 {
                engine.think(percept(i));
            }
            black_box(engine.on_reward());
        })
    });
}

criterion_group!(benches, bench_engine_think, bench_engine_reward);
criterion_main!(benches);
