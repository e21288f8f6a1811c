use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nightfall_core::prelude::*;

fn bench_tick(c: &mut Criterion) {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.set_locked(true);
    engine.set_movement(MoveFlags {
        forward: true,
        ..Default::default()
    });
    let mut wall_time = 0.0;

    c.bench_function("engine_update", |b| {
        b.iter(|| {
            // Keep the player alive so the loop never goes terminal
            engine.survival.vitals.health = 100.0;
            engine.survival.vitals.hunger = 100.0;
            engine.survival.vitals.thirst = 100.0;
            wall_time += 1.0 / 60.0;
            engine.update(black_box(1.0 / 60.0), wall_time);
            engine.drain_events();
        })
    });

    c.bench_function("chop_raycast", |b| {
        b.iter(|| black_box(engine.primary_action()))
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
