use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_tiles::core::{generate_pattern, GameSnapshot, GameState, SimpleRng};
use memory_tiles::store::MemoryStore;
use memory_tiles::types::TICK_MS;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345, Box::<MemoryStore>::default());
    state.start();

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_generate_pattern(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_pattern_len23_5x5", |b| {
        b.iter(|| generate_pattern(black_box(23), black_box(5), &mut rng))
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut state = GameState::new(12345, Box::<MemoryStore>::default());
    state.start();
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_into_reused_buffer", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snapshot);
            black_box(&snapshot);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_generate_pattern,
    bench_snapshot_into
);
criterion_main!(benches);
