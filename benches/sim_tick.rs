use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{SceneSnapshot, Simulator};
use tui_blockfall::types::WorldBounds;

const BOUNDS: WorldBounds = WorldBounds::new(60.0, 200.0);

/// A simulator with `per_column` settled blocks in every column.
fn stacked_sim(per_column: usize) -> Simulator {
    let mut sim = Simulator::new(BOUNDS, 12345);
    for _ in 0..per_column {
        for column in 0..6 {
            sim.spawn_into(column);
        }
        for _ in 0..1000 {
            sim.tick(0);
        }
    }
    sim
}

fn bench_tick(c: &mut Criterion) {
    let mut sim = stacked_sim(20);

    c.bench_function("tick_120_settled_blocks", |b| {
        b.iter(|| {
            sim.tick(black_box(0));
        })
    });
}

fn bench_rotate_hit(c: &mut Criterion) {
    let mut sim = stacked_sim(20);

    c.bench_function("rotate_hit_bottom_block", |b| {
        b.iter(|| {
            sim.rotate_at(black_box(5.0), black_box(195.0));
        })
    });
}

fn bench_rotate_miss(c: &mut Criterion) {
    let mut sim = stacked_sim(20);

    // A point above every stack: the scan visits all blocks and misses.
    c.bench_function("rotate_miss_scans_all", |b| {
        b.iter(|| {
            sim.rotate_at(black_box(5.0), black_box(-50.0));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let sim = stacked_sim(20);
    let mut snap = SceneSnapshot::new(BOUNDS);

    c.bench_function("snapshot_120_blocks", |b| {
        b.iter(|| {
            sim.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_rotate_hit,
    bench_rotate_miss,
    bench_snapshot_into
);
criterion_main!(benches);
