use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scene_demos::config::DemoConfig;
use scene_demos::motion::{orbit_position, update_lights, LightState, OrbitalLightParams};
use scene_demos::scenes::SceneKind;
use scene_demos::window::Viewport;

/// Benchmark: One orbit evaluation
fn bench_orbit_position(c: &mut Criterion) {
    let params = OrbitalLightParams::new(0.5, 5.0);

    c.bench_function("orbit_position", |b| {
        b.iter(|| black_box(orbit_position(black_box(12.345), black_box(&params))))
    });
}

/// Benchmark: Batch update for growing light counts
fn bench_update_lights(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_lights");

    for count in [3, 100, 10000].iter() {
        let params: Vec<OrbitalLightParams> = (0..*count)
            .map(|i| OrbitalLightParams::new(0.1 + i as f32 * 0.01, 2.0 + (i % 7) as f32))
            .collect();
        let mut states = vec![LightState::default(); *count];

        group.bench_with_input(BenchmarkId::new("lights", count), count, |b, _| {
            let mut time = 0.0f32;
            b.iter(|| {
                time += 1.0 / 60.0;
                update_lights(black_box(time), params.iter().zip(states.iter_mut()));
            })
        });
    }

    group.finish();
}

/// Benchmark: Per-frame update of the haunted house
fn bench_scene_update(c: &mut Criterion) {
    let mut scene = SceneKind::HauntedHouse.build(Viewport::default(), &DemoConfig::default());

    c.bench_function("haunted_house_update", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time += 1.0 / 60.0;
            scene.update(black_box(time));
        })
    });
}

criterion_group!(
    benches,
    bench_orbit_position,
    bench_update_lights,
    bench_scene_update
);
criterion_main!(benches);
