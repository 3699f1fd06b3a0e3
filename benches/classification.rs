use criterion::{black_box, criterion_group, criterion_main, Criterion};
use name_colors::{identify, rgb_to_hsv, RgbSample, Strategy};

fn sample_grid() -> Vec<RgbSample> {
    let mut samples = Vec::new();
    for r in (0..=255u8).step_by(51) {
        for g in (0..=255u8).step_by(51) {
            for b in (0..=255u8).step_by(51) {
                samples.push(RgbSample::new(r, g, b));
            }
        }
    }
    samples
}

fn benchmark_conversion(c: &mut Criterion) {
    let samples = sample_grid();
    c.bench_function("rgb_to_hsv", |b| {
        b.iter(|| {
            for s in &samples {
                black_box(rgb_to_hsv(s.r, s.g, s.b));
            }
        })
    });
}

fn benchmark_strategies(c: &mut Criterion) {
    let samples = sample_grid();
    let mut group = c.benchmark_group("identify");
    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                for s in &samples {
                    black_box(identify(black_box(*s), strategy));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_conversion, benchmark_strategies);
criterion_main!(benches);
