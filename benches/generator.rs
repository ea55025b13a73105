use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mavex::core::generator::BaselineHeartRate;
use mavex::{Roster, VitalsGenerator};

fn generate_series(c: &mut Criterion) {
    let baseline = BaselineHeartRate::new(72.0).unwrap();
    let mut generator = VitalsGenerator::seeded(1);
    c.bench_function("generate_series", |b| {
        b.iter(|| generator.generate(black_box(baseline)))
    });
}

fn filter_roster(c: &mut Criterion) {
    let roster = Roster::builtin(&mut VitalsGenerator::seeded(1)).unwrap();
    c.bench_function("filter_roster", |b| b.iter(|| roster.filter(black_box("pri")).len()));
}

criterion_group!(benches, generate_series, filter_roster);
criterion_main!(benches);
