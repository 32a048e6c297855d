use criterion::{criterion_group, criterion_main, Criterion};

use keccak_spec::GeneralizedSpec;

fn resolve_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("resolve");
    g.sample_size(1_000);

    g.bench_with_input("automatic", &GeneralizedSpec::default(), |b, spec| {
        b.iter(|| spec.resolve())
    });
    g.bench_with_input(
        "capacity_only",
        &GeneralizedSpec { capacity: Some(256), ..Default::default() },
        |b, spec| b.iter(|| spec.resolve()),
    );
    g.bench_with_input(
        "fully_specified",
        &GeneralizedSpec {
            state_size: Some(1600),
            word_size: Some(64),
            capacity: Some(512),
            bitrate: Some(1088),
            output_length: Some(256),
        },
        |b, spec| b.iter(|| spec.resolve()),
    );
    g.bench_with_input(
        "incoherent",
        &GeneralizedSpec {
            state_size: Some(1000),
            bitrate: Some(1344),
            capacity: Some(256),
            ..Default::default()
        },
        |b, spec| b.iter(|| spec.resolve()),
    );
    g.finish();
}

criterion_group!(benches, resolve_benchmarks);
criterion_main!(benches);
