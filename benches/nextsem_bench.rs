use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nextsem::prelude::*;

fn parse_ok_inputs() -> Vec<&'static str> {
    vec![
        "0.0.0",
        "1.2.3",
        "10.20.30",
        "1.2.3-alpha.1",
        "1.2.3-alpha.1+build.5",
    ]
}

fn parse_ok(inputs: &[&str]) {
    for input in inputs {
        let res = Version::parse(input);
        assert!(res.is_ok());
    }
}

fn next_inputs() -> Vec<(&'static str, ReleaseType)> {
    vec![
        ("1.2.3", ReleaseType::Major),
        ("1.2.3", ReleaseType::Patch),
        ("1.2.3", ReleaseType::PreMinor),
        ("1.2.3-alpha.1", ReleaseType::PreRelease),
    ]
}

fn next(inputs: &[(Version, ReleaseType)]) {
    for (version, release) in inputs {
        let _ = version.next(*release, Some("alpha"), false);
    }
}

fn compare(versions: &[Version]) {
    for left in versions {
        for right in versions {
            let _ = left.cmp(right);
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_ok", |b| {
        b.iter(|| parse_ok(black_box(&parse_ok_inputs())))
    });

    let parsed_next_inputs: Vec<(Version, ReleaseType)> = next_inputs()
        .into_iter()
        .map(|(input, release)| (Version::parse(input).unwrap(), release))
        .collect();
    c.bench_function("next", |b| b.iter(|| next(black_box(&parsed_next_inputs))));

    let versions: Vec<Version> = parse_ok_inputs()
        .into_iter()
        .map(|input| Version::parse(input).unwrap())
        .collect();
    c.bench_function("compare", |b| b.iter(|| compare(black_box(&versions))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
