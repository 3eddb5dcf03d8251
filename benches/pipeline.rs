//! Benchmarks for the sandbrush pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sandbrush::parser::parse_texture_file;
use sandbrush::types::{Brushes, NoiseField};
use sandbrush::Canvas;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let walls = load_fixture("walls.texture.md");
    let metals = load_fixture("metals.texture.md");

    group.bench_function("parse_walls", |b| {
        b.iter(|| parse_texture_file(black_box(&walls)).unwrap())
    });

    group.bench_function("parse_metals", |b| {
        b.iter(|| parse_texture_file(black_box(&metals)).unwrap())
    });

    group.finish();
}

// -- Sampling benchmarks --

fn bench_sampling(c: &mut Criterion) {
    let field = NoiseField::new(40, 60.0).unwrap();

    c.bench_function("noise_sample", |b| {
        b.iter(|| field.sample(black_box(123), black_box(-45)))
    });
}

// -- Fill benchmarks --

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for name in ["wall", "rock", "rusty-metal"] {
        let brush = Brushes::builtin(name).unwrap();
        group.bench_function(format!("{}_128x128", name), |b| {
            b.iter(|| {
                let mut canvas = Canvas::new(128, 128);
                canvas.fill(black_box(&brush))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_sampling, bench_fill);
criterion_main!(benches);
