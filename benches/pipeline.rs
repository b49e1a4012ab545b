//! Benchmarks for the tartan pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tartan::{encode_png, Catalogs, Sett, TartanWeaver, ThreadCountParser};

const ROYAL_STEWART: &str = "R/72 B8 K12 Y2 K2 W2 K2 G16 R8 K2 R4 W/2";

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let catalogs = Catalogs::builtin().unwrap();
    let parser = ThreadCountParser::new(&catalogs.colours);

    // Every built-in tartan joined into one long thread count
    let long: String = catalogs
        .tartans
        .iter()
        .map(|(_, tc)| tc)
        .collect::<Vec<_>>()
        .join(", ");

    group.bench_function("parse_short", |b| {
        b.iter(|| parser.parse(black_box("G1 K6 B3 R1")).unwrap())
    });

    group.bench_function("parse_catalog", |b| {
        b.iter(|| parser.parse(black_box(&long)).unwrap())
    });

    group.finish();
}

// -- Weaving benchmarks --

fn bench_weaving(c: &mut Criterion) {
    let mut group = c.benchmark_group("weaving");

    let catalogs = Catalogs::builtin().unwrap();
    let pattern = ThreadCountParser::new(&catalogs.colours)
        .parse(ROYAL_STEWART)
        .unwrap();
    let sett = Sett::from_pattern(&pattern);
    let weaver = TartanWeaver::new(&catalogs.colours);

    group.bench_function("weave_300", |b| {
        b.iter(|| weaver.weave(black_box(&sett), 300, 1.0).unwrap())
    });

    group.bench_function("weave_900", |b| {
        b.iter(|| weaver.weave(black_box(&sett), 900, 1.0).unwrap())
    });

    group.bench_function("weave_full_scale_2", |b| {
        b.iter(|| weaver.weave_full(black_box(&sett), 2.0).unwrap())
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let catalogs = Catalogs::builtin().unwrap();
    let pattern = ThreadCountParser::new(&catalogs.colours)
        .parse(ROYAL_STEWART)
        .unwrap();
    let image = TartanWeaver::new(&catalogs.colours)
        .render(&pattern, 900, 1.0)
        .unwrap();

    group.bench_function("encode_png_900", |b| {
        b.iter(|| encode_png(black_box(&image)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_weaving, bench_encoding);
criterion_main!(benches);
