use criterion::measurement::WallTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, Criterion};
use decodebench::json::Document;
use decodebench::{record, Record, Strategy};

const SMALL_DOCUMENT: &str = r#"[
    {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
    {"userId": 1, "id": 2, "title": "quis ut nam facilis et officia qui", "completed": false},
    {"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": false},
    {"userId": 1, "id": 4, "title": "et porro tempora", "completed": true}
]"#;

const BUNDLED_DOCUMENT: &str = include_str!("../../document.json");

fn dynamic_wrapper(json: &[u8]) -> Vec<Record> {
    let doc = Document::from_json_bytes(json).unwrap();
    doc.root().array_value().map(record::from_json).collect()
}

fn generic_object(json: &[u8]) -> Vec<Record> {
    let objects: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_slice(json).unwrap();
    objects.iter().map(record::from_object).collect()
}

fn wrapper_dictionary(json: &[u8]) -> Vec<Record> {
    let doc = Document::from_json_bytes(json).unwrap();
    doc.root()
        .array_value()
        .map(record::from_json_dictionary)
        .collect()
}

fn typed_records(json: &[u8]) -> Vec<Record> {
    serde_json::from_slice(json).unwrap()
}

fn bench_with_input(mut group: BenchmarkGroup<'_, WallTime>, input: &str) {
    let input = input.as_bytes();

    group.bench_function("dynamic-wrapper", |b| {
        b.iter(|| dynamic_wrapper(black_box(input)));
    });

    group.bench_function("generic-object", |b| {
        b.iter(|| generic_object(black_box(input)));
    });

    group.bench_function("wrapper-dictionary", |b| {
        b.iter(|| wrapper_dictionary(black_box(input)));
    });

    group.bench_function("serde-typed", |b| {
        b.iter(|| typed_records(black_box(input)));
    });

    // The same loop body `decodebench::run` times.
    for strategy in Strategy::ALL {
        let prepared = strategy.prepare(input).unwrap();
        group.bench_function(format!("{strategy}/prepared"), |b| {
            b.iter(|| {
                prepared.for_each_record(|record| {
                    black_box(record);
                });
            });
        });
    }
}

fn benchmarks(c: &mut Criterion) {
    bench_with_input(c.benchmark_group("small"), SMALL_DOCUMENT);
    bench_with_input(c.benchmark_group("bundled"), BUNDLED_DOCUMENT);
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
