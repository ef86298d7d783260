use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eflat::{flatten, flatten_json, Map, Value};

/// Builds a tree `depth` levels deep with `width` children per level.
fn build_tree(depth: usize, width: usize) -> Map {
    let mut map = Map::with_capacity(width);
    for i in 0..width {
        let key = format!("key{}", i);
        let child = if depth <= 1 {
            Value::from(format!("leaf{}", i))
        } else {
            Value::Object(build_tree(depth - 1, width))
        };
        map.insert(key, child);
    }
    map
}

fn benchmark_flatten_simple(c: &mut Criterion) {
    let input: Map = serde_json::from_str(r#"{"hello":{"world":{"again":"good morning"}}}"#)
        .expect("valid json");

    c.bench_function("flatten_simple", |b| b.iter(|| flatten(black_box(&input))));
}

fn benchmark_flatten_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_tree");

    for (depth, width) in [(2, 10), (4, 5), (6, 3)].iter() {
        let input = build_tree(*depth, *width);
        group.bench_with_input(
            BenchmarkId::new("depth_width", format!("{}x{}", depth, width)),
            &input,
            |b, input| b.iter(|| flatten(black_box(input))),
        );
    }

    group.finish();
}

fn benchmark_flatten_arrays(c: &mut Criterion) {
    let mut input = Map::new();
    for i in 0..100 {
        let items = (0..50).map(Value::from).collect::<Vec<_>>();
        let mut inner = Map::new();
        inner.insert("items".to_string(), Value::Array(items));
        input.insert(format!("group{}", i), Value::Object(inner));
    }

    c.bench_function("flatten_arrays", |b| b.iter(|| flatten(black_box(&input))));
}

fn benchmark_flatten_json(c: &mut Criterion) {
    let json = serde_json::to_string(&build_tree(4, 5)).expect("serializable");

    c.bench_function("flatten_json_decode_and_flatten", |b| {
        b.iter(|| flatten_json(black_box(&json)))
    });
}

criterion_group!(
    benches,
    benchmark_flatten_simple,
    benchmark_flatten_tree,
    benchmark_flatten_arrays,
    benchmark_flatten_json
);
criterion_main!(benches);
