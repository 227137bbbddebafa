//! Benchmarks for tree construction, canonical serialization, and the
//! order-independent equality/hash path.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::hint::black_box;

use arbor_core::{JsonArray, JsonObject, JsonValue};
use criterion::{criterion_group, criterion_main, Criterion};

/// A representative document: flat scalars, a tag array, a nested object.
fn build_document(members: usize) -> JsonObject {
    let mut root = JsonObject::new();
    for i in 0..members {
        let mut entry = JsonObject::new();
        entry.insert("id", i as i64);
        entry.insert("ratio", i as f64 / 7.0);
        entry.insert("label", format!("entry-{i}"));
        entry.insert("flag", i % 2 == 0);
        entry.insert("note", None::<&str>);

        let mut tags = JsonArray::new();
        tags.push("alpha");
        tags.push('x');
        tags.push(i as i64);
        entry.insert("tags", tags);

        root.insert(format!("key-{i}"), entry);
    }
    root
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_document_64", |b| {
        b.iter(|| build_document(black_box(64)))
    });
}

fn bench_canonical(c: &mut Criterion) {
    let document = build_document(64);
    c.bench_function("canonical_serialize_64", |b| {
        b.iter(|| black_box(&document).to_string())
    });
}

fn bench_equality_and_hash(c: &mut Criterion) {
    let document = build_document(64);

    // Same members, reversed insertion order: the worst case for the
    // order-independent comparison.
    let mut entries: Vec<(String, JsonValue)> = document
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    entries.reverse();
    let reversed: JsonObject = entries.into_iter().collect();

    c.bench_function("order_independent_eq_64", |b| {
        b.iter(|| black_box(&document) == black_box(&reversed))
    });

    c.bench_function("order_independent_hash_64", |b| {
        b.iter(|| {
            let mut hasher = DefaultHasher::new();
            black_box(&document).hash(&mut hasher);
            hasher.finish()
        })
    });
}

fn bench_contains(c: &mut Criterion) {
    let mut array = JsonArray::new();
    for i in 0..256i64 {
        array.push(i);
    }
    c.bench_function("array_contains_miss_256", |b| {
        b.iter(|| black_box(&array).contains(black_box(2.5)))
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_canonical,
    bench_equality_and_hash,
    bench_contains
);
criterion_main!(benches);
