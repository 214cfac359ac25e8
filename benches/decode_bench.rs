use clavier::layouts::all_layouts;
use clavier::loader::decode;
use clavier::render::{compute, LayoutMetrics};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_decode(c: &mut Criterion) {
    let json = serde_json::to_vec(&all_layouts()).unwrap();

    c.bench_function("decode_all_known_layouts", |b| {
        b.iter(|| decode(black_box(&json)).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let collection = all_layouts();
    let metrics = LayoutMetrics::default();

    c.bench_function("compute_key_frames", |b| {
        b.iter(|| {
            for layout in &collection.keyboards {
                black_box(compute(layout, &metrics, None));
            }
        })
    });
}

criterion_group!(benches, bench_decode, bench_render);
criterion_main!(benches);
