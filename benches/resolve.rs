// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use snake_lingo::catalog;
use std::hint::black_box;

fn resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let provider = catalog::default_provider().expect("catalog builds");

    group.bench_function("plain_key", |b| {
        b.iter(|| {
            let _ = black_box(provider.resolve(black_box("title")).unwrap());
        });
    });

    group.bench_function("with_parameter", |b| {
        let params = [("score", 128.into())];
        b.iter(|| {
            let _ = black_box(provider.resolve_with(black_box("score"), &params).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
