//! Criterion benchmarks
//! Compress/decompress throughput on text-like and uniform inputs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_compress(c: &mut Criterion) {
    let repetitive = b"the the the and the and the and the cat sat on the mat".repeat(100);
    let uniform: Vec<u8> = (0u8..=255).cycle().take(5000).collect();

    c.bench_function("huffpack_compress_repetitive", |b| {
        b.iter(|| huffpack::compress(black_box(&repetitive)).unwrap())
    });

    c.bench_function("huffpack_compress_uniform", |b| {
        b.iter(|| huffpack::compress(black_box(&uniform)).unwrap())
    });
}

fn bench_decompress(c: &mut Criterion) {
    let repetitive = b"the the the and the and the and the cat sat on the mat".repeat(100);
    let packed = huffpack::compress(&repetitive).unwrap();

    c.bench_function("huffpack_decompress_repetitive", |b| {
        b.iter(|| huffpack::decompress(black_box(&packed)).unwrap())
    });
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
