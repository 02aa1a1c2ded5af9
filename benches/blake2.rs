use criterion::{Criterion, criterion_group, criterion_main};
use hashstream::hash::blake2b;
use std::hint::black_box;

pub fn bench_blake2b(c: &mut Criterion) {
    c.bench_function("blake2b", |b| {
        b.iter(|| blake2b(black_box(&[0u8; 128]), 64).unwrap())
    });
}

criterion_group!(benches, bench_blake2b);
criterion_main!(benches);
