use criterion::{Criterion, criterion_group, criterion_main};
use hashstream::hash::sha3_256;
use std::hint::black_box;

pub fn bench_sha3_256(c: &mut Criterion) {
    c.bench_function("sha3_256", |b| {
        b.iter(|| sha3_256(black_box(&[0u8; 136])))
    });
}

criterion_group!(benches, bench_sha3_256);
criterion_main!(benches);
