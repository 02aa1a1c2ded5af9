use criterion::{Criterion, criterion_group, criterion_main};
use hashstream::hash::md5;
use std::hint::black_box;

pub fn bench_md5(c: &mut Criterion) {
    c.bench_function("md5", |b| {
        b.iter(|| md5(black_box(&[0u8; 64])))
    });
}

criterion_group!(benches, bench_md5);
criterion_main!(benches);
