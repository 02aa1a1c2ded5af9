use criterion::{Criterion, criterion_group, criterion_main};
use hashstream::hash::sha1;
use std::hint::black_box;

pub fn bench_sha1(c: &mut Criterion) {
    c.bench_function("sha1", |b| {
        b.iter(|| sha1(black_box(&[0u8; 64])))
    });
}

criterion_group!(benches, bench_sha1);
criterion_main!(benches);
