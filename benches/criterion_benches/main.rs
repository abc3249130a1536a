use criterion::{criterion_group, criterion_main, Criterion};

mod mac;
mod tokens;
mod utils;

pub fn criterion_benchmark(c: &mut Criterion) {
  mac::benches(c);
  tokens::benches(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
