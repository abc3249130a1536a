use criterion::{Bencher, BenchmarkId, Criterion, Throughput};
use std::iter;

static KB: usize = 1024;
static BENCH_SIZES: [usize; 4] = [1, KB, 4 * KB, 16 * KB];

/// Run multiple benchmarks with payloads of growing size relevant for token usage
pub fn bench_sized_string_group(c: &mut Criterion, name: &str, f: &dyn Fn(&mut Bencher, &str)) {
  let mut group = c.benchmark_group(name);
  for size in BENCH_SIZES.iter() {
    group.throughput(Throughput::Bytes(*size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
      let s = iter::repeat('x').take(size).collect::<String>();

      f(b, &s);
    });
  }
  group.finish();
}
