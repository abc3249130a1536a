use criterion::{black_box, Bencher, Criterion};
use signed_token::mac::{compute_mac, verify_mac, MacAlgorithm};

use crate::utils::bench_sized_string_group;

const KEY: &[u8] = b"YELLOW SUBMARINE, BLACK WIZARDRY";

fn bench_compute(b: &mut Bencher, s: &str, algorithm: MacAlgorithm) {
  b.iter(|| compute_mac(black_box(s.as_bytes()), black_box(KEY), algorithm).expect("Couldn't compute mac"))
}

fn bench_verify(b: &mut Bencher, s: &str, algorithm: MacAlgorithm) {
  let mac = compute_mac(s.as_bytes(), KEY, algorithm).expect("Couldn't compute mac");

  b.iter(|| {
    verify_mac(black_box(s.as_bytes()), black_box(mac.as_bytes()), black_box(KEY), algorithm)
      .expect("Couldn't verify mac")
  })
}

pub fn benches(c: &mut Criterion) {
  bench_sized_string_group(c, "mac::compute/sha1", &|b, s| bench_compute(b, s, MacAlgorithm::HmacSha1));
  bench_sized_string_group(c, "mac::compute/sha256", &|b, s| bench_compute(b, s, MacAlgorithm::HmacSha256));
  bench_sized_string_group(c, "mac::verify/sha256", &|b, s| bench_verify(b, s, MacAlgorithm::HmacSha256));
}
