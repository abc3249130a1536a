use criterion::{black_box, Bencher, Criterion};
use signed_token::Signer;
use std::time::Duration;

use crate::utils::bench_sized_string_group;

fn bench_sign(b: &mut Bencher, s: &str) {
  let signer = Signer::<String>::new256("YELLOW SUBMARINE, BLACK WIZARDRY");
  let payload = String::from(s);

  b.iter(|| {
    signer
      .sign_temporary(black_box(&payload), Duration::from_secs(300))
      .expect("Couldn't sign token")
  })
}

fn bench_parse(b: &mut Bencher, s: &str) {
  let signer = Signer::<String>::new256("YELLOW SUBMARINE, BLACK WIZARDRY");
  let token = signer
    .sign_temporary(&String::from(s), Duration::from_secs(300))
    .expect("Failed to generate token");

  b.iter(|| signer.parse(black_box(&token)).expect("Couldn't parse token"))
}

pub fn benches(c: &mut Criterion) {
  bench_sized_string_group(c, "tokens::sign", &bench_sign);
  bench_sized_string_group(c, "tokens::parse", &bench_parse);
}
