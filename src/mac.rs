//! Keyed message authentication over raw bytes.
//!
//! Digests are rendered as lowercase hex, and it is that hex string which ends up in the
//! second segment of a token.

use crate::errors::MacErrors;

use ring::hmac::{sign, verify, Key, HMAC_SHA1_FOR_LEGACY_USE_ONLY, HMAC_SHA256};

use std::fmt;

/// The hash primitive a signer is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
  /// HMAC over SHA-1, a 160 bit digest.
  HmacSha1,
  /// HMAC over SHA-256, a 256 bit digest.
  HmacSha256,
}

impl MacAlgorithm {
  fn ring_algorithm(self) -> ring::hmac::Algorithm {
    match self {
      MacAlgorithm::HmacSha1 => HMAC_SHA1_FOR_LEGACY_USE_ONLY,
      MacAlgorithm::HmacSha256 => HMAC_SHA256,
    }
  }

  /// Length of the raw digest in bytes.
  pub fn digest_len(self) -> usize {
    match self {
      MacAlgorithm::HmacSha1 => 20,
      MacAlgorithm::HmacSha256 => 32,
    }
  }

  /// Length of the hex rendered digest, which is what tokens carry.
  pub fn hex_len(self) -> usize {
    self.digest_len() * 2
  }

  pub fn name(self) -> &'static str {
    match self {
      MacAlgorithm::HmacSha1 => "HMAC-SHA1",
      MacAlgorithm::HmacSha256 => "HMAC-SHA256",
    }
  }
}

impl Default for MacAlgorithm {
  fn default() -> Self {
    MacAlgorithm::HmacSha1
  }
}

impl fmt::Display for MacAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Computes the lowercase hex MAC of `message` under `key`.
pub fn compute_mac(message: &[u8], key: &[u8], algorithm: MacAlgorithm) -> Result<String, MacErrors> {
  let mac_key = Key::new(algorithm.ring_algorithm(), key);
  let signed = sign(&mac_key, message);
  let raw_bytes_from_hmac = signed.as_ref();
  if raw_bytes_from_hmac.len() != algorithm.digest_len() {
    return Err(MacErrors::ComputationError);
  }

  Ok(hex::encode(raw_bytes_from_hmac))
}

/// Whether `candidate` is a full length digest written in lowercase hex.
fn is_lowercase_hex(candidate: &[u8], algorithm: MacAlgorithm) -> bool {
  candidate.len() == algorithm.hex_len() && candidate.iter().all(|b| matches!(*b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Checks `candidate` against the MAC of `message` in constant time.
///
/// `candidate` is the hex text exactly as carried by a token, so an uppercase rendering of
/// a correct digest is still a mismatch. The shape check only inspects the candidate; the
/// comparison against the key dependent digest is done by `ring::hmac::verify`.
pub fn verify_mac(message: &[u8], candidate: &[u8], key: &[u8], algorithm: MacAlgorithm) -> Result<(), MacErrors> {
  if !is_lowercase_hex(candidate, algorithm) {
    return Err(MacErrors::InvalidSignature);
  }
  let tag = hex::decode(candidate).map_err(|_| MacErrors::InvalidSignature)?;

  let mac_key = Key::new(algorithm.ring_algorithm(), key);
  verify(&mac_key, message, &tag).map_err(|_| MacErrors::InvalidSignature)
}
