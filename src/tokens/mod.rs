//! Builds and verifies `<claims>.<mac>` tokens.
//!
//! Issuing serializes the payload and its optional expiry to JSON and signs those exact
//! bytes. Both segments are then encoded as URL safe base64 without padding. Parsing
//! reverses the steps. The MAC is always checked before the claims are deserialized,
//! and expiry is checked last, against the clock at parse time.

use crate::encoding::{decode_segment, encode_segment};
use crate::errors::{GenericError, TokenRejection};
use crate::mac::{compute_mac, verify_mac, MacAlgorithm};

use serde::de::DeserializeOwned;
use serde::Serialize;

use std::convert::TryFrom;
use std::time::Duration;

pub mod builder;
pub mod claims;
pub mod signer;

pub use self::builder::*;
pub use self::claims::Claims;
pub use self::signer::*;

/// Where "now" comes from when issuing and checking expirations.
///
/// The available clock backends are [`Chrono`] and [`Time`], enabled via the features
/// `chrono` and `time`. The default feature and backend is [`Chrono`]. [`Fixed`] freezes
/// the clock at a given Unix second.
///
/// [`Chrono`]: https://docs.rs/chrono/*/chrono/index.html
/// [`Time`]: https://docs.rs/time/*/time/index.html
/// [`Fixed`]: TimeBackend::Fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeBackend {
  #[cfg(feature = "chrono")]
  Chrono,
  #[cfg(feature = "time")]
  Time,
  Fixed(i64),
}

impl TimeBackend {
  /// The current Unix time in seconds.
  pub fn now(&self) -> i64 {
    match self {
      #[cfg(feature = "chrono")]
      TimeBackend::Chrono => chrono::Utc::now().timestamp(),
      #[cfg(feature = "time")]
      TimeBackend::Time => time::OffsetDateTime::now_utc().unix_timestamp(),
      TimeBackend::Fixed(now) => *now,
    }
  }
}

impl Default for TimeBackend {
  #[cfg(feature = "chrono")]
  fn default() -> Self {
    TimeBackend::Chrono
  }

  #[cfg(all(not(feature = "chrono"), feature = "time"))]
  fn default() -> Self {
    TimeBackend::Time
  }
}

/// Expiration for a token issued at `now`. A missing or zero ttl means the token never
/// expires. Sub-second remainders are dropped.
fn expiry_after(now: i64, ttl: Option<Duration>) -> Option<i64> {
  let ttl = ttl.filter(|ttl| !ttl.is_zero())?;
  let seconds = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
  Some(now.saturating_add(seconds))
}

fn reject(rejection: TokenRejection) -> GenericError {
  #[cfg(feature = "tracing")]
  tracing::debug!(reason = %rejection, "rejected token");

  GenericError::InvalidToken(rejection)
}

/// Issues a token for `payload` at Unix time `now`.
///
/// `payload` - The value to carry, anything serde can serialize.
/// `ttl` - How long the token stays valid. `None` or zero for no expiration.
/// `key` - The signing key.
/// `algorithm` - The MAC algorithm verifiers must also use.
pub fn issue_token<P>(
  payload: &P,
  ttl: Option<Duration>,
  key: &[u8],
  algorithm: MacAlgorithm,
  now: i64,
) -> Result<String, GenericError>
where
  P: Serialize + ?Sized,
{
  let claims = Claims::new(payload, expiry_after(now, ttl));
  let serialized = serde_json::to_vec(&claims).map_err(GenericError::ClaimsSerialization)?;
  let mac = compute_mac(&serialized, key, algorithm).map_err(GenericError::SignatureComputation)?;

  Ok(format!("{}.{}", encode_segment(&serialized), encode_segment(mac.as_bytes())))
}

/// Verifies `token` at Unix time `now` and returns its payload.
///
/// `token` - The token to verify.
/// `key` - The key it was signed with.
/// `algorithm` - The MAC algorithm it was signed with.
pub fn parse_token<P>(token: &str, key: &[u8], algorithm: MacAlgorithm, now: i64) -> Result<P, GenericError>
where
  P: DeserializeOwned,
{
  let token_parts = token.split('.').collect::<Vec<_>>();
  if token_parts.len() != 2 || token_parts.iter().any(|part| part.is_empty()) {
    #[cfg(feature = "tracing")]
    tracing::debug!(segments = token_parts.len(), "rejected token with invalid format");

    return Err(GenericError::InvalidTokenFormat);
  }

  let serialized = decode_segment(token_parts[0]).map_err(|err| reject(TokenRejection::Decode(err)))?;
  let mac = decode_segment(token_parts[1]).map_err(|err| reject(TokenRejection::Decode(err)))?;

  verify_mac(&serialized, &mac, key, algorithm).map_err(|err| reject(TokenRejection::InvalidSignature(err)))?;

  let claims: Claims<P> =
    serde_json::from_slice(&serialized).map_err(|err| reject(TokenRejection::Deserialize(err)))?;

  if claims.is_expired_at(now) {
    let expires_at = claims.expiration().unwrap_or_default();
    return Err(reject(TokenRejection::TokenExpired { expires_at, now }));
  }

  Ok(claims.into_payload())
}

/// Signs `payload` with HMAC-SHA1, without expiration.
pub fn sign<P: Serialize + ?Sized>(payload: &P, key: &[u8]) -> Result<String, GenericError> {
  issue_token(payload, None, key, MacAlgorithm::HmacSha1, TimeBackend::default().now())
}

/// Signs `payload` with HMAC-SHA1, valid for `ttl`.
pub fn sign_temporary<P: Serialize + ?Sized>(payload: &P, ttl: Duration, key: &[u8]) -> Result<String, GenericError> {
  issue_token(payload, Some(ttl), key, MacAlgorithm::HmacSha1, TimeBackend::default().now())
}

/// Signs `payload` with HMAC-SHA256, without expiration.
pub fn sign256<P: Serialize + ?Sized>(payload: &P, key: &[u8]) -> Result<String, GenericError> {
  issue_token(payload, None, key, MacAlgorithm::HmacSha256, TimeBackend::default().now())
}

/// Signs `payload` with HMAC-SHA256, valid for `ttl`.
pub fn sign256_temporary<P: Serialize + ?Sized>(
  payload: &P,
  ttl: Duration,
  key: &[u8],
) -> Result<String, GenericError> {
  issue_token(payload, Some(ttl), key, MacAlgorithm::HmacSha256, TimeBackend::default().now())
}

/// Parses a token signed with HMAC-SHA1.
pub fn parse<P: DeserializeOwned>(token: &str, key: &[u8]) -> Result<P, GenericError> {
  parse_token(token, key, MacAlgorithm::HmacSha1, TimeBackend::default().now())
}

/// Parses a token signed with HMAC-SHA256.
pub fn parse256<P: DeserializeOwned>(token: &str, key: &[u8]) -> Result<P, GenericError> {
  parse_token(token, key, MacAlgorithm::HmacSha256, TimeBackend::default().now())
}
